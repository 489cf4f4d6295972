// Host-side tests for the uptime/overheat timer.

use folio_core::*;

#[test]
fn inactive_timer_does_not_count() {
    let mut t = UptimeTimer::new();
    for _ in 0..10 {
        assert!(!t.tick());
    }
    assert_eq!(t.seconds, 0);
}

#[test]
fn overheats_exactly_at_the_threshold() {
    let mut t = UptimeTimer::new();
    t.set_active(true);
    for s in 1..THERMAL_LIMIT_SECS {
        assert!(!t.tick(), "no latch at {s}s");
        assert!(!t.overheated);
    }
    assert!(t.tick(), "latch on the threshold tick");
    assert!(t.overheated);
    assert_eq!(t.seconds, THERMAL_LIMIT_SECS);
}

#[test]
fn no_ticks_counted_while_overheated() {
    let mut t = UptimeTimer::new();
    t.set_active(true);
    for _ in 0..THERMAL_LIMIT_SECS {
        t.tick();
    }
    assert!(t.overheated);
    for _ in 0..50 {
        assert!(!t.tick(), "never double-latch the same crossing");
    }
    assert_eq!(t.seconds, THERMAL_LIMIT_SECS, "counter frozen while locked");
}

#[test]
fn reset_clears_counter_and_latch() {
    let mut t = UptimeTimer::new();
    t.set_active(true);
    for _ in 0..THERMAL_LIMIT_SECS {
        t.tick();
    }
    t.reset();
    assert_eq!(t.seconds, 0);
    assert!(!t.overheated);
    assert!(t.active, "reset keeps the system active");

    // the next full run latches again
    let mut latched = 0;
    for _ in 0..THERMAL_LIMIT_SECS {
        if t.tick() {
            latched += 1;
        }
    }
    assert_eq!(latched, 1);
}

#[test]
fn warns_just_before_the_limit() {
    let mut t = UptimeTimer::new();
    t.set_active(true);
    for _ in 0..(THERMAL_LIMIT_SECS - THERMAL_WARN_WINDOW_SECS) {
        t.tick();
    }
    assert!(!t.near_limit());
    t.tick();
    assert!(t.near_limit());
}

#[test]
fn mmss_formatting_pads_both_fields() {
    assert_eq!(format_mmss(0), "00:00");
    assert_eq!(format_mmss(5), "00:05");
    assert_eq!(format_mmss(65), "01:05");
    assert_eq!(format_mmss(180), "03:00");
    assert_eq!(format_mmss(3599), "59:59");
}
