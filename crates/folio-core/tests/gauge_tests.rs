// Host-side tests for the hold-to-confirm gauge.

use folio_core::*;

#[test]
fn gauge_charges_to_exactly_one_and_clamps() {
    let mut g = HoldGauge::new(1500.0, 1000.0);
    g.press();
    // one exact-duration tick lands exactly on 1
    let completed = g.update(1500.0);
    assert!(completed);
    assert_eq!(g.value(), 1.0);

    // overshooting held time never exceeds 1
    let mut g = HoldGauge::new(1500.0, 1000.0);
    g.press();
    let mut fired = 0;
    for _ in 0..20 {
        if g.update(100.0) {
            fired += 1;
        }
        assert!(g.value() <= 1.0);
    }
    assert_eq!(g.value(), 1.0);
    assert_eq!(fired, 1, "completion must fire exactly once");
}

#[test]
fn gauge_decay_floors_at_zero() {
    let mut g = HoldGauge::new(1500.0, 1000.0);
    g.press();
    g.update(750.0); // half charged
    assert!((g.value() - 0.5).abs() < 1e-5);

    g.release();
    g.update(500.0); // half of the decay duration drains half
    assert!(g.value().abs() < 1e-5);
    g.update(10_000.0);
    assert_eq!(g.value(), 0.0);
}

#[test]
fn gauge_decay_rate_is_independent_of_charge_rate() {
    // asymmetric feel: fast charge, slow drain
    let mut g = HoldGauge::new(500.0, 2000.0);
    g.press();
    g.update(250.0);
    assert!((g.value() - 0.5).abs() < 1e-5);
    g.release();
    g.update(500.0); // 500/2000 = quarter drained
    assert!((g.value() - 0.25).abs() < 1e-5);
}

#[test]
fn gauge_freezes_at_full_until_reset() {
    let mut g = HoldGauge::new(1000.0, 1000.0);
    g.press();
    assert!(g.update(1000.0));
    g.release();
    // frozen: no decay, no second completion
    assert!(!g.update(5000.0));
    assert_eq!(g.value(), 1.0);
    assert!(g.is_complete());

    g.reset();
    assert_eq!(g.value(), 0.0);
    assert!(!g.is_complete());
    assert!(g.idle());
}

#[test]
fn gauge_direction_follows_flag_at_sample_time() {
    let mut g = HoldGauge::new(1000.0, 1000.0);
    g.press();
    g.release();
    g.press();
    // only the flag value at sample time governs the tick
    g.update(100.0);
    assert!((g.value() - 0.1).abs() < 1e-5);
}

#[test]
fn gauge_idle_only_when_drained_and_released() {
    let mut g = HoldGauge::new(1000.0, 1000.0);
    assert!(g.idle());
    g.press();
    assert!(!g.idle()); // held at zero still needs the loop
    g.update(100.0);
    g.release();
    assert!(!g.idle()); // decaying
    g.update(1000.0);
    assert!(g.idle());
}

#[test]
fn spin_rate_accelerates_with_charge() {
    let slow = spin_rate_deg_per_sec(0.1);
    let fast = spin_rate_deg_per_sec(0.9);
    assert!(fast > slow);
    assert!((spin_rate_deg_per_sec(0.0) - SPIN_BASE_DEG_PER_SEC).abs() < 1e-3);

    let mut spin = HoldSpin::default();
    spin.advance(0.0, 1.0);
    assert_eq!(spin.angle_deg, 0.0, "no spin while the gauge is empty");
    spin.advance(0.5, 1.0);
    assert!(spin.angle_deg > 0.0);
}

#[test]
fn hold_dash_array_spans_zero_to_half() {
    assert_eq!(hold_dash_array(0.0), "0.0000 0.5000 0.0000 0.5000");
    assert_eq!(hold_dash_array(1.0), "0.5000 0.0000 0.5000 0.0000");
}

// End-to-end scenario: a continuous hold for the full charge duration
// completes exactly once, regardless of the frame cadence.
#[test]
fn scenario_hold_for_full_duration_completes_once() {
    let mut g = HoldGauge::new(GATE_CHARGE_MS, GATE_DECAY_MS);
    g.press();
    let mut fired = 0;
    let mut elapsed = 0.0;
    while elapsed < GATE_CHARGE_MS + 100.0 {
        if g.update(16.0) {
            fired += 1;
        }
        elapsed += 16.0;
    }
    assert_eq!(fired, 1);
    assert_eq!(g.value(), 1.0);
}
