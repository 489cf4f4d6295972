// Host-side tests for the horizontal choreography track.

use folio_core::*;

const GAP: f32 = 4.0;
const CENTER: f32 = 42.5;

#[test]
fn first_and_last_items_center_at_track_extremes() {
    for n in 2..=6 {
        let widths = vec![45.0; n];
        let layout = TrackLayout::compute(&widths, GAP, CENTER);
        let first = layout.centers[0];
        let last = layout.centers[n - 1];
        assert!(first.abs() < 1e-6, "first center must be 0 for n={n}");
        assert!((last - 1.0).abs() < 1e-6, "last center must be 1 for n={n}");
    }
}

#[test]
fn centers_are_monotonic_for_mixed_widths() {
    let widths = [60.0, 45.0, 45.0, 45.0];
    let layout = TrackLayout::compute(&widths, GAP, CENTER);
    for pair in layout.centers.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn item_sits_on_focal_column_at_its_center_progress() {
    // the defining identity: translating the track to x_at(p_i) puts item
    // i's midpoint exactly on the focal column
    let widths = [60.0, 45.0, 45.0];
    let layout = TrackLayout::compute(&widths, GAP, CENTER);

    let mut offset = 0.0;
    for (i, w) in widths.iter().enumerate() {
        let p = layout.centers[i];
        let item_mid = layout.x_at(p) + offset + w * 0.5;
        assert!(
            (item_mid - CENTER).abs() < 1e-3,
            "item {i} midpoint {item_mid} != {CENTER} at p={p}"
        );
        offset += w + GAP;
    }
}

#[test]
fn single_item_track_degenerates_without_panic() {
    let layout = TrackLayout::compute(&[60.0], GAP, CENTER);
    assert!(layout.is_static());
    assert_eq!(layout.centers, vec![0.0]);
    // no scroll-driven movement
    assert_eq!(layout.x_at(0.0), layout.x_at(1.0));
    assert_eq!(layout.x_at(0.5), CENTER - 30.0);
}

#[test]
fn empty_track_is_harmless() {
    let layout = TrackLayout::compute(&[], GAP, CENTER);
    assert!(layout.is_static());
    assert!(layout.centers.is_empty());
    assert_eq!(layout.x_at(0.7), 0.0);
}

#[test]
fn x_at_clamps_progress() {
    let widths = [45.0, 45.0];
    let layout = TrackLayout::compute(&widths, GAP, CENTER);
    assert_eq!(layout.x_at(-1.0), layout.x_at(0.0));
    assert_eq!(layout.x_at(2.0), layout.x_at(1.0));
}

#[test]
fn layout_mode_switches_at_breakpoint() {
    assert_eq!(layout_mode(COMPACT_BREAKPOINT_PX - 1.0), LayoutMode::Compact);
    assert_eq!(layout_mode(COMPACT_BREAKPOINT_PX), LayoutMode::Wide);
    assert_eq!(layout_mode(1920.0), LayoutMode::Wide);
}

#[test]
fn item_aspect_widths_follow_mode() {
    assert_eq!(ItemAspect::Wide.width_vw(LayoutMode::Wide), TRACK_WIDE_ITEM_VW);
    assert_eq!(
        ItemAspect::Standard.width_vw(LayoutMode::Wide),
        TRACK_STD_ITEM_VW
    );
    // compact stacks full width regardless of orientation
    assert_eq!(
        ItemAspect::Wide.width_vw(LayoutMode::Compact),
        ItemAspect::Standard.width_vw(LayoutMode::Compact)
    );
}

#[test]
fn sticky_progress_spans_zero_to_one() {
    let section_h = 4000.0;
    let viewport_h = 1000.0;
    assert_eq!(sticky_progress(0.0, section_h, viewport_h), 0.0);
    assert_eq!(sticky_progress(-1500.0, section_h, viewport_h), 0.5);
    assert_eq!(sticky_progress(-3000.0, section_h, viewport_h), 1.0);
    // over-scroll clamps
    assert_eq!(sticky_progress(-9000.0, section_h, viewport_h), 1.0);
    assert_eq!(sticky_progress(500.0, section_h, viewport_h), 0.0);
}

#[test]
fn sticky_progress_guards_short_sections() {
    // section shorter than the viewport has no scrollable range
    assert_eq!(sticky_progress(-100.0, 500.0, 1000.0), 0.0);
    assert_eq!(sticky_progress(-100.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn intersection_progress_traverses_the_viewport() {
    let vh = 1000.0;
    let item_h = 400.0;
    // entering from below
    assert_eq!(intersection_progress(vh, item_h, vh), 0.0);
    // centered on screen
    let centered_top = (vh - item_h) / 2.0;
    assert!((intersection_progress(centered_top, item_h, vh) - 0.5).abs() < 1e-6);
    // fully departed above
    assert_eq!(intersection_progress(-item_h, item_h, vh), 1.0);
}

// End-to-end scenario: sweeping scroll progress across a three-item track,
// each item's focus peaks at its own center point and is fully desaturated
// at the opposite extreme.
#[test]
fn scenario_focus_sweeps_across_three_items() {
    let widths = [60.0, 45.0, 45.0];
    let layout = TrackLayout::compute(&widths, GAP, CENTER);
    let envelopes: Vec<FocusEnvelope> = layout
        .centers
        .iter()
        .map(|c| FocusEnvelope::centered_at(*c))
        .collect();

    for (i, env) in envelopes.iter().enumerate() {
        let center = layout.centers[i];

        // find the progress with minimal grayscale by sweeping
        let mut best_p = 0.0f32;
        let mut best_gray = f32::MAX;
        let mut p = 0.0f32;
        while p <= 1.0 {
            let g = env.grayscale.sample(p);
            if g < best_gray {
                best_gray = g;
                best_p = p;
            }
            p += 0.005;
        }
        assert_eq!(best_gray, 0.0, "item {i} must reach full color");
        assert!(
            (best_p - center).abs() <= FOCUS_GRAY_PLATEAU + 0.006,
            "item {i} peaks at {best_p}, expected near {center}"
        );

        // opposite extreme is fully gray
        let far = if center < 0.5 { 1.0 } else { 0.0 };
        assert_eq!(env.grayscale.sample(far), 1.0);
    }
}
