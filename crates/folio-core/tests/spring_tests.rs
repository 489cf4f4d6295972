// Host-side simulation tests for the damped-spring follower.

use folio_core::*;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn simulate(params: SpringParams, steps: usize) -> (SpringFollower, f32) {
    let target = Vec2::new(100.0, 0.0);
    let mut follower = SpringFollower::new(params, Vec2::ZERO);
    let mut max_x = 0.0f32;
    for _ in 0..steps {
        follower.step(target, DT);
        max_x = max_x.max(follower.position.x);
    }
    (follower, max_x)
}

#[test]
fn critically_damped_converges_without_overshoot() {
    // damping ratio exactly 1: c = 2 * sqrt(k * m)
    let params = SpringParams::new(100.0, 20.0, 1.0).unwrap();
    assert!((params.damping_ratio() - 1.0).abs() < 1e-5);

    let (follower, max_x) = simulate(params, 1200);
    assert!((follower.position.x - 100.0).abs() < 0.1, "must converge");
    assert!(max_x <= 100.0 + 0.01, "no overshoot at critical damping");
}

#[test]
fn overdamped_converges_without_overshoot() {
    let params = SpringParams::new(100.0, 40.0, 1.0).unwrap();
    assert!(params.damping_ratio() > 1.0);
    let (follower, max_x) = simulate(params, 3000);
    assert!((follower.position.x - 100.0).abs() < 0.5);
    assert!(max_x <= 100.0 + 0.01);
}

#[test]
fn underdamped_overshoot_shrinks_with_more_damping() {
    let loose = SpringParams::new(100.0, 5.0, 1.0).unwrap(); // ratio 0.25
    let tight = SpringParams::new(100.0, 10.0, 1.0).unwrap(); // ratio 0.5
    let (_, max_loose) = simulate(loose, 1200);
    let (_, max_tight) = simulate(tight, 1200);

    assert!(max_loose > 100.0, "underdamped must overshoot");
    assert!(max_tight > 100.0);
    assert!(
        max_loose > max_tight,
        "less damping means more overshoot ({max_loose} vs {max_tight})"
    );
}

#[test]
fn cursor_presets_are_valid_and_distinct() {
    let dot = SpringParams::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS).unwrap();
    let ring = SpringParams::new(RING_STIFFNESS, RING_DAMPING, RING_MASS).unwrap();
    // the dot tracks tighter than the ring; that is the whole point of the
    // two-follower cursor
    assert!(dot.stiffness > ring.stiffness);
}

#[test]
fn invalid_parameters_are_rejected() {
    assert_eq!(
        SpringParams::new(100.0, 10.0, 0.0),
        Err(SpringError::NonPositiveMass(0.0))
    );
    assert_eq!(
        SpringParams::new(100.0, 10.0, -1.0),
        Err(SpringError::NonPositiveMass(-1.0))
    );
    assert_eq!(
        SpringParams::new(0.0, 10.0, 1.0),
        Err(SpringError::NonPositiveStiffness(0.0))
    );
    assert_eq!(
        SpringParams::new(100.0, -0.5, 1.0),
        Err(SpringError::NegativeDamping(-0.5))
    );
    // NaN mass must not slip through the comparison
    assert!(SpringParams::new(100.0, 10.0, f32::NAN).is_err());
}

#[test]
fn settled_pauses_and_events_resume() {
    let params = SpringParams::new(100.0, 20.0, 1.0).unwrap();
    let target = Vec2::new(10.0, 10.0);
    let mut follower = SpringFollower::new(params, Vec2::ZERO);
    assert!(!follower.settled(target, SPRING_SETTLE_EPSILON_PX));

    for _ in 0..3000 {
        follower.step(target, DT);
    }
    assert!(follower.settled(target, SPRING_SETTLE_EPSILON_PX));

    // a new target un-settles it
    let next = Vec2::new(50.0, 0.0);
    assert!(!follower.settled(next, SPRING_SETTLE_EPSILON_PX));
}

#[test]
fn snap_to_clears_velocity() {
    let params = SpringParams::new(100.0, 5.0, 1.0).unwrap();
    let mut follower = SpringFollower::new(params, Vec2::ZERO);
    for _ in 0..10 {
        follower.step(Vec2::new(100.0, 0.0), DT);
    }
    assert!(follower.velocity.length() > 0.0);
    follower.snap_to(Vec2::new(3.0, 4.0));
    assert_eq!(follower.position, Vec2::new(3.0, 4.0));
    assert_eq!(follower.velocity, Vec2::ZERO);
}

#[test]
fn large_frame_gap_stays_stable() {
    // a background tab can deliver a multi-second dt; the substepping must
    // keep the stiff dot preset from exploding
    let params = SpringParams::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS).unwrap();
    let target = Vec2::new(500.0, 300.0);
    let mut follower = SpringFollower::new(params, Vec2::ZERO);
    follower.step(target, 3.0);
    assert!(follower.position.is_finite());
    assert!((follower.position - target).length() < 1.0);
}
