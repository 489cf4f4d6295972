use crate::constants::{
    SKEW_VELOCITY_GAIN, STRETCH_MAX, STRETCH_VELOCITY_GAIN, VELOCITY_DECAY_PER_SEC,
};

/// Card deformation for a given scroll velocity: skew follows the signed
/// velocity, vertical stretch follows its magnitude with a hard cap.
#[inline]
pub fn skew_for_velocity(velocity: f32) -> (f32, f32) {
    let skew_deg = velocity * SKEW_VELOCITY_GAIN;
    let scale_y = 1.0 + (velocity.abs() * STRETCH_VELOCITY_GAIN).min(STRETCH_MAX);
    (skew_deg, scale_y)
}

/// Estimates scroll velocity from successive position samples, normalized
/// to pixels per frame at 60 Hz so the gains above stay refresh-rate
/// independent. Decays toward zero when no samples arrive.
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityTracker {
    last: Option<(f64, f64)>, // (position px, time ms)
    velocity: f32,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll position sample; returns the updated velocity.
    pub fn sample(&mut self, position: f64, now_ms: f64) -> f32 {
        if let Some((prev_pos, prev_ms)) = self.last {
            let dt = now_ms - prev_ms;
            if dt > 0.0 {
                self.velocity = (((position - prev_pos) / dt) * (1000.0 / 60.0)) as f32;
            }
        }
        self.last = Some((position, now_ms));
        self.velocity
    }

    /// Exponential decay toward rest; call once per frame between scroll
    /// events so cards relax when scrolling stops.
    pub fn decay(&mut self, dt_sec: f32) -> f32 {
        self.velocity *= (-dt_sec * VELOCITY_DECAY_PER_SEC).exp();
        if self.velocity.abs() < 0.01 {
            self.velocity = 0.0;
        }
        self.velocity
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn at_rest(&self) -> bool {
        self.velocity == 0.0
    }
}
