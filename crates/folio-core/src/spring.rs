use glam::Vec2;
use thiserror::Error;

// Integration substep cap. Keeps the explicit integrator stable for stiff
// presets even when a background tab delivers a multi-second frame gap.
const MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;

#[derive(Debug, Error, PartialEq)]
pub enum SpringError {
    #[error("spring mass must be positive, got {0}")]
    NonPositiveMass(f32),
    #[error("spring stiffness must be positive, got {0}")]
    NonPositiveStiffness(f32),
    #[error("spring damping must be non-negative, got {0}")]
    NegativeDamping(f32),
}

/// Damped harmonic oscillator parameters. Validated at construction so no
/// NaN can reach a style property at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Result<Self, SpringError> {
        if !(mass > 0.0) {
            return Err(SpringError::NonPositiveMass(mass));
        }
        if !(stiffness > 0.0) {
            return Err(SpringError::NonPositiveStiffness(stiffness));
        }
        if !(damping >= 0.0) {
            return Err(SpringError::NegativeDamping(damping));
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }

    /// 1.0 is critical damping; below oscillates, above creeps.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A value chasing a moving target under a damped spring. Purely derived
/// state: it carries no side effects besides being read by rendering.
#[derive(Clone, Copy, Debug)]
pub struct SpringFollower {
    params: SpringParams,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl SpringFollower {
    pub fn new(params: SpringParams, position: Vec2) -> Self {
        Self {
            params,
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Teleport without ringing (route change, first pointer sample).
    pub fn snap_to(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
    }

    /// Semi-implicit Euler toward `target`, split into substeps so large
    /// frame gaps cannot destabilize stiff presets.
    pub fn step(&mut self, target: Vec2, dt_sec: f32) {
        if dt_sec <= 0.0 {
            return;
        }
        let k = self.params.stiffness;
        let c = self.params.damping;
        let inv_m = 1.0 / self.params.mass;

        let steps = (dt_sec / MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / steps as f32;
        for _ in 0..steps {
            let accel = (k * (target - self.position) - c * self.velocity) * inv_m;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
    }

    /// True once the follower has converged: the driving loop may pause.
    pub fn settled(&self, target: Vec2, epsilon: f32) -> bool {
        self.position.distance_squared(target) <= epsilon * epsilon
            && self.velocity.length_squared() <= epsilon * epsilon
    }
}
