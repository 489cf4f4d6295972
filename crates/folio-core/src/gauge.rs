use crate::constants::{SPIN_BASE_DEG_PER_SEC, SPIN_EXP, SPIN_GAIN};

/// Charge/decay state machine behind every "hold to confirm" interaction.
///
/// While pressed the value climbs linearly to 1 over `charge_ms`; released,
/// it drains linearly to 0 over `decay_ms` (the two rates are independent).
/// Reaching 1 while still pressed latches the gauge: it reports completion
/// exactly once and freezes at 1 until [`HoldGauge::reset`].
#[derive(Clone, Debug)]
pub struct HoldGauge {
    value: f32,
    charging: bool,
    completed: bool,
    charge_ms: f64,
    decay_ms: f64,
}

impl HoldGauge {
    pub fn new(charge_ms: f64, decay_ms: f64) -> Self {
        Self {
            value: 0.0,
            charging: false,
            completed: false,
            charge_ms: charge_ms.max(1.0),
            decay_ms: decay_ms.max(1.0),
        }
    }

    pub fn press(&mut self) {
        self.charging = true;
    }

    pub fn release(&mut self) {
        self.charging = false;
    }

    /// Advance by wall-clock elapsed time. Returns `true` on the single tick
    /// where the gauge completes. The charging flag is sampled once per tick;
    /// flips inside a tick do not sub-divide it.
    pub fn update(&mut self, dt_ms: f64) -> bool {
        if self.completed {
            return false;
        }
        if self.charging {
            self.value += (dt_ms / self.charge_ms) as f32;
        } else {
            self.value -= (dt_ms / self.decay_ms) as f32;
        }
        self.value = self.value.clamp(0.0, 1.0);

        if self.value >= 1.0 && self.charging {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// True when the driving frame loop may stop: nothing left to animate.
    pub fn idle(&self) -> bool {
        self.value <= 0.0 && !self.charging
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
        self.charging = false;
        self.completed = false;
    }
}

/// Rotation rate of the hold ring, accelerating with charge.
#[inline]
pub fn spin_rate_deg_per_sec(value: f32) -> f32 {
    SPIN_BASE_DEG_PER_SEC + (value * 10.0).powf(SPIN_EXP) * SPIN_GAIN
}

/// Accumulated hold-ring angle. Only advances while the gauge is non-zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldSpin {
    pub angle_deg: f32,
}

impl HoldSpin {
    pub fn advance(&mut self, gauge_value: f32, dt_sec: f32) {
        if gauge_value > 0.0 {
            self.angle_deg += spin_rate_deg_per_sec(gauge_value) * dt_sec;
        }
    }

    pub fn reset(&mut self) {
        self.angle_deg = 0.0;
    }
}

/// SVG dash pattern for the two dashed hold circles: two arcs, each growing
/// from nothing to a half circle as the gauge fills (path length normalized
/// to 1).
pub fn hold_dash_array(gauge_value: f32) -> String {
    let dash = 0.5 * gauge_value.clamp(0.0, 1.0);
    let gap = 0.5 - dash;
    format!("{dash:.4} {gap:.4} {dash:.4} {gap:.4}")
}
