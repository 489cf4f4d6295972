use crate::constants::{THERMAL_LIMIT_SECS, THERMAL_WARN_WINDOW_SECS};

/// Session uptime counter with a thermal latch.
///
/// Ticks once per wall-clock second while `active` and not overheated (the
/// owning widget also stops the interval when the user leaves the gallery
/// page, so no time accrues elsewhere). Crossing a multiple of
/// [`THERMAL_LIMIT_SECS`] latches `overheated` exactly once; a
/// last-triggered marker prevents a double latch for the same crossing.
#[derive(Clone, Debug, Default)]
pub struct UptimeTimer {
    pub seconds: u32,
    pub active: bool,
    pub overheated: bool,
    last_latched_at: Option<u32>,
}

impl UptimeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Advance one second. Returns `true` on the tick that latches the
    /// overheat flag.
    pub fn tick(&mut self) -> bool {
        if !self.active || self.overheated {
            return false;
        }
        self.seconds += 1;
        if self.seconds % THERMAL_LIMIT_SECS == 0 && self.last_latched_at != Some(self.seconds) {
            self.overheated = true;
            self.last_latched_at = Some(self.seconds);
            log::warn!("[uptime] thermal limit reached at {}s", self.seconds);
            return true;
        }
        false
    }

    /// Clear the counter and the latch. The system stays `active`.
    pub fn reset(&mut self) {
        self.seconds = 0;
        self.overheated = false;
        self.last_latched_at = None;
    }

    /// HUD warning window just before the limit.
    pub fn near_limit(&self) -> bool {
        !self.overheated && self.seconds > THERMAL_LIMIT_SECS - THERMAL_WARN_WINDOW_SECS
    }
}

/// MM:SS, zero padded.
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
