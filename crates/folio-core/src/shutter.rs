use crate::constants::{
    ACCENT_COVER_DELAY_MS, ACCENT_REVEAL_DELAY_MS, IMAGE_COVER_DELAY_MS, IMAGE_REVEAL_DELAY_MS,
    NAVIGATE_DELAY_MS, REVEAL_FALLBACK_MS, SHUTTER_DURATION_MS, THEME_COVER_DELAY_MS,
    THEME_REVEAL_DELAY_MS, TRANSITION_COOLDOWN_MS,
};
use crate::stores::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Shutter wipes bottom-to-top.
    Up,
    /// Shutter wipes top-to-bottom.
    Down,
}

/// The stacked overlay layers, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Accent,
    Image,
    Theme,
}

/// Vertical position a layer animates toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerPos {
    HiddenBelow,
    Covering,
    HiddenAbove,
}

impl LayerPos {
    /// translateY percentage for this position (105% keeps shadows off-screen).
    pub fn translate_y_pct(self) -> f32 {
        match self {
            LayerPos::HiddenBelow => 105.0,
            LayerPos::Covering => 0.0,
            LayerPos::HiddenAbove => -105.0,
        }
    }
}

/// One animation command for one layer. `duration_ms == 0.0` means snap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerMotion {
    pub layer: Layer,
    pub target: LayerPos,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRequest {
    pub direction: Direction,
    /// Route the caller navigates to once the cover reaches its midpoint.
    pub path: String,
    pub target_theme: Theme,
    pub source_theme: Theme,
    pub target_image: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Covering,
    Covered,
    Revealing,
}

/// Multi-layer page-transition state machine.
///
/// Time is injected (`now_ms`, any monotonic millisecond clock) so the
/// machine is host-testable. The owning frame loop calls [`poll`] every
/// frame and applies the returned [`LayerMotion`]s to the DOM.
///
/// Requests arriving inside [`TRANSITION_COOLDOWN_MS`] of the previous
/// accepted request, or while a transition is in flight, are dropped,
/// never queued or merged.
///
/// The reveal is triggered by a pathname-change observation; a fallback
/// timer fires only if the pathname never changes within
/// [`REVEAL_FALLBACK_MS`] of the start. Whichever comes first wins and the
/// other is a no-op.
///
/// [`poll`]: ShutterSequencer::poll
#[derive(Debug, Default)]
pub struct ShutterSequencer {
    phase: Phase,
    request: Option<TransitionRequest>,
    started_at: Option<f64>,
    reveal_started_at: Option<f64>,
    navigated: bool,
    saw_pathname_change: bool,
    pending: Vec<LayerMotion>,
}

impl ShutterSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start timestamp of the last accepted request. Unchanged by dropped
    /// requests.
    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    pub fn request_in_flight(&self) -> Option<&TransitionRequest> {
        self.request.as_ref()
    }

    /// Attempt to start a transition. Returns `false` when the request is
    /// dropped (mid-flight, or inside the cooldown window).
    pub fn request(&mut self, req: TransitionRequest, now_ms: f64) -> bool {
        if self.phase != Phase::Idle {
            log::warn!("[shutter] request dropped: transition in flight");
            return false;
        }
        if let Some(t0) = self.started_at {
            if now_ms - t0 < TRANSITION_COOLDOWN_MS {
                log::warn!("[shutter] request dropped: inside cooldown window");
                return false;
            }
        }

        if req.direction == Direction::Down {
            // Wipe-down starts from above: snap there before covering.
            self.push_all_layers(&req, LayerPos::HiddenAbove, 0.0, 0.0);
        }
        self.push_cover_motions(&req);

        self.phase = Phase::Covering;
        self.started_at = Some(now_ms);
        self.reveal_started_at = None;
        self.navigated = false;
        self.saw_pathname_change = false;
        self.request = Some(req);
        true
    }

    /// Report that the route actually changed. Arms the reveal; ignored
    /// while idle.
    pub fn pathname_changed(&mut self) {
        if self.phase != Phase::Idle {
            self.saw_pathname_change = true;
        }
    }

    /// One-shot: true on the single poll where the caller should perform
    /// the navigation (covering midpoint).
    pub fn should_navigate(&mut self, now_ms: f64) -> bool {
        if self.phase == Phase::Idle || self.navigated {
            return false;
        }
        let Some(t0) = self.started_at else {
            return false;
        };
        if now_ms - t0 >= NAVIGATE_DELAY_MS {
            self.navigated = true;
            return true;
        }
        false
    }

    /// Advance the machine and drain any layer motions to apply. Call once
    /// per frame while transitioning. Phase edges cascade within a single
    /// call (a poll that completes the cover also starts an armed reveal).
    pub fn poll(&mut self, now_ms: f64) -> Vec<LayerMotion> {
        loop {
            let before = self.phase;
            match self.phase {
                Phase::Idle => {}
                Phase::Covering => {
                    let t0 = self.started_at.unwrap_or(now_ms);
                    if now_ms - t0 >= THEME_COVER_DELAY_MS + SHUTTER_DURATION_MS {
                        self.phase = Phase::Covered;
                    }
                }
                Phase::Covered => {
                    let t0 = self.started_at.unwrap_or(now_ms);
                    if self.saw_pathname_change {
                        self.begin_reveal(now_ms);
                    } else if now_ms - t0 >= REVEAL_FALLBACK_MS {
                        log::warn!("[shutter] pathname never changed, revealing on fallback timer");
                        self.begin_reveal(now_ms);
                    }
                }
                Phase::Revealing => {
                    let t1 = self.reveal_started_at.unwrap_or(now_ms);
                    if now_ms - t1 >= ACCENT_REVEAL_DELAY_MS + SHUTTER_DURATION_MS {
                        self.finish(now_ms);
                    }
                }
            }
            if self.phase == before {
                break;
            }
        }
        std::mem::take(&mut self.pending)
    }

    fn begin_reveal(&mut self, now_ms: f64) {
        let Some(req) = self.request.clone() else {
            return;
        };
        // Reverse order on the way out: theme lifts first, accent last.
        let end = match req.direction {
            Direction::Up => LayerPos::HiddenAbove,
            Direction::Down => LayerPos::HiddenBelow,
        };
        self.pending.push(LayerMotion {
            layer: Layer::Theme,
            target: end,
            delay_ms: THEME_REVEAL_DELAY_MS,
            duration_ms: SHUTTER_DURATION_MS,
        });
        if req.target_image.is_some() {
            self.pending.push(LayerMotion {
                layer: Layer::Image,
                target: end,
                delay_ms: IMAGE_REVEAL_DELAY_MS,
                duration_ms: SHUTTER_DURATION_MS,
            });
        }
        self.pending.push(LayerMotion {
            layer: Layer::Accent,
            target: end,
            delay_ms: ACCENT_REVEAL_DELAY_MS,
            duration_ms: SHUTTER_DURATION_MS,
        });
        self.phase = Phase::Revealing;
        self.reveal_started_at = Some(now_ms);
    }

    fn finish(&mut self, _now_ms: f64) {
        // The accent layer is the last to finish the reveal, so reaching
        // here means every layer is off-screen. Snap everything back to the
        // resting position so the next transition starts consistent.
        if let Some(req) = self.request.clone() {
            let end = match req.direction {
                Direction::Up => LayerPos::HiddenAbove,
                Direction::Down => LayerPos::HiddenBelow,
            };
            if end != LayerPos::HiddenBelow {
                self.push_all_layers(&req, LayerPos::HiddenBelow, 0.0, 0.0);
            }
        }
        self.phase = Phase::Idle;
        self.request = None;
        self.reveal_started_at = None;
    }

    fn push_cover_motions(&mut self, req: &TransitionRequest) {
        // Accent leads, image follows, theme lands last so the screen ends
        // theme-colored.
        self.pending.push(LayerMotion {
            layer: Layer::Accent,
            target: LayerPos::Covering,
            delay_ms: ACCENT_COVER_DELAY_MS,
            duration_ms: SHUTTER_DURATION_MS,
        });
        if req.target_image.is_some() {
            self.pending.push(LayerMotion {
                layer: Layer::Image,
                target: LayerPos::Covering,
                delay_ms: IMAGE_COVER_DELAY_MS,
                duration_ms: SHUTTER_DURATION_MS,
            });
        }
        self.pending.push(LayerMotion {
            layer: Layer::Theme,
            target: LayerPos::Covering,
            delay_ms: THEME_COVER_DELAY_MS,
            duration_ms: SHUTTER_DURATION_MS,
        });
    }

    fn push_all_layers(
        &mut self,
        req: &TransitionRequest,
        target: LayerPos,
        delay_ms: f64,
        duration_ms: f64,
    ) {
        self.pending.push(LayerMotion {
            layer: Layer::Accent,
            target,
            delay_ms,
            duration_ms,
        });
        if req.target_image.is_some() {
            self.pending.push(LayerMotion {
                layer: Layer::Image,
                target,
                delay_ms,
                duration_ms,
            });
        }
        self.pending.push(LayerMotion {
            layer: Layer::Theme,
            target,
            delay_ms,
            duration_ms,
        });
    }
}
