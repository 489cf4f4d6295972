use crate::constants::{
    CLASS_CLICK, CLASS_HIDDEN, CLASS_HOVERED, ID_CURSOR_DASH_INNER, ID_CURSOR_DASH_OUTER,
    ID_CURSOR_DOT, ID_CURSOR_HOLD, ID_CURSOR_LABEL, ID_CURSOR_RING,
};
use crate::ticker::Ticker;
use crate::{dom, input, App};
use folio_core::{
    hold_dash_array, CursorVariant, HoldGauge, HoldSpin, SpringFollower, SpringParams,
    CURSOR_CHARGE_MS, CURSOR_DECAY_MS, DOT_DAMPING, DOT_MASS, DOT_STIFFNESS, RING_DAMPING,
    RING_MASS, RING_STIFFNESS, SPRING_SETTLE_EPSILON_PX,
};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct CursorMotion {
    target: Vec2,
    has_target: bool,
    dot: SpringFollower,
    ring: SpringFollower,
    gauge: HoldGauge,
    spin: HoldSpin,
    last: Instant,
}

/// Custom cursor overlay: a snappy dot and a trailing ring chasing the raw
/// pointer through two differently tuned springs, plus the dashed hold ring
/// driven by its own gauge while a "HOLD" target is hovered.
pub struct CursorWidget {
    motion: Rc<RefCell<CursorMotion>>,
    ticker: Rc<Ticker>,
}

/// Cheap clone handed to other widgets so they can wake the cursor loop
/// after mutating the cursor store, or reset it on a route change.
#[derive(Clone)]
pub struct CursorHandle {
    motion: Rc<RefCell<CursorMotion>>,
    ticker: Rc<Ticker>,
}

impl CursorHandle {
    /// Restart the (possibly suspended) loop so store changes repaint.
    pub fn poke(&self) {
        self.ticker.resume();
    }

    /// Route changes drop any in-progress hold.
    pub fn route_reset(&self) {
        let mut m = self.motion.borrow_mut();
        m.gauge.reset();
        m.spin.reset();
        m.last = Instant::now();
        drop(m);
        self.ticker.resume();
    }
}

impl CursorWidget {
    pub fn new(app: Rc<App>, document: &web::Document) -> anyhow::Result<Self> {
        let dot_el = dom::html_by_id(document, ID_CURSOR_DOT)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_CURSOR_DOT}"))?;
        let ring_el = dom::html_by_id(document, ID_CURSOR_RING)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_CURSOR_RING}"))?;
        let label_el = dom::by_id(document, ID_CURSOR_LABEL)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_CURSOR_LABEL}"))?;
        let hold_el = dom::html_by_id(document, ID_CURSOR_HOLD)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_CURSOR_HOLD}"))?;
        let dash_inner = dom::by_id(document, ID_CURSOR_DASH_INNER)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_CURSOR_DASH_INNER}"))?;
        let dash_outer = dom::by_id(document, ID_CURSOR_DASH_OUTER)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_CURSOR_DASH_OUTER}"))?;

        // start off-screen like any pointer that has not moved yet
        let off_screen = Vec2::new(-100.0, -100.0);
        let dot_params = SpringParams::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS)?;
        let ring_params = SpringParams::new(RING_STIFFNESS, RING_DAMPING, RING_MASS)?;
        let motion = Rc::new(RefCell::new(CursorMotion {
            target: off_screen,
            has_target: false,
            dot: SpringFollower::new(dot_params, off_screen),
            ring: SpringFollower::new(ring_params, off_screen),
            gauge: HoldGauge::new(CURSOR_CHARGE_MS, CURSOR_DECAY_MS),
            spin: HoldSpin::default(),
            last: Instant::now(),
        }));

        let ticker = {
            let app = app.clone();
            let motion = motion.clone();
            Rc::new(Ticker::new(move || {
                let mut m = motion.borrow_mut();
                let now = Instant::now();
                let dt_sec = (now - m.last).as_secs_f32();
                m.last = now;

                // Force-drop a hold whose context went away (hover left,
                // label changed) so the ring cannot charge against nothing.
                let armed = app.cursor.borrow().hold_armed();
                if !armed && (m.gauge.is_charging() || m.gauge.value() > 0.0) {
                    m.gauge.reset();
                    m.spin.reset();
                }

                m.gauge.update((dt_sec * 1000.0) as f64);
                let gauge_value = m.gauge.value();
                m.spin.advance(gauge_value, dt_sec);

                let target = m.target;
                m.dot.step(target, dt_sec);
                m.ring.step(target, dt_sec);

                dom::set_style(
                    &dot_el,
                    "transform",
                    &format!(
                        "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)",
                        m.dot.position.x, m.dot.position.y
                    ),
                );
                dom::set_style(
                    &ring_el,
                    "transform",
                    &format!(
                        "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)",
                        m.ring.position.x, m.ring.position.y
                    ),
                );

                {
                    let cursor = app.cursor.borrow();
                    dom::set_class(&ring_el, CLASS_HOVERED, cursor.hovered);
                    dom::set_class(
                        &ring_el,
                        CLASS_CLICK,
                        cursor.variant == CursorVariant::Click,
                    );
                    // the dot yields to the expanded ring
                    dom::set_class(&dot_el, CLASS_HIDDEN, cursor.hovered);
                    let label = if cursor.label.is_empty() {
                        "VIEW"
                    } else {
                        cursor.label.as_str()
                    };
                    label_el.set_text_content(Some(label));
                }

                let dash = hold_dash_array(gauge_value);
                let _ = dash_inner.set_attribute("stroke-dasharray", &dash);
                let _ = dash_outer.set_attribute("stroke-dasharray", &dash);
                dom::set_style(
                    &hold_el,
                    "transform",
                    &format!("rotate({:.1}deg)", m.spin.angle_deg),
                );
                dom::set_style(&hold_el, "opacity", if gauge_value > 0.0 { "1" } else { "0" });

                // keep running until both springs converge and the gauge is
                // drained; input events resume us
                !(m.dot.settled(target, SPRING_SETTLE_EPSILON_PX)
                    && m.ring.settled(target, SPRING_SETTLE_EPSILON_PX)
                    && m.gauge.idle())
            }))
        };

        let widget = Self { motion, ticker };
        widget.wire_pointer_events(app);
        Ok(widget)
    }

    pub fn handle(&self) -> CursorHandle {
        CursorHandle {
            motion: self.motion.clone(),
            ticker: self.ticker.clone(),
        }
    }

    fn wire_pointer_events(&self, app: Rc<App>) {
        let Some(window) = web::window() else {
            return;
        };
        let target: &web::EventTarget = window.as_ref();

        {
            let motion = self.motion.clone();
            let ticker = self.ticker.clone();
            dom::forget_listener(target, "pointermove", move |ev| {
                if let Some(pos) = input::pointer_client_pos(&ev) {
                    let mut m = motion.borrow_mut();
                    m.target = pos;
                    if !m.has_target {
                        // first sample: jump there instead of ringing across
                        // the whole viewport
                        m.has_target = true;
                        m.dot.snap_to(pos);
                        m.ring.snap_to(pos);
                    }
                    drop(m);
                    ticker.resume();
                }
            });
        }
        {
            let motion = self.motion.clone();
            let ticker = self.ticker.clone();
            let app = app.clone();
            dom::forget_listener(target, "pointerdown", move |_ev| {
                if app.cursor.borrow().hold_armed() {
                    let mut m = motion.borrow_mut();
                    m.gauge.press();
                    m.last = Instant::now();
                    drop(m);
                    ticker.resume();
                }
            });
        }
        {
            let motion = self.motion.clone();
            dom::forget_listener(target, "pointerup", move |_ev| {
                motion.borrow_mut().gauge.release();
            });
        }
    }
}
