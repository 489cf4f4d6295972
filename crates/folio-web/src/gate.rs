use crate::constants::{ID_GATE_PROGRESS, ID_HERO_GATE};
use crate::cursor::CursorHandle;
use crate::dom::{self, EventListener};
use crate::ticker::Ticker;
use crate::App;
use folio_core::{CursorVariant, HoldGauge, GATE_CHARGE_MS, GATE_DECAY_MS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct GateState {
    gauge: HoldGauge,
    last: Instant,
    /// Mount-scoped listeners; cleared on completion so the dismissed gate
    /// cannot capture further input.
    listeners: Vec<EventListener>,
}

/// Hold-to-enter gate covering the home page until the visitor commits.
pub struct GateWidget {
    _state: Rc<RefCell<GateState>>,
    _ticker: Rc<Ticker>,
}

impl GateWidget {
    pub fn new(app: Rc<App>, document: &web::Document, cursor: CursorHandle) -> anyhow::Result<Self> {
        let gate_el = dom::html_by_id(document, ID_HERO_GATE)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_HERO_GATE}"))?;
        let bar_el = dom::html_by_id(document, ID_GATE_PROGRESS)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_GATE_PROGRESS}"))?;

        let state = Rc::new(RefCell::new(GateState {
            gauge: HoldGauge::new(GATE_CHARGE_MS, GATE_DECAY_MS),
            last: Instant::now(),
            listeners: Vec::new(),
        }));

        let ticker = {
            let app = app.clone();
            let state = state.clone();
            let cursor = cursor.clone();
            let gate_el = gate_el.clone();
            let bar_el = bar_el.clone();
            Rc::new(Ticker::new(move || {
                let mut s = state.borrow_mut();
                let now = Instant::now();
                let dt_ms = (now - s.last).as_secs_f64() * 1000.0;
                s.last = now;

                let completed = s.gauge.update(dt_ms);
                dom::set_style(
                    &bar_el,
                    "width",
                    &format!("{:.2}%", s.gauge.value() * 100.0),
                );

                if completed {
                    log::info!("[gate] entered");
                    app.intro.borrow_mut().entered = true;
                    app.timer.borrow_mut().set_active(true);
                    dom::set_hidden(&gate_el, true);
                    app.cursor.borrow_mut().clear_hover();
                    cursor.poke();
                    // drop our own input wiring; the gate is gone
                    s.listeners.clear();
                    return false;
                }
                !s.gauge.idle()
            }))
        };

        let widget = Self {
            _state: state.clone(),
            _ticker: ticker.clone(),
        };
        widget.wire(app, cursor, &gate_el, state, ticker);
        Ok(widget)
    }

    fn wire(
        &self,
        app: Rc<App>,
        cursor: CursorHandle,
        gate_el: &web::HtmlElement,
        state: Rc<RefCell<GateState>>,
        ticker: Rc<Ticker>,
    ) {
        let target: &web::EventTarget = gate_el.as_ref();
        let mut listeners = Vec::new();

        for kind in ["mousedown", "touchstart"] {
            let state_press = state.clone();
            let ticker_press = ticker.clone();
            listeners.push(EventListener::new(target, kind, move |_ev| {
                let mut s = state_press.borrow_mut();
                if s.gauge.idle() {
                    // loop was suspended; don't count the dormant time
                    s.last = Instant::now();
                }
                s.gauge.press();
                drop(s);
                ticker_press.resume();
            }));
        }
        for kind in ["mouseup", "touchend"] {
            let state_release = state.clone();
            listeners.push(EventListener::new(target, kind, move |_ev| {
                state_release.borrow_mut().gauge.release();
            }));
        }
        {
            let app_enter = app.clone();
            let cursor_enter = cursor.clone();
            listeners.push(EventListener::new(target, "mouseenter", move |_ev| {
                app_enter
                    .cursor
                    .borrow_mut()
                    .set_hover("HOLD", CursorVariant::Default);
                cursor_enter.poke();
            }));
        }
        {
            let app_leave = app;
            let cursor_leave = cursor;
            let state_leave = state.clone();
            listeners.push(EventListener::new(target, "mouseleave", move |_ev| {
                state_leave.borrow_mut().gauge.release();
                app_leave.cursor.borrow_mut().clear_hover();
                cursor_leave.poke();
            }));
        }

        state.borrow_mut().listeners = listeners;
    }
}
