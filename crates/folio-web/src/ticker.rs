use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since the epoch; the shared clock for debounce windows and
/// staged sequencing.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Owned requestAnimationFrame loop.
///
/// The frame callback returns `true` to keep running or `false` to suspend
/// (a suspended ticker restarts via [`Ticker::resume`], typically from an
/// input event). Dropping the handle cancels any pending frame, so a
/// widget tearing down cannot be called back afterwards.
pub struct Ticker {
    inner: Rc<TickerInner>,
}

struct TickerInner {
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
    handle: Cell<Option<i32>>,
}

impl Ticker {
    pub fn new(mut frame: impl FnMut() -> bool + 'static) -> Self {
        let inner = Rc::new(TickerInner {
            closure: RefCell::new(None),
            handle: Cell::new(None),
        });
        let inner_tick = inner.clone();
        *inner.closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner_tick.handle.set(None);
            if frame() {
                TickerInner::schedule(&inner_tick);
            }
        }) as Box<dyn FnMut()>));
        let ticker = Self { inner };
        ticker.resume();
        ticker
    }

    /// Schedule the next frame if the loop is currently suspended.
    pub fn resume(&self) {
        TickerInner::schedule(&self.inner);
    }

    pub fn is_running(&self) -> bool {
        self.inner.handle.get().is_some()
    }
}

impl TickerInner {
    fn schedule(inner: &Rc<TickerInner>) {
        if inner.handle.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let slot = inner.closure.borrow();
        if let Some(closure) = slot.as_ref() {
            if let Ok(handle) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                inner.handle.set(Some(handle));
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.inner.handle.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        // break the closure <-> inner reference cycle
        self.inner.closure.borrow_mut().take();
    }
}

/// Owned setTimeout handle; dropping cancels it, so a superseded or
/// unmounted widget never sees a stale timer fire.
pub struct Timeout {
    handle: Cell<Option<i32>>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(ms: f64, f: impl FnOnce() + 'static) -> Self {
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let handle = web::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms as i32,
            )
            .ok()
        });
        Self {
            handle: Cell::new(handle),
            _closure: closure,
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owned setInterval handle with the same drop-cancels contract.
pub struct Interval {
    handle: Cell<Option<i32>>,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: f64, f: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let handle = web::window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms as i32,
            )
            .ok()
        });
        Self {
            handle: Cell::new(handle),
            _closure: closure,
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }
}
