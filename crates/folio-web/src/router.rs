use wasm_bindgen::JsValue;
use web_sys as web;

/// Current pathname, `/` if the location is unreadable.
pub fn pathname() -> String {
    web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Route-change primitive. Pushes a history entry and resets the scroll
/// position so the incoming page starts at the top; observers pick the
/// change up through [`PathnameWatcher`] or the popstate event.
pub fn navigate(path: &str) {
    let Some(window) = web::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if history
                .push_state_with_url(&JsValue::NULL, "", Some(path))
                .is_err()
            {
                log::error!("[router] push_state failed for {path}");
                return;
            }
        }
        Err(_) => return,
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
    log::info!("[router] navigated to {path}");
}

/// Polled pathname-change observation. The shutter frame loop asks this
/// once per frame while a transition is in flight.
pub struct PathnameWatcher {
    last: String,
}

impl PathnameWatcher {
    pub fn new() -> Self {
        Self { last: pathname() }
    }

    /// The new pathname on the first poll after a change, `None` otherwise.
    pub fn changed(&mut self) -> Option<String> {
        let current = pathname();
        if current != self.last {
            self.last = current.clone();
            Some(current)
        } else {
            None
        }
    }
}

impl Default for PathnameWatcher {
    fn default() -> Self {
        Self::new()
    }
}
