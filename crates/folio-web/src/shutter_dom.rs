use crate::constants::{
    HOME_PATH, ID_SHUTTER_ACCENT, ID_SHUTTER_IMAGE, ID_SHUTTER_THEME,
};
use crate::ticker::{now_ms, Ticker};
use crate::{dom, router, App};
use folio_core::{
    Direction, Layer, LayerMotion, Project, Theme, TransitionRequest, ACCENT_COLOR, SHUTTER_EASE,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shutter overlay driver: applies the sequencer's layer motions to the
/// three fixed overlay divs and owns the transition lifecycle (navigation
/// at the covering midpoint, pathname-gated reveal, route-change fan-out).
pub struct ShutterWidget {
    inner: Rc<ShutterInner>,
}

struct ShutterInner {
    app: Rc<App>,
    ticker: RefCell<Option<Rc<Ticker>>>,
    watcher: RefCell<router::PathnameWatcher>,
    route_hooks: RefCell<Vec<Box<dyn Fn(&str)>>>,
}

/// Cheap clone other widgets use to start transitions.
#[derive(Clone)]
pub struct TransitionHandle {
    inner: Rc<ShutterInner>,
}

impl TransitionHandle {
    pub fn request_project(&self, project: &Project, direction: Direction) -> bool {
        let source_theme = self.inner.app.theme.borrow().theme;
        self.inner.request(TransitionRequest {
            direction,
            path: project.detail_path(),
            target_theme: project.theme,
            source_theme,
            target_image: Some(project.thumbnail.to_string()),
        })
    }

    pub fn request_home(&self, direction: Direction) -> bool {
        let source_theme = self.inner.app.theme.borrow().theme;
        self.inner.request(TransitionRequest {
            direction,
            path: HOME_PATH.to_string(),
            target_theme: Theme::Dark,
            source_theme,
            target_image: None,
        })
    }
}

impl ShutterWidget {
    pub fn new(app: Rc<App>, _document: &web::Document) -> Self {
        let inner = Rc::new(ShutterInner {
            app,
            ticker: RefCell::new(None),
            watcher: RefCell::new(router::PathnameWatcher::new()),
            route_hooks: RefCell::new(Vec::new()),
        });

        let ticker = {
            let inner = inner.clone();
            Rc::new(Ticker::new(move || inner.frame()))
        };
        *inner.ticker.borrow_mut() = Some(ticker);

        // browser back/forward arrives outside any transition
        if let Some(window) = web::window() {
            let inner_pop = inner.clone();
            dom::forget_listener(window.as_ref(), "popstate", move |_ev| {
                if let Some(path) = inner_pop.watcher.borrow_mut().changed() {
                    log::info!("[shutter] external route change to {path}");
                    inner_pop.app.sequencer.borrow_mut().pathname_changed();
                    inner_pop.run_route_hooks(&path);
                    if let Some(w) = web::window() {
                        w.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                inner_pop.wake();
            });
        }

        Self { inner }
    }

    pub fn handle(&self) -> TransitionHandle {
        TransitionHandle {
            inner: self.inner.clone(),
        }
    }

    /// Register a callback run on every route change (internal or external).
    pub fn add_route_hook(&self, hook: Box<dyn Fn(&str)>) {
        self.inner.route_hooks.borrow_mut().push(hook);
    }
}

impl ShutterInner {
    fn request(&self, req: TransitionRequest) -> bool {
        let accepted = self.app.sequencer.borrow_mut().request(req, now_ms());
        if accepted {
            self.prime_layers();
            self.wake();
        }
        accepted
    }

    fn wake(&self) {
        if let Some(t) = self.ticker.borrow().as_ref() {
            t.resume();
        }
    }

    fn run_route_hooks(&self, path: &str) {
        for hook in self.route_hooks.borrow().iter() {
            hook(path);
        }
    }

    /// Color/image the layers for the transition that just started.
    fn prime_layers(&self) {
        let Some(doc) = dom::window_document() else {
            return;
        };
        let seq = self.app.sequencer.borrow();
        let Some(req) = seq.request_in_flight() else {
            return;
        };
        if let Some(accent) = dom::html_by_id(&doc, ID_SHUTTER_ACCENT) {
            dom::set_style(&accent, "background-color", ACCENT_COLOR);
        }
        if let Some(theme) = dom::html_by_id(&doc, ID_SHUTTER_THEME) {
            dom::set_style(&theme, "background-color", req.target_theme.layer_color());
        }
        if let Some(image) = dom::html_by_id(&doc, ID_SHUTTER_IMAGE) {
            match &req.target_image {
                Some(src) => {
                    dom::set_style(&image, "background-image", &format!("url({src})"));
                    dom::set_style(&image, "display", "block");
                }
                None => dom::set_style(&image, "display", "none"),
            }
        }
    }

    /// One frame of the transition lifecycle. Suspends itself once the
    /// sequencer returns to idle.
    fn frame(&self) -> bool {
        let now = now_ms();

        // poll the pathname while in flight; this is the reveal trigger
        if let Some(path) = self.watcher.borrow_mut().changed() {
            self.app.sequencer.borrow_mut().pathname_changed();
            self.run_route_hooks(&path);
        }

        let navigate_to = {
            let mut seq = self.app.sequencer.borrow_mut();
            if seq.should_navigate(now) {
                seq.request_in_flight()
                    .map(|req| (req.path.clone(), req.target_theme))
            } else {
                None
            }
        };
        if let Some((path, theme)) = navigate_to {
            // swap the document theme while the screen is covered
            self.app.theme.borrow_mut().theme = theme;
            if let Some(doc) = dom::window_document() {
                dom::set_root_theme(&doc, theme);
            }
            router::navigate(&path);
        }

        let (motions, transitioning) = {
            let mut seq = self.app.sequencer.borrow_mut();
            let motions = seq.poll(now);
            (motions, seq.is_transitioning())
        };
        for motion in motions {
            apply_motion(&motion);
        }
        transitioning
    }
}

fn apply_motion(motion: &LayerMotion) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    let id = match motion.layer {
        Layer::Accent => ID_SHUTTER_ACCENT,
        Layer::Image => ID_SHUTTER_IMAGE,
        Layer::Theme => ID_SHUTTER_THEME,
    };
    let Some(el) = dom::html_by_id(&doc, id) else {
        return;
    };

    if motion.duration_ms <= 0.0 {
        dom::set_style(&el, "transition", "none");
        dom::set_style(
            &el,
            "transform",
            &format!("translate3d(0, {:.1}%, 0)", motion.target.translate_y_pct()),
        );
        // flush the snap so an animated write in the same frame starts from
        // the snapped position, not the previously committed one
        let _ = el.offset_height();
        return;
    }

    let [x1, y1, x2, y2] = SHUTTER_EASE;
    dom::set_style(
        &el,
        "transition",
        &format!(
            "transform {:.0}ms cubic-bezier({x1}, {y1}, {x2}, {y2}) {:.0}ms",
            motion.duration_ms, motion.delay_ms
        ),
    );
    dom::set_style(
        &el,
        "transform",
        &format!("translate3d(0, {:.1}%, 0)", motion.target.translate_y_pct()),
    );
}
