use crate::constants::{
    ARCANA_PLACEHOLDER, CLASS_PROJECT_CARD, CLASS_TRACK_ITEM, ID_BACK_LINK, ID_DETAIL_TRACK,
    ID_PROJECT_ARCANA, ID_TRACK_ITEMS,
};
use crate::cursor::CursorHandle;
use crate::shutter_dom::TransitionHandle;
use crate::ticker::{now_ms, Ticker};
use crate::{dom, App};
use folio_core::{
    layout_mode, project_by_slug, skew_for_velocity, sticky_progress, intersection_progress,
    Direction, FocusEnvelope, LayoutMode, ScrambleReveal, TrackLayout, VelocityTracker,
    CursorVariant, SCRAMBLE_DURATION_MS, TRACK_CENTER_VW, TRACK_GAP_VW,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Home gallery: hover cursor labels, click-to-transition, and the
/// scroll-velocity skew on each card.
pub struct HomeGalleryWidget {
    _velocity: Rc<RefCell<VelocityTracker>>,
    _ticker: Rc<Ticker>,
}

impl HomeGalleryWidget {
    pub fn new(
        app: Rc<App>,
        document: &web::Document,
        cursor: CursorHandle,
        transitions: TransitionHandle,
    ) -> Self {
        let cards = document.get_elements_by_class_name(CLASS_PROJECT_CARD);

        // hover + click wiring per card
        for i in 0..cards.length() {
            let Some(card) = cards.item(i) else { continue };
            let slug = card.get_attribute("data-slug").unwrap_or_default();
            let target: &web::EventTarget = card.as_ref();

            {
                let app = app.clone();
                let cursor = cursor.clone();
                dom::forget_listener(target, "mouseenter", move |_ev| {
                    app.cursor
                        .borrow_mut()
                        .set_hover("ENTER", CursorVariant::Click);
                    cursor.poke();
                });
            }
            {
                let app = app.clone();
                let cursor = cursor.clone();
                dom::forget_listener(target, "mouseleave", move |_ev| {
                    app.cursor.borrow_mut().clear_hover();
                    cursor.poke();
                });
            }
            {
                let transitions = transitions.clone();
                dom::forget_listener(target, "click", move |ev| {
                    ev.prevent_default();
                    if let Some(project) = project_by_slug(&slug) {
                        transitions.request_project(project, Direction::Up);
                    }
                });
            }
        }

        let velocity = Rc::new(RefCell::new(VelocityTracker::new()));
        let last = Rc::new(RefCell::new(Instant::now()));

        let ticker = {
            let velocity = velocity.clone();
            let cards = cards.clone();
            let last = last.clone();
            Rc::new(Ticker::new(move || {
                let now = Instant::now();
                let dt_sec = (now - *last.borrow()).as_secs_f32();
                *last.borrow_mut() = now;

                let v = velocity.borrow().velocity();
                let (skew_deg, scale_y) = skew_for_velocity(v);
                for i in 0..cards.length() {
                    let Some(card) = cards.item(i) else { continue };
                    if let Ok(card) = card.dyn_into::<web::HtmlElement>() {
                        dom::set_style(
                            &card,
                            "transform",
                            &format!("skewY({skew_deg:.3}deg) scaleY({scale_y:.4})"),
                        );
                    }
                }
                velocity.borrow_mut().decay(dt_sec) != 0.0
            }))
        };

        // scroll feeds the velocity estimate and wakes the loop
        if let Some(window) = web::window() {
            let velocity = velocity.clone();
            let ticker_scroll = ticker.clone();
            let last_scroll = last;
            dom::forget_listener(window.as_ref(), "scroll", move |_ev| {
                velocity.borrow_mut().sample(dom::scroll_y(), now_ms());
                if !ticker_scroll.is_running() {
                    *last_scroll.borrow_mut() = Instant::now();
                }
                ticker_scroll.resume();
            });
        }

        Self {
            _velocity: velocity,
            _ticker: ticker,
        }
    }
}

struct DetailState {
    layout: Option<TrackLayout>,
    envelopes: Vec<FocusEnvelope>,
    mode: LayoutMode,
    scramble: Option<(ScrambleReveal, Instant)>,
}

/// Project detail page: the horizontal choreography track plus the arcana
/// scramble reveal. Pure scroll-to-style mapping; recomputed on every
/// scroll/resize sample, idempotent at a given scroll position.
pub struct DetailGalleryWidget {
    inner: Rc<DetailInner>,
}

struct DetailInner {
    state: RefCell<DetailState>,
    scramble_ticker: RefCell<Option<Ticker>>,
}

impl DetailGalleryWidget {
    pub fn new(
        app: Rc<App>,
        document: &web::Document,
        cursor: CursorHandle,
        transitions: TransitionHandle,
    ) -> Self {
        let inner = Rc::new(DetailInner {
            state: RefCell::new(DetailState {
                layout: None,
                envelopes: Vec::new(),
                mode: LayoutMode::Wide,
                scramble: None,
            }),
            scramble_ticker: RefCell::new(None),
        });

        // back link: hover label + wipe-down transition home
        if let Some(back) = dom::by_id(document, ID_BACK_LINK) {
            let target: &web::EventTarget = back.as_ref();
            {
                let app = app.clone();
                let cursor = cursor.clone();
                dom::forget_listener(target, "mouseenter", move |_ev| {
                    app.cursor
                        .borrow_mut()
                        .set_hover("BACK", CursorVariant::Click);
                    cursor.poke();
                });
            }
            {
                let app = app.clone();
                let cursor = cursor.clone();
                dom::forget_listener(target, "mouseleave", move |_ev| {
                    app.cursor.borrow_mut().clear_hover();
                    cursor.poke();
                });
            }
            {
                let transitions = transitions.clone();
                dom::forget_listener(target, "click", move |ev| {
                    ev.prevent_default();
                    transitions.request_home(Direction::Down);
                });
            }
        }

        if let Some(window) = web::window() {
            let inner_scroll = inner.clone();
            dom::forget_listener(window.as_ref(), "scroll", move |_ev| {
                inner_scroll.apply();
            });
            let inner_resize = inner.clone();
            dom::forget_listener(window.as_ref(), "resize", move |_ev| {
                inner_resize.relayout(&crate::router::pathname());
                inner_resize.apply();
            });
        }

        // a deep link straight onto a project page gets the same treatment
        // as a route change
        let path = crate::router::pathname();
        inner.relayout(&path);
        DetailInner::start_scramble(&inner, &path);
        inner.apply();

        Self { inner }
    }

    /// Called by the shutter on every route change.
    pub fn route_hook(&self) -> Box<dyn Fn(&str)> {
        let inner = self.inner.clone();
        Box::new(move |path| {
            inner.relayout(path);
            DetailInner::start_scramble(&inner, path);
            inner.apply();
        })
    }
}

impl DetailInner {
    fn relayout(&self, path: &str) {
        let mut s = self.state.borrow_mut();
        let Some(slug) = path.strip_prefix("/project/") else {
            s.layout = None;
            s.envelopes.clear();
            return;
        };
        let Some(project) = project_by_slug(slug) else {
            s.layout = None;
            s.envelopes.clear();
            return;
        };

        let (vw, _) = dom::viewport_size();
        let mode = layout_mode(vw);
        let widths: Vec<f32> = project
            .track_aspects()
            .iter()
            .map(|a| a.width_vw(mode))
            .collect();
        let layout = TrackLayout::compute(&widths, TRACK_GAP_VW, TRACK_CENTER_VW);
        s.envelopes = match mode {
            // shared-coordinate mode: one envelope per computed center
            LayoutMode::Wide => layout
                .centers
                .iter()
                .map(|c| FocusEnvelope::centered_at(*c))
                .collect(),
            // per-item intersection mode: every item peaks mid-viewport
            LayoutMode::Compact => vec![FocusEnvelope::centered_at(0.5); widths.len()],
        };
        s.mode = mode;
        s.layout = Some(layout);
    }

    fn start_scramble(inner: &Rc<Self>, path: &str) {
        // dropping a previous ticker cancels its pending frame
        inner.scramble_ticker.borrow_mut().take();
        inner.state.borrow_mut().scramble = None;

        let Some(slug) = path.strip_prefix("/project/") else {
            return;
        };
        let Some(project) = project_by_slug(slug) else {
            return;
        };

        let seed = now_ms() as u64;
        let reveal = ScrambleReveal::new(
            ARCANA_PLACEHOLDER,
            &project.title.to_uppercase(),
            SCRAMBLE_DURATION_MS,
            seed,
        );
        inner.state.borrow_mut().scramble = Some((reveal, Instant::now()));

        let inner_tick = inner.clone();
        let ticker = Ticker::new(move || {
            let mut s = inner_tick.state.borrow_mut();
            let Some((reveal, started)) = s.scramble.as_mut() else {
                return false;
            };
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            let text = reveal.sample(elapsed_ms);
            let done = reveal.is_done();
            drop(s);

            if let Some(doc) = dom::window_document() {
                if let Some(el) = dom::by_id(&doc, ID_PROJECT_ARCANA) {
                    el.set_text_content(Some(&text));
                }
            }
            if done {
                inner_tick.state.borrow_mut().scramble = None;
            }
            !done
        });
        *inner.scramble_ticker.borrow_mut() = Some(ticker);
    }

    /// Map the current scroll position into track translation and per-item
    /// focus styles.
    fn apply(&self) {
        let s = self.state.borrow();
        let Some(layout) = s.layout.as_ref() else {
            return;
        };
        let Some(doc) = dom::window_document() else {
            return;
        };
        let Some(section) = dom::by_id(&doc, ID_DETAIL_TRACK) else {
            return;
        };
        let (_, vh) = dom::viewport_size();
        let items = doc.get_elements_by_class_name(CLASS_TRACK_ITEM);

        match s.mode {
            LayoutMode::Wide => {
                let rect = section.get_bounding_client_rect();
                let p = sticky_progress(rect.top(), rect.height(), vh as f64);

                if let Some(track_el) = dom::html_by_id(&doc, ID_TRACK_ITEMS) {
                    dom::set_style(
                        &track_el,
                        "transform",
                        &format!("translate3d({:.3}vw, 0, 0)", layout.x_at(p)),
                    );
                }
                for i in 0..items.length() {
                    let Some(env) = s.envelopes.get(i as usize) else {
                        break;
                    };
                    let Some(item) = items.item(i) else { continue };
                    if let Ok(item) = item.dyn_into::<web::HtmlElement>() {
                        apply_focus(&item, env, p);
                    }
                }
            }
            LayoutMode::Compact => {
                // vertical stack: each item is its own progress source
                for i in 0..items.length() {
                    let Some(env) = s.envelopes.get(i as usize) else {
                        break;
                    };
                    let Some(item) = items.item(i) else { continue };
                    let rect = item.get_bounding_client_rect();
                    let p = intersection_progress(rect.top(), rect.height(), vh as f64);
                    if let Ok(item) = item.dyn_into::<web::HtmlElement>() {
                        apply_focus(&item, env, p);
                    }
                }
            }
        }
    }
}

fn apply_focus(item: &web::HtmlElement, env: &FocusEnvelope, p: f32) {
    let gray = env.grayscale.sample(p);
    let opacity = env.opacity.sample(p);
    dom::set_style(item, "filter", &format!("grayscale({gray:.3})"));
    dom::set_style(item, "opacity", &format!("{opacity:.3}"));
}
