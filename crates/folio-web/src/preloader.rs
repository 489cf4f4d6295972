use crate::constants::{ID_HERO_GATE, ID_PRELOADER, ID_PRELOAD_BAR, ID_PRELOAD_PCT};
use crate::ticker::Timeout;
use crate::{dom, App};
use folio_core::{collect_asset_urls, PreloadTracker, PRELOAD_GRACE_MS, PROJECTS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Static assets outside the project records.
const EXTRA_ASSETS: &[&str] = &["/img/hero-gate.avif", "/img/rest-mode.gif"];

/// Boot screen: fires every unique asset through an off-screen image,
/// counts load *and* error as done (a bad asset can never wedge the boot),
/// then reveals the gate after a short grace delay.
pub struct PreloaderWidget {
    _images: Vec<web::HtmlImageElement>,
    grace: Rc<RefCell<Option<Timeout>>>,
}

impl PreloaderWidget {
    pub fn start(app: Rc<App>, document: &web::Document) -> Self {
        let urls = collect_asset_urls(PROJECTS, EXTRA_ASSETS);
        let tracker = Rc::new(RefCell::new(PreloadTracker::new(urls.len())));
        let grace: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        log::info!("[preload] {} assets queued", urls.len());
        if urls.is_empty() {
            finish(&app, document);
            return Self {
                _images: Vec::new(),
                grace,
            };
        }

        let mut images = Vec::with_capacity(urls.len());
        for url in urls {
            let Ok(image) = web::HtmlImageElement::new() else {
                // counting an unconstructible image as done keeps the total
                // honest
                tracker.borrow_mut().mark_done();
                continue;
            };

            for kind in ["load", "error"] {
                let app = app.clone();
                let tracker = tracker.clone();
                let grace = grace.clone();
                let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                    let complete = tracker.borrow_mut().mark_done();
                    let percent = tracker.borrow().percent();
                    update_readout(percent);
                    if complete {
                        let app = app.clone();
                        *grace.borrow_mut() = Some(Timeout::new(PRELOAD_GRACE_MS, move || {
                            if let Some(doc) = dom::window_document() {
                                finish(&app, &doc);
                            }
                        }));
                    }
                }) as Box<dyn FnMut(web::Event)>);
                let _ = image
                    .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
                // boot-scoped one-shots; leaking them is bounded and final
                closure.forget();
            }

            image.set_src(url);
            images.push(image);
        }

        Self {
            _images: images,
            grace,
        }
    }
}

fn update_readout(percent: u8) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    if let Some(pct_el) = dom::by_id(&doc, ID_PRELOAD_PCT) {
        pct_el.set_text_content(Some(&format!("{percent}%")));
    }
    if let Some(bar_el) = dom::html_by_id(&doc, ID_PRELOAD_BAR) {
        dom::set_style(&bar_el, "width", &format!("{percent}%"));
    }
}

fn finish(app: &Rc<App>, document: &web::Document) {
    app.intro.borrow_mut().loaded = true;
    if let Some(preloader) = dom::by_id(document, ID_PRELOADER) {
        dom::set_hidden(&preloader, true);
    }
    if let Some(gate) = dom::by_id(document, ID_HERO_GATE) {
        dom::set_hidden(&gate, false);
    }
    log::info!("[preload] complete, gate revealed");
}
