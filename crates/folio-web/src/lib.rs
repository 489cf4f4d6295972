#![cfg(target_arch = "wasm32")]

mod constants;
mod cursor;
mod dom;
mod gallery;
mod gate;
mod hud;
mod input;
mod preloader;
mod router;
mod shutter_dom;
mod ticker;

use cursor::CursorWidget;
use folio_core::{CursorState, IntroState, ShutterSequencer, ThemeState, UptimeTimer};
use gallery::{DetailGalleryWidget, HomeGalleryWidget};
use gate::GateWidget;
use hud::HudWidget;
use preloader::PreloaderWidget;
use shutter_dom::ShutterWidget;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Shared view-state singletons. One logical writer per field, many
/// readers; constructed once at boot and injected into every widget.
pub struct App {
    pub cursor: RefCell<CursorState>,
    pub intro: RefCell<IntroState>,
    pub theme: RefCell<ThemeState>,
    pub timer: RefCell<UptimeTimer>,
    pub sequencer: RefCell<ShutterSequencer>,
}

impl App {
    fn new() -> Self {
        Self {
            cursor: RefCell::new(CursorState::default()),
            intro: RefCell::new(IntroState::default()),
            theme: RefCell::new(ThemeState::default()),
            timer: RefCell::new(UptimeTimer::new()),
            sequencer: RefCell::new(ShutterSequencer::new()),
        }
    }
}

// App-lifetime widget ownership; their tickers/listeners/timeouts are
// cancelled through Drop if this is ever cleared.
struct Widgets {
    _cursor: CursorWidget,
    _gate: GateWidget,
    _shutter: ShutterWidget,
    _home: HomeGalleryWidget,
    _detail: DetailGalleryWidget,
    _hud: HudWidget,
    _preloader: PreloaderWidget,
}

thread_local! {
    static WIDGETS: RefCell<Option<Widgets>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let app = Rc::new(App::new());
    dom::set_root_theme(&document, app.theme.borrow().theme);

    let cursor = CursorWidget::new(app.clone(), &document)?;
    let shutter = ShutterWidget::new(app.clone(), &document);
    let transitions = shutter.handle();

    let gate = GateWidget::new(app.clone(), &document, cursor.handle())?;
    let home = HomeGalleryWidget::new(
        app.clone(),
        &document,
        cursor.handle(),
        transitions.clone(),
    );
    let detail = DetailGalleryWidget::new(app.clone(), &document, cursor.handle(), transitions);
    let hud = HudWidget::new(app.clone(), &document)?;

    // every route change drops any in-flight hold and clears the hover
    // label the departing page may have left behind
    {
        let cursor_handle = cursor.handle();
        let app_route = app.clone();
        shutter.add_route_hook(Box::new(move |_path| {
            app_route.cursor.borrow_mut().clear_hover();
            cursor_handle.route_reset();
        }));
    }
    shutter.add_route_hook(detail.route_hook());
    shutter.add_route_hook(hud.route_hook());

    // manual theme switch, mirrored onto the document root
    if let Some(toggle) = dom::by_id(&document, constants::ID_THEME_TOGGLE) {
        let app_theme = app.clone();
        dom::forget_listener(toggle.as_ref(), "click", move |_ev| {
            let theme = app_theme.theme.borrow_mut().toggle();
            if let Some(doc) = dom::window_document() {
                dom::set_root_theme(&doc, theme);
            }
            log::info!("[theme] switched to {}", theme.as_attr());
        });
    }

    let preloader = PreloaderWidget::start(app, &document);

    WIDGETS.with(|w| {
        *w.borrow_mut() = Some(Widgets {
            _cursor: cursor,
            _gate: gate,
            _shutter: shutter,
            _home: home,
            _detail: detail,
            _hud: hud,
            _preloader: preloader,
        });
    });
    log::info!("folio-web ready");
    Ok(())
}
