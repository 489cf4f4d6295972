use crate::constants::{CLASS_WARN, HOME_PATH, ID_HUD_UPTIME, ID_REST_OVERLAY, ID_REST_RESUME};
use crate::ticker::{Interval, Timeout};
use crate::{dom, router, App};
use folio_core::{format_mmss, REBOOT_COOLDOWN_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Uptime readout plus the overheat rest overlay. The interval only counts
/// seconds while the visitor is on the home page with the system active;
/// time spent elsewhere never accrues.
pub struct HudWidget {
    inner: Rc<HudInner>,
    _interval: Interval,
}

struct HudInner {
    app: Rc<App>,
    cooldown: RefCell<Option<Timeout>>,
    can_resume: Cell<bool>,
}

impl HudWidget {
    pub fn new(app: Rc<App>, document: &web::Document) -> anyhow::Result<Self> {
        let uptime_el = dom::by_id(document, ID_HUD_UPTIME)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_HUD_UPTIME}"))?;
        let overlay_el = dom::by_id(document, ID_REST_OVERLAY)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_REST_OVERLAY}"))?;
        let resume_el = dom::by_id(document, ID_REST_RESUME)
            .ok_or_else(|| anyhow::anyhow!("missing #{ID_REST_RESUME}"))?;

        let inner = Rc::new(HudInner {
            app,
            cooldown: RefCell::new(None),
            can_resume: Cell::new(false),
        });

        let interval = {
            let inner = inner.clone();
            let uptime_el = uptime_el.clone();
            let overlay_el = overlay_el.clone();
            let resume_el = resume_el.clone();
            Interval::new(1000.0, move || {
                let on_home = router::pathname() == HOME_PATH;
                let active = inner.app.timer.borrow().active;
                dom::set_hidden(&uptime_el, !(on_home && active));
                if !(on_home && active) {
                    return;
                }

                let latched = inner.app.timer.borrow_mut().tick();
                {
                    let timer = inner.app.timer.borrow();
                    uptime_el.set_text_content(Some(&format!(
                        "UPTIME: {}",
                        format_mmss(timer.seconds)
                    )));
                    dom::set_class(&uptime_el, CLASS_WARN, timer.near_limit());
                }

                if latched {
                    dom::set_hidden(&overlay_el, false);
                    dom::set_hidden(&resume_el, true);
                    inner.can_resume.set(false);
                    let inner_cd = inner.clone();
                    let resume_cd = resume_el.clone();
                    *inner.cooldown.borrow_mut() = Some(Timeout::new(REBOOT_COOLDOWN_MS, move || {
                        inner_cd.can_resume.set(true);
                        dom::set_hidden(&resume_cd, false);
                    }));
                }
            })
        };

        // manual reboot after the cooldown
        {
            let inner_click = inner.clone();
            let overlay_click = overlay_el.clone();
            let uptime_click = uptime_el.clone();
            let target: &web::EventTarget = resume_el.as_ref();
            dom::forget_listener(target, "click", move |_ev| {
                if !inner_click.can_resume.get() {
                    return;
                }
                let mut timer = inner_click.app.timer.borrow_mut();
                if !timer.overheated {
                    return;
                }
                timer.reset();
                let seconds = timer.seconds;
                drop(timer);
                log::info!("[uptime] rebooted");
                dom::set_hidden(&overlay_click, true);
                uptime_click
                    .set_text_content(Some(&format!("UPTIME: {}", format_mmss(seconds))));
                inner_click.can_resume.set(false);
                inner_click.cooldown.borrow_mut().take();
            });
        }

        Ok(Self {
            inner,
            _interval: interval,
        })
    }

    /// Route changes re-evaluate HUD visibility immediately instead of on
    /// the next interval tick.
    pub fn route_hook(&self) -> Box<dyn Fn(&str)> {
        let inner = self.inner.clone();
        Box::new(move |path| {
            let Some(doc) = dom::window_document() else {
                return;
            };
            if let Some(uptime_el) = dom::by_id(&doc, ID_HUD_UPTIME) {
                let visible = path == HOME_PATH && inner.app.timer.borrow().active;
                dom::set_hidden(&uptime_el, !visible);
            }
        })
    }
}
