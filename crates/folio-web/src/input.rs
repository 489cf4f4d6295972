use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport-space position of a pointer/mouse/single-touch event, if the
/// event carries one.
pub fn pointer_client_pos(ev: &web::Event) -> Option<Vec2> {
    if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
        return Some(Vec2::new(pe.client_x() as f32, pe.client_y() as f32));
    }
    if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
        return Some(Vec2::new(me.client_x() as f32, me.client_y() as f32));
    }
    if let Some(te) = ev.dyn_ref::<web::TouchEvent>() {
        // only the first touch drives the trackers
        return te
            .touches()
            .get(0)
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32));
    }
    None
}
