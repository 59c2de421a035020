use crate::overlay;
use crate::{SharedCamera, SharedController};
use takeoff_core::input::{action_for_key, target_mode, Action};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    controller: &SharedController,
    camera: &SharedCamera,
    document: &web::Document,
) {
    // leave browser shortcuts alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() {
        return;
    }
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    let mode = controller.borrow().mode();
    if let Some(next) = target_mode(action, mode) {
        if action == Action::Reset {
            camera.borrow_mut().reset();
        }
        controller.borrow_mut().select(next);
    } else {
        match action {
            Action::ToggleMute => {
                let muted = controller.borrow_mut().toggle_mute();
                overlay::show_muted(document, muted);
            }
            Action::ToggleStyle => {
                let mut c = controller.borrow_mut();
                let style = c.style().toggled();
                c.set_style(style);
            }
            Action::TogglePanel => overlay::toggle_panel(document),
            _ => {}
        }
    }
    if matches!(key.as_str(), " " | "ArrowLeft" | "ArrowRight") {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(
    controller: SharedController,
    camera: SharedCamera,
    document: web::Document,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &controller, &camera, &document);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
