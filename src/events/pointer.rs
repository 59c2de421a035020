use crate::constants::{BUTTON_MIDDLE, BUTTON_PRIMARY, BUTTON_SECONDARY};
use crate::SharedCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Drag {
    Rotate,
    Pan,
}

#[derive(Default)]
struct DragState {
    active: Option<Drag>,
    last: [f32; 2],
}

#[derive(Clone)]
struct OrbitWiring {
    canvas: web::HtmlCanvasElement,
    camera: SharedCamera,
    drag: Rc<RefCell<DragState>>,
}

/// Orbit controls on the canvas: primary drag rotates, secondary/middle (or
/// shift + primary) pans, wheel zooms.
pub fn wire_orbit_controls(canvas: web::HtmlCanvasElement, camera: SharedCamera) {
    let w = OrbitWiring {
        canvas,
        camera,
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_contextmenu(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let kind = match ev.button() {
            BUTTON_PRIMARY if ev.shift_key() => Drag::Pan,
            BUTTON_PRIMARY => Drag::Rotate,
            BUTTON_MIDDLE | BUTTON_SECONDARY => Drag::Pan,
            _ => return,
        };
        {
            let mut ds = w.drag.borrow_mut();
            ds.active = Some(kind);
            ds.last = [ev.client_x() as f32, ev.client_y() as f32];
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = [ev.client_x() as f32, ev.client_y() as f32];
        let (kind, dx, dy) = {
            let mut ds = w.drag.borrow_mut();
            let Some(kind) = ds.active else {
                return;
            };
            let d = (pos[0] - ds.last[0], pos[1] - ds.last[1]);
            ds.last = pos;
            (kind, d.0, d.1)
        };
        let mut cam = w.camera.borrow_mut();
        match kind {
            Drag::Rotate => cam.rotate(dx, dy),
            Drag::Pan => cam.pan(dx, dy),
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag.borrow_mut().active.take().is_some() {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // DOM_DELTA_LINE reports lines; scale to roughly pixel units
        let scale = if ev.delta_mode() == web::WheelEvent::DOM_DELTA_LINE {
            100.0
        } else {
            1.0
        };
        w.camera.borrow_mut().zoom_wheel((ev.delta_y() * scale) as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_contextmenu(w: &OrbitWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
