#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use takeoff_core::state::OrbitCamera;
use takeoff_core::{ModeController, RenderStyle, TakeoffMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use audio::MediaCuePlayer;
use constants::*;

pub(crate) type SharedController = Rc<RefCell<ModeController<MediaCuePlayer>>>;
pub(crate) type SharedCamera = Rc<RefCell<OrbitCamera>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_mode_tabs(document: &web::Document, controller: &SharedController) {
    for tab in overlay::mode_tabs(document) {
        let Some(id) = tab.get_attribute(MODE_ATTR) else {
            continue;
        };
        let controller = controller.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Err(e) = controller.borrow_mut().select_id(&id) {
                log::warn!("[tabs] {}", e);
            }
        }) as Box<dyn FnMut()>);
        _ = tab.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_buttons(document: &web::Document, controller: &SharedController, camera: &SharedCamera) {
    let (c, cam) = (controller.clone(), camera.clone());
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        cam.borrow_mut().reset();
        c.borrow_mut().reset();
    });

    let (c, doc) = (controller.clone(), document.clone());
    dom::add_click_listener(document, MUTE_BUTTON_ID, move || {
        let muted = c.borrow_mut().toggle_mute();
        overlay::show_muted(&doc, muted);
    });

    let doc = document.clone();
    dom::add_click_listener(document, INFO_TOGGLE_ID, move || {
        overlay::toggle_panel(&doc);
    });
}

/// Release the audio element when the page goes away.
fn wire_unload(controller: &SharedController) {
    let controller = controller.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Ok(mut c) = controller.try_borrow_mut() {
            c.shutdown();
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("takeoff-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let mut controller =
        ModeController::with_audio(RenderStyle::default(), MediaCuePlayer::new);
    {
        let doc = document.clone();
        controller.on_change(move |mode, _scene| overlay::show_mode(&doc, mode));
    }
    let controller: SharedController = Rc::new(RefCell::new(controller));
    let camera: SharedCamera = Rc::new(RefCell::new(OrbitCamera::default()));

    overlay::populate(&document);
    overlay::show_mode(&document, controller.borrow().mode());
    overlay::show_muted(&document, controller.borrow().is_muted());
    overlay::set_panel_open(&document, false);

    wire_mode_tabs(&document, &controller);
    wire_buttons(&document, &controller, &camera);
    wire_unload(&controller);
    events::wire_global_keydown(controller.clone(), camera.clone(), document.clone());
    events::wire_orbit_controls(canvas.clone(), camera.clone());

    controller.borrow_mut().select(TakeoffMode::default());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        camera,
        canvas,
        gpu,
        labels: overlay::LabelLayer::new(&document),
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
