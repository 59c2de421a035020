use crate::constants::*;
use crate::overlay::LabelLayer;
use crate::render;
use crate::{dom, SharedCamera, SharedController};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use takeoff_core::instances::{pack_scene, placed_labels, sort_back_to_front, uniforms};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: SharedController,
    pub camera: SharedCamera,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub labels: LabelLayer,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        let controller = self.controller.borrow();
        let scene = controller.scene();
        let mut camera = self.camera.borrow_mut();

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let (w, h) = gpu.size();
            camera.set_viewport(w, h);

            // Without a label layer the text falls back to flat bars in the scene
            let mut frame = pack_scene(scene, t, !self.labels.is_available());
            sort_back_to_front(&mut frame.spheres, camera.eye());
            let u = uniforms(&camera, scene, t, AMBIENT, Vec3::from(LIGHT_DIR).normalize());
            match gpu.render(&u, &frame) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory; rendering stopped");
                    self.gpu = None;
                }
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        } else {
            camera.set_viewport(self.canvas.width(), self.canvas.height());
        }

        let css = dom::canvas_css_size(&self.canvas);
        self.labels
            .update(&placed_labels(scene, t), &camera, scene.style, css);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
