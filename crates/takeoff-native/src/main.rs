mod gpu;
mod synth;

use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use glam::Vec3;
use gpu::GpuState;
use synth::CueSynth;
use takeoff_core::input::{action_for_key, target_mode, Action};
use takeoff_core::instances::{pack_scene, sort_back_to_front, uniforms};
use takeoff_core::state::OrbitCamera;
use takeoff_core::{info, ModeController, RenderStyle, TakeoffMode};

const AMBIENT: f32 = 0.25;
const LIGHT_DIR: [f32; 3] = [0.4, 0.8, 0.45];

struct App<'w> {
    gpu: GpuState<'w>,
    controller: ModeController<CueSynth>,
    camera: OrbitCamera,
    cursor: Option<(f64, f64)>,
    dragging: Option<MouseButton>,
    started: Instant,
}

impl<'w> App<'w> {
    fn handle_key(&mut self, key: &str) {
        let Some(action) = action_for_key(key) else {
            return;
        };
        if let Some(mode) = target_mode(action, self.controller.mode()) {
            if action == Action::Reset {
                self.camera.reset();
            }
            self.controller.select(mode);
        } else {
            match action {
                Action::ToggleMute => {
                    let muted = self.controller.toggle_mute();
                    log::info!("[ui] {}", info::mute_tooltip(!muted));
                }
                Action::ToggleStyle => {
                    let style = self.controller.style().toggled();
                    self.controller.set_style(style);
                }
                Action::TogglePanel => print_card(self.controller.mode()),
                _ => {}
            }
        }
        self.refresh_title();
    }

    fn refresh_title(&self) {
        let mode = self.controller.mode();
        let mut title = format!("{} | {}", info::APP_TITLE, mode.title());
        if self.controller.style() == RenderStyle::Basic {
            title.push_str(" (basic)");
        }
        if self.controller.is_muted() {
            title.push_str(" (muted)");
        }
        self.gpu.window.set_title(&title);
    }

    fn pointer_moved(&mut self, x: f64, y: f64) {
        if let (Some((px, py)), Some(button)) = (self.cursor, self.dragging) {
            let (dx, dy) = ((x - px) as f32, (y - py) as f32);
            match button {
                MouseButton::Left => self.camera.rotate(dx, dy),
                MouseButton::Right | MouseButton::Middle => self.camera.pan(dx, dy),
                _ => {}
            }
        }
        self.cursor = Some((x, y));
    }

    fn wheel(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * 100.0,
            MouseScrollDelta::PixelDelta(p) => -p.y as f32,
        };
        self.camera.zoom_wheel(amount);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let t = self.started.elapsed().as_secs_f32();
        self.camera.set_viewport(self.gpu.width, self.gpu.height);
        let scene = self.controller.scene();
        // no font on native; labels render as placeholder bars
        let mut frame = pack_scene(scene, t, true);
        sort_back_to_front(&mut frame.spheres, self.camera.eye());
        let u = uniforms(&self.camera, scene, t, AMBIENT, Vec3::from(LIGHT_DIR).normalize());
        self.gpu.render(&u, &frame)
    }
}

fn print_card(mode: TakeoffMode) {
    let card = info::card(mode);
    log::info!("[info] {} | {}", card.title, card.subtitle);
    log::info!("[info] {}", card.body);
    log::info!("[info] {}", info::DISCLAIMER);
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut controller = ModeController::with_audio(RenderStyle::default(), CueSynth::open);
    controller.on_change(|mode, scene| {
        let texts: Vec<&str> = scene.label.lines.iter().map(|l| l.text).collect();
        log::info!("[scene] {} -> {}", mode.id(), texts.join(" / "));
    });

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(format!(
            "{} | {}",
            info::APP_TITLE,
            controller.mode().title()
        ))
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let gpu = pollster::block_on(GpuState::new(&window))?;
    let mut app = App {
        gpu,
        controller,
        camera: OrbitCamera::default(),
        cursor: None,
        dragging: None,
        started: Instant::now(),
    };
    app.controller.select(TakeoffMode::default());
    print_card(app.controller.mode());

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => app.gpu.resize(size),
            WindowEvent::CloseRequested => {
                app.controller.shutdown();
                elwt.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                match &event.logical_key {
                    Key::Character(c) => app.handle_key(c.as_str()),
                    Key::Named(NamedKey::Space) => app.handle_key(" "),
                    Key::Named(NamedKey::ArrowLeft) => app.handle_key("ArrowLeft"),
                    Key::Named(NamedKey::ArrowRight) => app.handle_key("ArrowRight"),
                    Key::Named(NamedKey::Escape) => {
                        app.controller.shutdown();
                        elwt.exit();
                    }
                    _ => {}
                }
            }
            WindowEvent::CursorMoved { position, .. } => app.pointer_moved(position.x, position.y),
            WindowEvent::MouseInput { state, button, .. } => {
                app.dragging = match state {
                    ElementState::Pressed => Some(button),
                    ElementState::Released => None,
                };
            }
            WindowEvent::MouseWheel { delta, .. } => app.wheel(delta),
            _ => {}
        },
        Event::AboutToWait => match app.render() {
            Ok(_) => app.gpu.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => app.gpu.resize(app.gpu.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("[gpu] frame skipped: {e}"),
        },
        _ => {}
    })?;
    Ok(())
}
