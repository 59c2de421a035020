//! Visual-side state shared with the front-ends.
//!
//! These types avoid platform APIs and are used by both the native and the web
//! shell: the orbit camera that replaces the page's orbit controls, and the
//! sampling of the label group's ambient float motion.

use crate::constants::*;
use crate::scene::FloatMotion;
use glam::{Mat4, Vec3, Vec4};

/// Right-handed orbit camera circling `target`. Yaw 0 / pitch 0 looks down -Z.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye()).normalize_or_zero()
    }

    /// Orbit by a pointer delta in pixels. Pitch stays short of the poles.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw -= dx_px * ORBIT_ROTATE_PER_PX;
        self.pitch = (self.pitch + dy_px * ORBIT_ROTATE_PER_PX)
            .clamp(-CAMERA_MAX_PITCH, CAMERA_MAX_PITCH);
    }

    /// Scale the orbit distance; `factor < 1` moves closer.
    pub fn zoom(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.distance = (self.distance * factor).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Zoom from a wheel delta (positive = away).
    pub fn zoom_wheel(&mut self, delta: f32) {
        self.zoom((delta * ORBIT_ZOOM_PER_WHEEL).exp());
    }

    /// Slide the target in the view plane by a pointer delta in pixels.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32) {
        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let scale = self.distance * ORBIT_PAN_PER_PX;
        self.target += (-right * dx_px + up * dy_px) * scale;
    }

    /// Back to the initial framing, keeping the viewport aspect.
    pub fn reset(&mut self) {
        let aspect = self.aspect;
        *self = Self {
            aspect,
            ..Self::default()
        };
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-6), self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Pixel coordinates of `world` in a `width`×`height` viewport (origin top-left).
    /// `None` when the point is behind the camera or outside the depth range.
    pub fn project(&self, world: Vec3, width: f32, height: f32) -> Option<[f32; 2]> {
        let clip = self.view_proj() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some([
            (ndc.x * 0.5 + 0.5) * width,
            (1.0 - (ndc.y * 0.5 + 0.5)) * height,
        ])
    }

    /// On-screen height in pixels of a world-space length placed at `at`.
    pub fn world_to_pixels(&self, length: f32, at: Vec3, viewport_height: f32) -> f32 {
        let depth = (at - self.eye()).dot(self.forward()).max(self.znear);
        let visible = 2.0 * depth * (self.fovy_radians * 0.5).tan();
        length / visible * viewport_height
    }
}

/// Offsets produced by the float motion at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatSample {
    pub lift: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl FloatMotion {
    /// Gentle bobbing: a slow sine lift plus small rotations, all bounded by the
    /// configured intensities.
    pub fn sample(&self, time_sec: f32) -> FloatSample {
        let t = time_sec * self.speed / 4.0;
        let (s, c) = t.sin_cos();
        FloatSample {
            lift: s / 10.0 * self.float_intensity,
            pitch: c / 8.0 * self.rotation_intensity,
            yaw: s / 8.0 * self.rotation_intensity,
            roll: s / 20.0 * self.rotation_intensity,
        }
    }
}
