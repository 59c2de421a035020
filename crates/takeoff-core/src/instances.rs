//! GPU-facing packing of a [`Scene`] into per-instance vertex data.
//!
//! Both shells upload these Pod structs unchanged; the layouts match the
//! vertex buffer descriptions in `takeoff-render`.

use crate::scene::{LabelLine, Scene};
use crate::state::OrbitCamera;
use glam::{Mat3, Vec3};

// Rough advance of one glyph relative to the font size, used to size label placeholders.
pub const GLYPH_ASPECT: f32 = 0.55;
pub const PLACEHOLDER_THICKNESS: f32 = 0.3; // of the font size
pub const PLACEHOLDER_ALPHA: f32 = 0.85;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub light_dir: [f32; 4],
    /// x = time, y = enhanced style (0/1), z = ambient term, w = shadows (0/1).
    pub params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    pub emissive: f32,
    pub _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SegmentInstance {
    pub start: [f32; 3],
    pub half_width: f32,
    pub end: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct FrameInstances {
    pub spheres: Vec<SphereInstance>,
    pub segments: Vec<SegmentInstance>,
}

/// A label line after the float motion has been applied.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    pub text: &'static str,
    pub position: Vec3,
    pub size: f32,
    pub color: [f32; 3],
}

pub fn uniforms(
    camera: &OrbitCamera,
    scene: &Scene,
    time_sec: f32,
    ambient: f32,
    light_dir: Vec3,
) -> Uniforms {
    let eye = camera.eye();
    let enhanced = if scene.style.has_emissive() { 1.0 } else { 0.0 };
    let shadows = if scene.style.casts_shadows() { 1.0 } else { 0.0 };
    Uniforms {
        view_proj: camera.view_proj().to_cols_array_2d(),
        eye: [eye.x, eye.y, eye.z, 1.0],
        light_dir: [light_dir.x, light_dir.y, light_dir.z, 0.0],
        params: [time_sec, enhanced, ambient, shadows],
    }
}

/// Seed caption (static) followed by the floating group lines at `time_sec`.
pub fn placed_labels(scene: &Scene, time_sec: f32) -> Vec<PlacedLabel> {
    let group = &scene.label;
    let f = group.motion.sample(time_sec);
    let rot = Mat3::from_rotation_z(f.roll) * Mat3::from_rotation_y(f.yaw);
    let lift = Vec3::new(0.0, f.lift, 0.0);

    let mut out = Vec::with_capacity(group.lines.len() + 1);
    out.push(place(&scene.seed.caption, scene.seed.caption.position));
    for line in &group.lines {
        let p = group.anchor + rot * (line.position - group.anchor) + lift;
        out.push(place(line, p));
    }
    out
}

fn place(line: &LabelLine, position: Vec3) -> PlacedLabel {
    PlacedLabel {
        text: line.text,
        position,
        size: line.size,
        color: line.color_rgb(),
    }
}

/// Pack seed + nodes as spheres and edges as segments. With `label_placeholders`
/// set, every label line also becomes a flat bar sized after its text, used when
/// no font is available to the renderer.
pub fn pack_scene(scene: &Scene, time_sec: f32, label_placeholders: bool) -> FrameInstances {
    let mut spheres = Vec::with_capacity(scene.nodes.len() + 1);
    let seed_rgb = scene.seed.tier.rgb();
    spheres.push(SphereInstance {
        center: scene.seed.position.to_array(),
        radius: scene.seed.radius,
        color: [seed_rgb[0], seed_rgb[1], seed_rgb[2], 1.0],
        emissive: 0.0,
        _pad: [0.0; 3],
    });
    for n in &scene.nodes {
        let rgb = n.tier.rgb();
        spheres.push(SphereInstance {
            center: n.position.to_array(),
            radius: n.radius,
            color: [rgb[0], rgb[1], rgb[2], 1.0],
            emissive: n.emissive_strength.unwrap_or(0.0),
            _pad: [0.0; 3],
        });
    }

    let mut segments: Vec<SegmentInstance> = scene
        .edges
        .iter()
        .map(|e| {
            let rgb = e.color_rgb();
            SegmentInstance {
                start: e.start.to_array(),
                half_width: e.radius,
                end: e.end.to_array(),
                _pad: 0.0,
                color: [rgb[0], rgb[1], rgb[2], e.opacity],
            }
        })
        .collect();

    if label_placeholders {
        for label in placed_labels(scene, time_sec) {
            let half = label.text.chars().count() as f32 * label.size * GLYPH_ASPECT * 0.5;
            let dx = Vec3::new(half, 0.0, 0.0);
            segments.push(SegmentInstance {
                start: (label.position - dx).to_array(),
                half_width: label.size * PLACEHOLDER_THICKNESS,
                end: (label.position + dx).to_array(),
                _pad: 0.0,
                color: [label.color[0], label.color[1], label.color[2], PLACEHOLDER_ALPHA],
            });
        }
    }

    FrameInstances { spheres, segments }
}

/// Order spheres far-to-near for alpha blending without a depth buffer.
pub fn sort_back_to_front(spheres: &mut [SphereInstance], eye: Vec3) {
    spheres.sort_by(|a, b| {
        let da = Vec3::from(a.center).distance_squared(eye);
        let db = Vec3::from(b.center).distance_squared(eye);
        db.total_cmp(&da)
    });
}
