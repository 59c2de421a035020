use glam::Vec3;

// Shared layout/visual constants used by both web and native frontends.

// Growth curve layout
pub const NODE_COUNT: usize = 10; // generations drawn per takeoff mode
pub const SEED_Y: f32 = -6.0; // height of the seed node; every curve starts here
pub const GROWTH_STEP: f32 = 1.0; // vertical unit the curves are scaled by
pub const MODERATE_GROWTH_BASE: f32 = 1.3;
pub const MODERATE_AMPLITUDE: f32 = 0.8;
pub const FAST_GROWTH_BASE: f32 = 1.8;
pub const FAST_AMPLITUDE: f32 = 0.5;

// Node sizing and intensity
pub const MIN_NODE_RADIUS: f32 = 0.2;
pub const EMISSIVE_BASE: f32 = 0.2;

// Seed node and its caption
pub const SEED_RADIUS: f32 = 1.0;
pub const SEED_CAPTION: &str = "Seed AI";
pub const SEED_CAPTION_Y: f32 = -8.0;
pub const SEED_CAPTION_SIZE: f32 = 0.5;

// Connecting edges
pub const EDGE_RADIUS: f32 = 0.05;
pub const ENHANCED_EDGE_OPACITY: f32 = 0.7;

// Floating label group (title + two description lines)
pub const LABEL_ANCHOR: [f32; 3] = [3.0, 0.0, 0.0];
pub const LABEL_TITLE_SIZE: f32 = 0.7;
pub const LABEL_LINE_SIZE: f32 = 0.4;
pub const LABEL_LINE_OFFSETS: [f32; 3] = [0.0, -1.0, -1.7];
pub const LABEL_FONT: &str = "fonts/Inter-Bold.ttf";

// Ambient float motion of the label group
pub const FLOAT_SPEED: f32 = 1.5;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.2;
pub const FLOAT_INTENSITY: f32 = 0.5;

// Palette (sRGB hex)
pub const SKY_500: u32 = 0x0ea5e9; // early tier and seed
pub const INDIGO_500: u32 = 0x6366f1; // mid tier
pub const VIOLET_500: u32 = 0x8b5cf6; // late tier
pub const SLATE_500: u32 = 0x64748b; // edges
pub const SLATE_400: u32 = 0x94a3b8; // description lines
pub const WHITE: u32 = 0xffffff; // titles and captions

// Orbit camera
pub const CAMERA_DISTANCE: f32 = 15.0;
pub const CAMERA_FOVY_DEGREES: f32 = 50.0;
pub const CAMERA_MIN_DISTANCE: f32 = 3.0;
pub const CAMERA_MAX_DISTANCE: f32 = 200.0;
pub const CAMERA_MAX_PITCH: f32 = 1.5; // radians, just short of straight up/down
pub const ORBIT_ROTATE_PER_PX: f32 = 0.005;
pub const ORBIT_PAN_PER_PX: f32 = 0.0015; // scaled by orbit distance
pub const ORBIT_ZOOM_PER_WHEEL: f32 = 0.001;

/// Convert a 0xRRGGBB literal into normalized sRGB components.
#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[inline]
pub fn label_anchor_vec3() -> Vec3 {
    Vec3::from(LABEL_ANCHOR)
}

#[inline]
pub fn seed_position() -> Vec3 {
    Vec3::new(0.0, SEED_Y, 0.0)
}
