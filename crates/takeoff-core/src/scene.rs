//! Scene assembly: seed, growth nodes, connecting edges and the floating label group.

use crate::constants::*;
use crate::growth::{node_for, NodeSpec, Tier};
use crate::mode::TakeoffMode;
use glam::Vec3;
use smallvec::SmallVec;

/// Visual styling layered on top of the layout. Styling never changes positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderStyle {
    Basic,
    #[default]
    Enhanced,
}

impl RenderStyle {
    pub fn has_emissive(self) -> bool {
        matches!(self, RenderStyle::Enhanced)
    }

    pub fn edge_opacity(self) -> f32 {
        match self {
            RenderStyle::Basic => 1.0,
            RenderStyle::Enhanced => ENHANCED_EDGE_OPACITY,
        }
    }

    pub fn casts_shadows(self) -> bool {
        matches!(self, RenderStyle::Enhanced)
    }

    /// Font asset requested for label text; `None` means the renderer default.
    pub fn label_font(self) -> Option<&'static str> {
        match self {
            RenderStyle::Basic => None,
            RenderStyle::Enhanced => Some(LABEL_FONT),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RenderStyle::Basic => RenderStyle::Enhanced,
            RenderStyle::Enhanced => RenderStyle::Basic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeOrientation {
    /// Fixed unit segments of the linear curve.
    Vertical,
    /// Variable-length segments; a primitive authored along its own axis is
    /// turned a quarter turn about X to lie on the growth axis.
    AxisAligned,
}

impl EdgeOrientation {
    pub fn rotation_x(self) -> f32 {
        match self {
            EdgeOrientation::Vertical => 0.0,
            EdgeOrientation::AxisAligned => std::f32::consts::FRAC_PI_2,
        }
    }
}

/// Connection between generation `from` and generation `to = from + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSpec {
    pub from: usize,
    pub to: usize,
    pub start: Vec3,
    pub end: Vec3,
    pub length: f32,
    pub midpoint: Vec3,
    pub orientation: EdgeOrientation,
    pub radius: f32,
    pub opacity: f32,
}

impl EdgeSpec {
    pub fn color_rgb(&self) -> [f32; 3] {
        hex_rgb(SLATE_500)
    }
}

/// A single line of camera-facing text.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelLine {
    pub text: &'static str,
    pub position: Vec3,
    pub size: f32,
    pub color: u32,
}

impl LabelLine {
    pub fn color_rgb(&self) -> [f32; 3] {
        hex_rgb(self.color)
    }
}

/// Parameters of the ambient bobbing motion; evaluated by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: FLOAT_SPEED,
            rotation_intensity: FLOAT_ROTATION_INTENSITY,
            float_intensity: FLOAT_INTENSITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelGroup {
    pub anchor: Vec3,
    pub lines: SmallVec<[LabelLine; 3]>,
    pub motion: FloatMotion,
    pub font: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeedSpec {
    pub position: Vec3,
    pub radius: f32,
    pub tier: Tier,
    pub caption: LabelLine,
}

/// Everything the rendering layer needs to draw one takeoff mode.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub mode: TakeoffMode,
    pub style: RenderStyle,
    pub seed: SeedSpec,
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub label: LabelGroup,
}

/// Builds a fresh [`Scene`] per mode. Holds only the render style.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneComposer {
    style: RenderStyle,
}

impl SceneComposer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    pub fn build(&self, mode: TakeoffMode) -> Scene {
        let nodes: Vec<NodeSpec> = (0..NODE_COUNT)
            .map(|i| node_for(mode, i, self.style))
            .collect();
        let edges = nodes
            .windows(2)
            .map(|pair| self.edge_between(mode, &pair[0], &pair[1]))
            .collect();
        Scene {
            mode,
            style: self.style,
            seed: seed_spec(),
            nodes,
            edges,
            label: self.label_group(mode),
        }
    }

    // Length and placement come from the computed node centers so edges stay
    // attached even if the curve formulas change.
    fn edge_between(&self, mode: TakeoffMode, a: &NodeSpec, b: &NodeSpec) -> EdgeSpec {
        let orientation = match mode {
            TakeoffMode::Slow => EdgeOrientation::Vertical,
            TakeoffMode::Moderate | TakeoffMode::Fast => EdgeOrientation::AxisAligned,
        };
        EdgeSpec {
            from: a.index,
            to: b.index,
            start: a.position,
            end: b.position,
            length: b.position.y - a.position.y,
            midpoint: (a.position + b.position) * 0.5,
            orientation,
            radius: EDGE_RADIUS,
            opacity: self.style.edge_opacity(),
        }
    }

    fn label_group(&self, mode: TakeoffMode) -> LabelGroup {
        let anchor = label_anchor_vec3();
        let texts = label_texts(mode);
        let lines = texts
            .into_iter()
            .zip(LABEL_LINE_OFFSETS)
            .enumerate()
            .map(|(i, (text, dy))| {
                let (size, color) = if i == 0 {
                    (LABEL_TITLE_SIZE, WHITE)
                } else {
                    (LABEL_LINE_SIZE, SLATE_400)
                };
                LabelLine {
                    text,
                    position: anchor + Vec3::new(0.0, dy, 0.0),
                    size,
                    color,
                }
            })
            .collect();
        LabelGroup {
            anchor,
            lines,
            motion: FloatMotion::default(),
            font: self.style.label_font(),
        }
    }
}

/// Title and the two description lines shown next to the curve.
pub fn label_texts(mode: TakeoffMode) -> [&'static str; 3] {
    match mode {
        TakeoffMode::Slow => ["Slow Takeoff", "Gradual improvement", "over decades"],
        TakeoffMode::Moderate => ["Moderate Takeoff", "Significant progress", "over years"],
        TakeoffMode::Fast => ["Fast Takeoff", "Rapid intelligence", "explosion in days/weeks"],
    }
}

fn seed_spec() -> SeedSpec {
    SeedSpec {
        position: seed_position(),
        radius: SEED_RADIUS,
        tier: Tier::Early,
        caption: LabelLine {
            text: SEED_CAPTION,
            position: Vec3::new(0.0, SEED_CAPTION_Y, 0.0),
            size: SEED_CAPTION_SIZE,
            color: WHITE,
        },
    }
}
