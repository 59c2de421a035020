//! Closed-form growth curves mapping `(mode, generation index)` to node layout.
//!
//! Every function here is pure. Indices come from the fixed generation count
//! (`NODE_COUNT`), so an index outside `0..NODE_COUNT` is a caller bug and
//! panics instead of returning an error.

use crate::constants::*;
use crate::mode::TakeoffMode;
use crate::scene::RenderStyle;
use glam::Vec3;

/// Capability tier a node is colored by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Early,
    Mid,
    Late,
}

impl Tier {
    pub fn hex(self) -> u32 {
        match self {
            Tier::Early => SKY_500,
            Tier::Mid => INDIGO_500,
            Tier::Late => VIOLET_500,
        }
    }

    pub fn rgb(self) -> [f32; 3] {
        hex_rgb(self.hex())
    }
}

/// Per-mode tuning that is not part of the position formula itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
    /// Radius added per generation.
    pub radius_step: f32,
    /// Emissive intensity added per generation (enhanced style only).
    pub emissive_step: f32,
    /// Exclusive upper bounds of the early and mid tiers.
    pub tier_bounds: [usize; 2],
}

pub const SLOW_CURVE: CurveParams = CurveParams {
    radius_step: 0.1,
    emissive_step: 0.05,
    tier_bounds: [3, 7],
};

pub const MODERATE_CURVE: CurveParams = CurveParams {
    radius_step: 0.15,
    emissive_step: 0.08,
    tier_bounds: [3, 7],
};

pub const FAST_CURVE: CurveParams = CurveParams {
    radius_step: 0.25,
    emissive_step: 0.12,
    tier_bounds: [2, 5],
};

pub fn curve_params(mode: TakeoffMode) -> &'static CurveParams {
    match mode {
        TakeoffMode::Slow => &SLOW_CURVE,
        TakeoffMode::Moderate => &MODERATE_CURVE,
        TakeoffMode::Fast => &FAST_CURVE,
    }
}

#[inline]
fn check_index(index: usize) {
    assert!(
        index < NODE_COUNT,
        "generation index {index} out of range 0..{NODE_COUNT}"
    );
}

/// Vertical position of generation `index`.
pub fn position_for(mode: TakeoffMode, index: usize) -> f32 {
    check_index(index);
    match mode {
        TakeoffMode::Slow => SEED_Y + (index as f32 + 1.0) * GROWTH_STEP,
        TakeoffMode::Moderate => {
            SEED_Y + GROWTH_STEP * MODERATE_GROWTH_BASE.powi(index as i32) * MODERATE_AMPLITUDE
        }
        TakeoffMode::Fast => {
            SEED_Y + GROWTH_STEP * FAST_GROWTH_BASE.powi(index as i32) * FAST_AMPLITUDE
        }
    }
}

pub fn radius_for(mode: TakeoffMode, index: usize) -> f32 {
    check_index(index);
    MIN_NODE_RADIUS + index as f32 * curve_params(mode).radius_step
}

pub fn color_for(mode: TakeoffMode, index: usize) -> Tier {
    check_index(index);
    let [early, mid] = curve_params(mode).tier_bounds;
    if index < early {
        Tier::Early
    } else if index < mid {
        Tier::Mid
    } else {
        Tier::Late
    }
}

pub fn emissive_for(mode: TakeoffMode, index: usize) -> f32 {
    check_index(index);
    EMISSIVE_BASE + index as f32 * curve_params(mode).emissive_step
}

/// One generation of capability growth along a curve.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
    pub index: usize,
    pub position: Vec3,
    pub radius: f32,
    pub tier: Tier,
    /// Only present for the enhanced render style.
    pub emissive_strength: Option<f32>,
}

pub fn node_for(mode: TakeoffMode, index: usize, style: RenderStyle) -> NodeSpec {
    NodeSpec {
        index,
        position: Vec3::new(0.0, position_for(mode, index), 0.0),
        radius: radius_for(mode, index),
        tier: color_for(mode, index),
        emissive_strength: style.has_emissive().then(|| emissive_for(mode, index)),
    }
}
