// Host-side tests for scene assembly.

use glam::Vec3;
use takeoff_core::constants::*;
use takeoff_core::scene::*;
use takeoff_core::{RenderStyle, SceneComposer, TakeoffMode};

#[test]
fn every_mode_has_ten_nodes_and_nine_edges() {
    let composer = SceneComposer::default();
    for mode in TakeoffMode::ALL {
        let scene = composer.build(mode);
        assert_eq!(scene.mode, mode);
        assert_eq!(scene.nodes.len(), 10);
        assert_eq!(scene.edges.len(), 9);
        assert_eq!(scene.label.lines.len(), 3);
    }
}

#[test]
fn edges_connect_consecutive_nodes() {
    let scene = SceneComposer::new(RenderStyle::Enhanced).build(TakeoffMode::Fast);
    for (k, e) in scene.edges.iter().enumerate() {
        assert_eq!(e.from, k);
        assert_eq!(e.to, k + 1);
        assert_eq!(e.start, scene.nodes[k].position);
        assert_eq!(e.end, scene.nodes[k + 1].position);
        assert!(e.length > 0.0);
        assert!((e.midpoint - (e.start + e.end) * 0.5).length() < 1e-5);
        assert!((e.length - (e.end.y - e.start.y)).abs() < 1e-5);
    }
}

#[test]
fn slow_edges_are_unit_and_vertical() {
    let scene = SceneComposer::default().build(TakeoffMode::Slow);
    for e in &scene.edges {
        assert!((e.length - GROWTH_STEP).abs() < 1e-5);
        assert_eq!(e.orientation, EdgeOrientation::Vertical);
        assert_eq!(e.orientation.rotation_x(), 0.0);
    }
    let fast = SceneComposer::default().build(TakeoffMode::Fast);
    assert!(fast
        .edges
        .iter()
        .all(|e| e.orientation == EdgeOrientation::AxisAligned));
}

#[test]
fn build_is_deterministic() {
    let composer = SceneComposer::new(RenderStyle::Basic);
    for mode in TakeoffMode::ALL {
        assert_eq!(composer.build(mode), composer.build(mode));
    }
}

#[test]
fn style_changes_look_not_layout() {
    let basic = SceneComposer::new(RenderStyle::Basic).build(TakeoffMode::Moderate);
    let enhanced = SceneComposer::new(RenderStyle::Enhanced).build(TakeoffMode::Moderate);
    for (b, e) in basic.nodes.iter().zip(&enhanced.nodes) {
        assert_eq!(b.position, e.position);
        assert_eq!(b.tier, e.tier);
        assert!(b.emissive_strength.is_none());
        assert!(e.emissive_strength.is_some());
    }
    assert!(basic.edges.iter().all(|e| e.opacity == 1.0));
    assert!(enhanced.edges.iter().all(|e| (e.opacity - 0.7).abs() < 1e-6));
    assert_eq!(basic.label.font, None);
    assert_eq!(enhanced.label.font, Some(LABEL_FONT));
    assert!(!RenderStyle::Basic.casts_shadows());
    assert!(RenderStyle::Enhanced.casts_shadows());
}

#[test]
fn labels_describe_the_mode() {
    let scene = SceneComposer::default().build(TakeoffMode::Fast);
    let texts: Vec<&str> = scene.label.lines.iter().map(|l| l.text).collect();
    assert_eq!(texts, ["Fast Takeoff", "Rapid intelligence", "explosion in days/weeks"]);
    assert_eq!(label_texts(TakeoffMode::Slow)[0], "Slow Takeoff");
    assert_eq!(label_texts(TakeoffMode::Moderate)[2], "over years");

    let title = &scene.label.lines[0];
    assert_eq!(title.position, Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(title.size, 0.7);
    assert_eq!(title.color, WHITE);
    assert_eq!(scene.label.lines[1].position.y, -1.0);
    assert_eq!(scene.label.lines[2].position.y, -1.7);
    assert_eq!(scene.label.lines[2].color, SLATE_400);
}

#[test]
fn seed_is_fixed_across_modes() {
    let composer = SceneComposer::default();
    let seeds: Vec<SeedSpec> = TakeoffMode::ALL
        .iter()
        .map(|&m| composer.build(m).seed)
        .collect();
    assert!(seeds.windows(2).all(|w| w[0] == w[1]));
    let seed = &seeds[0];
    assert_eq!(seed.position, Vec3::new(0.0, -6.0, 0.0));
    assert_eq!(seed.radius, 1.0);
    assert_eq!(seed.caption.text, "Seed AI");
    assert_eq!(seed.caption.position.y, -8.0);
}

#[test]
fn float_motion_defaults() {
    let m = FloatMotion::default();
    assert_eq!(m.speed, 1.5);
    assert_eq!(m.rotation_intensity, 0.2);
    assert_eq!(m.float_intensity, 0.5);
}

#[test]
fn style_toggle_round_trips() {
    assert_eq!(RenderStyle::default(), RenderStyle::Enhanced);
    assert_eq!(RenderStyle::Enhanced.toggled(), RenderStyle::Basic);
    assert_eq!(RenderStyle::Basic.toggled().toggled(), RenderStyle::Basic);
}
