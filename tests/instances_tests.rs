// Host-side tests for packing scenes into GPU instances.

use glam::Vec3;
use takeoff_core::instances::*;
use takeoff_core::state::OrbitCamera;
use takeoff_core::{RenderStyle, SceneComposer, TakeoffMode};

#[test]
fn pod_layouts_match_vertex_descriptions() {
    assert_eq!(std::mem::size_of::<SphereInstance>(), 48);
    assert_eq!(std::mem::size_of::<SegmentInstance>(), 48);
    assert_eq!(std::mem::size_of::<Uniforms>(), 112);
}

#[test]
fn seed_and_nodes_become_spheres_edges_become_segments() {
    let scene = SceneComposer::default().build(TakeoffMode::Moderate);
    let frame = pack_scene(&scene, 0.0, false);
    assert_eq!(frame.spheres.len(), 11);
    assert_eq!(frame.segments.len(), 9);
    assert_eq!(frame.spheres[0].center, [0.0, -6.0, 0.0]);
    assert_eq!(frame.spheres[0].radius, 1.0);
    assert_eq!(frame.spheres[0].emissive, 0.0);
    for (s, n) in frame.spheres[1..].iter().zip(&scene.nodes) {
        assert_eq!(s.center, n.position.to_array());
        assert_eq!(s.radius, n.radius);
        assert_eq!(s.emissive, n.emissive_strength.unwrap());
        assert_eq!(s.color[3], 1.0);
    }
    for (seg, e) in frame.segments.iter().zip(&scene.edges) {
        assert_eq!(seg.start, e.start.to_array());
        assert_eq!(seg.end, e.end.to_array());
        assert!((seg.color[3] - 0.7).abs() < 1e-6);
    }
}

#[test]
fn basic_style_packs_without_emission() {
    let scene = SceneComposer::new(RenderStyle::Basic).build(TakeoffMode::Fast);
    let frame = pack_scene(&scene, 1.0, false);
    assert!(frame.spheres.iter().all(|s| s.emissive == 0.0));
    assert!(frame.segments.iter().all(|s| s.color[3] == 1.0));
}

#[test]
fn placeholders_add_one_bar_per_label_line() {
    let scene = SceneComposer::default().build(TakeoffMode::Slow);
    let frame = pack_scene(&scene, 0.0, true);
    // seed caption + three group lines
    assert_eq!(frame.segments.len(), 9 + 4);
    let bars = &frame.segments[9..];
    let width = |s: &SegmentInstance| Vec3::from(s.end).distance(Vec3::from(s.start));
    // "Slow Takeoff" title is wider than "over decades" at a smaller size
    assert!(width(&bars[1]) > width(&bars[3]));
    assert!(bars.iter().all(|b| (b.color[3] - PLACEHOLDER_ALPHA).abs() < 1e-6));
}

#[test]
fn placed_labels_follow_the_float_motion() {
    let scene = SceneComposer::default().build(TakeoffMode::Fast);
    let at_rest = placed_labels(&scene, 0.0);
    assert_eq!(at_rest.len(), 4);
    assert_eq!(at_rest[0].text, "Seed AI");
    assert_eq!(at_rest[1].text, "Fast Takeoff");
    assert!((at_rest[1].position - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);

    let later = placed_labels(&scene, 2.0);
    assert_eq!(later[0].position, at_rest[0].position);
    assert_ne!(later[1].position, at_rest[1].position);
    for (a, b) in at_rest.iter().zip(&later).skip(1) {
        assert!((a.position - b.position).length() < 0.5);
    }
}

#[test]
fn back_to_front_sort_puts_far_spheres_first() {
    let scene = SceneComposer::default().build(TakeoffMode::Fast);
    let mut frame = pack_scene(&scene, 0.0, false);
    let eye = Vec3::new(0.0, 100.0, 0.0);
    sort_back_to_front(&mut frame.spheres, eye);
    let d: Vec<f32> = frame
        .spheres
        .iter()
        .map(|s| Vec3::from(s.center).distance(eye))
        .collect();
    assert!(d.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(frame.spheres[0].center, [0.0, -6.0, 0.0]);
}

#[test]
fn uniforms_carry_camera_and_style() {
    let camera = OrbitCamera::default();
    let enhanced = SceneComposer::new(RenderStyle::Enhanced).build(TakeoffMode::Slow);
    let basic = SceneComposer::new(RenderStyle::Basic).build(TakeoffMode::Slow);
    let light = Vec3::new(0.0, 1.0, 0.0);
    let u = uniforms(&camera, &enhanced, 1.5, 0.25, light);
    assert_eq!(u.eye, [0.0, 0.0, 15.0, 1.0]);
    assert_eq!(u.params, [1.5, 1.0, 0.25, 1.0]);
    assert_eq!(u.light_dir, [0.0, 1.0, 0.0, 0.0]);
    assert_eq!(u.view_proj, camera.view_proj().to_cols_array_2d());
    let flat = uniforms(&camera, &basic, 0.0, 0.25, light);
    assert_eq!(flat.params[1], 0.0);
    assert_eq!(flat.params[3], 0.0);
}
