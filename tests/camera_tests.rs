// Host-side tests for the orbit camera and float motion sampling.

use glam::Vec3;
use takeoff_core::constants::*;
use takeoff_core::state::OrbitCamera;
use takeoff_core::FloatMotion;

#[test]
fn default_camera_looks_down_negative_z_from_fifteen() {
    let cam = OrbitCamera::default();
    assert!((cam.eye() - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-5);
    assert!((cam.forward() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    assert!((cam.fovy_radians - 50f32.to_radians()).abs() < 1e-6);
}

#[test]
fn origin_projects_to_viewport_center() {
    let cam = OrbitCamera::default();
    let [x, y] = cam.project(Vec3::ZERO, 800.0, 600.0).unwrap();
    assert!((x - 400.0).abs() < 1e-3);
    assert!((y - 300.0).abs() < 1e-3);
}

#[test]
fn points_above_the_target_project_higher_on_screen() {
    let cam = OrbitCamera::default();
    let [_, y_up] = cam.project(Vec3::new(0.0, 3.0, 0.0), 800.0, 600.0).unwrap();
    let [x_right, _] = cam.project(Vec3::new(3.0, 0.0, 0.0), 800.0, 600.0).unwrap();
    assert!(y_up < 300.0);
    assert!(x_right > 400.0);
}

#[test]
fn points_behind_the_camera_do_not_project() {
    let cam = OrbitCamera::default();
    assert!(cam.project(Vec3::new(0.0, 0.0, 30.0), 800.0, 600.0).is_none());
}

#[test]
fn pitch_is_clamped_short_of_the_poles() {
    let mut cam = OrbitCamera::default();
    cam.rotate(0.0, 1.0e6);
    assert!((cam.pitch - CAMERA_MAX_PITCH).abs() < 1e-6);
    cam.rotate(0.0, -1.0e7);
    assert!((cam.pitch + CAMERA_MAX_PITCH).abs() < 1e-6);
}

#[test]
fn rotating_keeps_the_orbit_distance() {
    let mut cam = OrbitCamera::default();
    cam.rotate(120.0, -40.0);
    assert!(((cam.eye() - cam.target).length() - 15.0).abs() < 1e-4);
}

#[test]
fn zoom_is_clamped_and_ignores_bad_factors() {
    let mut cam = OrbitCamera::default();
    cam.zoom(0.5);
    assert!((cam.distance - 7.5).abs() < 1e-5);
    cam.zoom(1e-6);
    assert_eq!(cam.distance, CAMERA_MIN_DISTANCE);
    cam.zoom(1e9);
    assert_eq!(cam.distance, CAMERA_MAX_DISTANCE);
    cam.zoom(f32::NAN);
    cam.zoom(-2.0);
    cam.zoom(0.0);
    assert_eq!(cam.distance, CAMERA_MAX_DISTANCE);
}

#[test]
fn wheel_up_moves_closer() {
    let mut cam = OrbitCamera::default();
    cam.zoom_wheel(-100.0);
    assert!(cam.distance < 15.0);
    cam.zoom_wheel(200.0);
    assert!(cam.distance > 15.0);
}

#[test]
fn pan_moves_target_in_view_plane() {
    let mut cam = OrbitCamera::default();
    cam.pan(100.0, 0.0);
    assert!(cam.target.x < 0.0);
    assert!(cam.target.y.abs() < 1e-5);
    assert!(cam.target.z.abs() < 1e-5);
    let mut cam = OrbitCamera::default();
    cam.pan(0.0, 100.0);
    assert!(cam.target.y > 0.0);
}

#[test]
fn reset_restores_framing_but_keeps_aspect() {
    let mut cam = OrbitCamera::default();
    cam.set_viewport(1000, 500);
    cam.rotate(50.0, 30.0);
    cam.pan(10.0, 10.0);
    cam.zoom(3.0);
    cam.reset();
    assert_eq!(cam.aspect, 2.0);
    assert_eq!(cam.target, Vec3::ZERO);
    assert_eq!(cam.distance, CAMERA_DISTANCE);
    assert_eq!(cam.yaw, 0.0);
    assert_eq!(cam.pitch, 0.0);
}

#[test]
fn zero_sized_viewport_is_safe() {
    let mut cam = OrbitCamera::default();
    cam.set_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
    assert!(cam.view_proj().is_finite());
}

#[test]
fn world_to_pixels_shrinks_with_distance() {
    let mut cam = OrbitCamera::default();
    let near = cam.world_to_pixels(1.0, Vec3::ZERO, 600.0);
    cam.zoom(2.0);
    let far = cam.world_to_pixels(1.0, Vec3::ZERO, 600.0);
    assert!(near > far);
    // fov 50 at distance 15 sees about 14 units vertically
    let expected = 600.0 / (2.0 * 15.0 * (25f32.to_radians()).tan());
    assert!((near - expected).abs() < 1e-2);
}

#[test]
fn float_motion_stays_within_intensity() {
    let m = FloatMotion::default();
    for i in 0..2000 {
        let s = m.sample(i as f32 * 0.05);
        assert!(s.lift.abs() <= m.float_intensity / 10.0 + 1e-6);
        assert!(s.pitch.abs() <= m.rotation_intensity / 8.0 + 1e-6);
        assert!(s.yaw.abs() <= m.rotation_intensity / 8.0 + 1e-6);
        assert!(s.roll.abs() <= m.rotation_intensity / 20.0 + 1e-6);
    }
}

#[test]
fn float_motion_starts_level() {
    let s = FloatMotion::default().sample(0.0);
    assert_eq!(s.lift, 0.0);
    assert_eq!(s.yaw, 0.0);
    assert_eq!(s.roll, 0.0);
    assert!(s.pitch > 0.0);
}
