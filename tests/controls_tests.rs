// Host-side tests for orbit controls: damping, dolly clamp and idle updates.

use glam::Vec3;
use plane_core::*;

fn settled() -> (PerspectiveCamera, OrbitControls) {
    let mut camera = PerspectiveCamera::new(800.0 / 600.0);
    let mut controls = OrbitControls::new(&camera, ControlsConfig::default());
    // The start pose sits just beyond max distance; the first update pulls it in
    controls.update(&mut camera);
    (camera, controls)
}

#[test]
fn first_update_clamps_start_distance() {
    let mut camera = PerspectiveCamera::new(1.0);
    assert!(camera.distance() > MAX_DISTANCE);
    let mut controls = OrbitControls::new(&camera, ControlsConfig::default());
    assert!(controls.update(&mut camera));
    assert!((camera.distance() - MAX_DISTANCE).abs() < 1e-5);
}

#[test]
fn update_without_input_is_idempotent() {
    let (mut camera, mut controls) = settled();
    let eye = camera.eye;
    for _ in 0..10 {
        assert!(!controls.update(&mut camera));
        assert_eq!(camera.eye, eye);
    }
    assert!(!controls.is_moving());
}

#[test]
fn wheel_zoom_never_leaves_distance_bounds() {
    let (mut camera, mut controls) = settled();
    for _ in 0..200 {
        controls.handle_input(PointerInput::Wheel { delta_y: -500.0 }, 600.0);
        controls.update(&mut camera);
        assert!(camera.distance() >= MIN_DISTANCE - 1e-5);
    }
    assert!((camera.distance() - MIN_DISTANCE).abs() < 1e-4);
    for _ in 0..200 {
        controls.handle_input(PointerInput::Wheel { delta_y: 500.0 }, 600.0);
        controls.update(&mut camera);
        assert!(camera.distance() <= MAX_DISTANCE + 1e-5);
    }
    assert!((camera.distance() - MAX_DISTANCE).abs() < 1e-4);
}

#[test]
fn damping_spreads_rotation_over_frames() {
    let (mut camera, mut controls) = settled();
    let theta0 = controls.spherical().theta;
    controls.rotate_left(1.0);

    assert!(controls.update(&mut camera));
    let first_step = controls.spherical().theta - theta0;
    assert!((first_step + DAMPING_FACTOR).abs() < 1e-5);
    assert!(controls.is_moving());

    let mut frames = 1;
    while controls.is_moving() && frames < 1000 {
        controls.update(&mut camera);
        frames += 1;
    }
    assert!(!controls.is_moving());
    assert!(frames > 100, "inertia should last many frames, got {frames}");
    let total = controls.spherical().theta - theta0;
    assert!((total + 1.0).abs() < 1e-3);

    let eye = camera.eye;
    assert!(!controls.update(&mut camera));
    assert_eq!(camera.eye, eye);
}

#[test]
fn drag_orbits_around_fixed_target() {
    let (mut camera, mut controls) = settled();
    let radius = camera.distance();
    let eye = camera.eye;
    controls.handle_input(PointerInput::Down { id: 1, x: 100.0, y: 100.0 }, 600.0);
    controls.handle_input(PointerInput::Move { id: 1, x: 180.0, y: 140.0 }, 600.0);
    controls.handle_input(PointerInput::Up { id: 1 }, 600.0);
    for _ in 0..30 {
        controls.update(&mut camera);
    }
    assert_ne!(camera.eye, eye);
    assert_eq!(camera.target, Vec3::ZERO);
    assert!((camera.distance() - radius).abs() < 1e-4);
}

#[test]
fn move_without_press_is_ignored() {
    let (mut camera, mut controls) = settled();
    controls.handle_input(PointerInput::Move { id: 3, x: 10.0, y: 10.0 }, 600.0);
    controls.handle_input(PointerInput::Move { id: 3, x: 300.0, y: 10.0 }, 600.0);
    assert!(!controls.is_moving());
    assert!(!controls.update(&mut camera));
}

#[test]
fn pinch_apart_dollies_in_to_min_distance() {
    let (mut camera, mut controls) = settled();
    controls.handle_input(PointerInput::Down { id: 1, x: 0.0, y: 0.0 }, 600.0);
    controls.handle_input(PointerInput::Down { id: 2, x: 100.0, y: 0.0 }, 600.0);
    controls.handle_input(PointerInput::Move { id: 2, x: 400.0, y: 0.0 }, 600.0);
    controls.update(&mut camera);
    assert!((camera.distance() - MIN_DISTANCE).abs() < 1e-4);
}

#[test]
fn polar_angle_stays_off_the_poles() {
    let (mut camera, mut controls) = settled();
    controls.rotate_up(100.0);
    for _ in 0..500 {
        controls.update(&mut camera);
        let phi = controls.spherical().phi;
        assert!(phi > 0.0 && phi < std::f32::consts::PI);
    }
    assert!(camera.eye.is_finite());
}

#[test]
fn wheel_delta_modes_convert_to_pixels() {
    assert_eq!(wheel_delta_px(3.0, 0), 3.0);
    assert_eq!(wheel_delta_px(1.0, 1), 16.0);
    assert_eq!(wheel_delta_px(-1.0, 2), -100.0);
}

#[test]
fn only_primary_mouse_button_orbits() {
    assert!(is_orbit_button("mouse", 0));
    assert!(!is_orbit_button("mouse", 1));
    assert!(!is_orbit_button("mouse", 2));
    assert!(is_orbit_button("touch", 0));
    assert!(is_orbit_button("pen", 0));
}

#[test]
fn filtered_right_drag_leaves_camera_still() {
    let (mut camera, mut controls) = settled();
    let eye = camera.eye;
    // Mirrors the web host: a rejected pointerdown never reaches the controls,
    // so the following moves belong to no active pointer.
    if is_orbit_button("mouse", 2) {
        controls.handle_input(PointerInput::Down { id: 1, x: 100.0, y: 100.0 }, 600.0);
    }
    controls.handle_input(PointerInput::Move { id: 1, x: 300.0, y: 250.0 }, 600.0);
    controls.handle_input(PointerInput::Up { id: 1 }, 600.0);
    assert!(!controls.update(&mut camera));
    assert_eq!(camera.eye, eye);
}
