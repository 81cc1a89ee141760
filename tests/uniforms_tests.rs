// Host-side tests for the uniform set and its slider constraints.

use glam::{Mat4, Vec2};
use plane_core::*;

#[test]
fn defaults_match_scene_constants() {
    let u = PlaneUniforms::default();
    assert_eq!(u.frequency(), Vec2::new(10.0, 5.0));
    assert_eq!(u.time, 0.0);
    assert_eq!(u.base_color, Rgb::SALMON);
}

#[test]
fn frequency_is_clamped_to_slider_range() {
    let mut u = PlaneUniforms::default();
    assert_eq!(u.set_frequency(FrequencyAxis::X, 25.0), 20.0);
    assert_eq!(u.set_frequency(FrequencyAxis::Y, -3.0), 0.0);
    assert_eq!(u.frequency(), Vec2::new(20.0, 0.0));
}

#[test]
fn frequency_snaps_to_step() {
    let mut u = PlaneUniforms::default();
    let v = u.set_frequency(FrequencyAxis::X, 3.14159);
    assert!((v - 3.14).abs() < 1e-4);
}

#[test]
fn non_finite_frequency_is_ignored() {
    let mut u = PlaneUniforms::default();
    assert_eq!(u.set_frequency(FrequencyAxis::X, f32::NAN), 10.0);
    assert_eq!(u.set_frequency(FrequencyAxis::Y, f32::INFINITY), 5.0);
    assert_eq!(SliderRange::FREQUENCY.constrain(f32::NAN), None);
}

#[test]
fn advance_sets_elapsed_time() {
    let mut u = PlaneUniforms::default();
    u.advance(1.5);
    assert_eq!(u.time, 1.5);
    u.advance(2.0);
    assert_eq!(u.time, 2.0);
}

#[test]
fn uniform_block_layout() {
    assert_eq!(std::mem::size_of::<UniformBlock>(), 160);
    let mut u = PlaneUniforms::default();
    u.advance(0.75);
    let block = u.pack(Mat4::IDENTITY, Mat4::IDENTITY);
    assert_eq!(block.frequency, [10.0, 5.0]);
    assert_eq!(block.time, 0.75);
    assert_eq!(block.amplitude, SPIKE_AMPLITUDE);
    assert_eq!(block.base_color[3], 1.0);
    assert_eq!(bytemuck::bytes_of(&block).len(), 160);
}

#[test]
fn salmon_converts_to_linear() {
    let [r, g, b] = Rgb::SALMON.to_linear();
    assert!((r - 0.955).abs() < 0.01);
    assert!((g - 0.216).abs() < 0.01);
    assert!((b - 0.168).abs() < 0.01);
}
