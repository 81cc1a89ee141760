// Host-side checks of the displacement and colour math mirrored in plane.wgsl.

use glam::{Vec2, Vec3};
use plane_core::shading::*;
use plane_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn freq() -> Vec2 {
    Vec2::from(DEFAULT_FREQUENCY)
}

#[test]
fn zero_spike_is_flat_at_time_zero() {
    let p = Vec3::new(0.3, -0.2, 0.0);
    assert_eq!(elevation(p, 0.0, freq(), 0.0, SPIKE_AMPLITUDE), 0.0);
}

#[test]
fn zero_spike_is_flat_at_any_time() {
    let p = Vec3::new(-0.45, 0.1, 0.0);
    for t in [0.0, 0.5, 3.0, 120.0] {
        assert_eq!(elevation(p, 0.0, freq(), t, SPIKE_AMPLITUDE), 0.0);
    }
}

#[test]
fn zero_frequency_is_uniform_across_vertices() {
    let mut rng = StdRng::seed_from_u64(11);
    let g = PlaneGeometry::new(1.0, 1.0, 32, 32, &mut rng);
    let t = 2.7;
    let first = elevation(
        Vec3::from(g.vertices[0].position),
        g.spikes[0],
        Vec2::ZERO,
        t,
        SPIKE_AMPLITUDE,
    );
    for (v, s) in g.vertices.iter().zip(&g.spikes) {
        let e = elevation(Vec3::from(v.position), *s, Vec2::ZERO, t, SPIKE_AMPLITUDE);
        assert!((e - first).abs() < 1e-6);
    }
}

#[test]
fn displacement_is_deterministic() {
    let p = Vec3::new(0.125, 0.375, 0.0);
    let n = Vec3::Z;
    let a = displace(p, n, 0.8, freq(), 1.25, SPIKE_AMPLITUDE);
    let b = displace(p, n, 0.8, freq(), 1.25, SPIKE_AMPLITUDE);
    assert_eq!(a, b);
    // Only the normal component moves
    assert_eq!(a.x, p.x);
    assert_eq!(a.y, p.y);
}

#[test]
fn elevation_is_bounded_by_spike_and_amplitude() {
    let mut rng = StdRng::seed_from_u64(3);
    let g = PlaneGeometry::new(1.0, 1.0, 16, 16, &mut rng);
    for step in 0..50 {
        let t = step as f32 * 0.37;
        for (v, s) in g.vertices.iter().zip(&g.spikes) {
            let e = elevation(Vec3::from(v.position), *s, freq(), t, SPIKE_AMPLITUDE);
            assert!(e.abs() <= 2.0 * SPIKE_AMPLITUDE * s + 1e-6);
        }
    }
}

#[test]
fn elevation_is_continuous_in_time() {
    let p = Vec3::new(0.2, 0.4, 0.0);
    let mut prev = elevation(p, 1.0, freq(), 0.0, SPIKE_AMPLITUDE);
    for i in 1..600 {
        let t = i as f32 / 60.0;
        let e = elevation(p, 1.0, freq(), t, SPIKE_AMPLITUDE);
        // dt = 1/60 with |d/dt| <= 2 * amplitude
        assert!((e - prev).abs() < 0.01);
        prev = e;
    }
}

#[test]
fn mix_factor_is_clamped_and_centred() {
    assert_eq!(mix_factor(0.0, SPIKE_AMPLITUDE), 0.5);
    assert_eq!(mix_factor(10.0, SPIKE_AMPLITUDE), 1.0);
    assert_eq!(mix_factor(-10.0, SPIKE_AMPLITUDE), 0.0);
    assert_eq!(mix_factor(0.3, 0.0), 0.5);
}

#[test]
fn shade_at_rest_is_even_blend() {
    let texel = Vec3::new(0.2, 0.4, 0.6);
    let base = Vec3::new(1.0, 0.0, 0.0);
    let c = shade(texel, base, 0.0, SPIKE_AMPLITUDE);
    assert!((c - Vec3::new(0.6, 0.2, 0.3)).length() < 1e-6);
}
