//! CPU reference of the vertex and fragment stages in `plane.wgsl`.
//!
//! The GPU never calls into this module; it exists so the displacement and
//! colour math can be checked on the host. Keep both in lockstep.

use glam::{Vec2, Vec3};

/// Travelling wave along one axis, anchored so that `f == 0` is flat.
#[inline]
pub fn wave(coord: f32, frequency: f32, time: f32) -> f32 {
    (coord * frequency + time).sin() - time.sin()
}

/// Offset of a vertex along its normal.
#[inline]
pub fn elevation(position: Vec3, spike: f32, frequency: Vec2, time: f32, amplitude: f32) -> f32 {
    let w = wave(position.x, frequency.x, time) + wave(position.y, frequency.y, time);
    amplitude * spike * 0.5 * w
}

/// Local-space position after displacement.
#[inline]
pub fn displace(
    position: Vec3,
    normal: Vec3,
    spike: f32,
    frequency: Vec2,
    time: f32,
    amplitude: f32,
) -> Vec3 {
    position + normal * elevation(position, spike, frequency, time, amplitude)
}

/// Blend weight between texture and base colour, 0.5 at rest.
#[inline]
pub fn mix_factor(elevation: f32, amplitude: f32) -> f32 {
    if amplitude <= 0.0 {
        return 0.5;
    }
    (elevation / amplitude * 0.5 + 0.5).clamp(0.0, 1.0)
}

/// Final fragment colour (linear RGB).
pub fn shade(texel: Vec3, base_color: Vec3, elevation: f32, amplitude: f32) -> Vec3 {
    let m = mix_factor(elevation, amplitude);
    texel.lerp(base_color, m) * (0.8 + 0.4 * m)
}
