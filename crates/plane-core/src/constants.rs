use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Plane mesh
pub const PLANE_WIDTH: f32 = 1.0;
pub const PLANE_HEIGHT: f32 = 1.0;
pub const PLANE_SEGMENTS: u32 = 32;
pub const PLANE_SCALE_Y: f32 = 2.0 / 3.0; // flag-like aspect

// Displacement
pub const SPIKE_AMPLITUDE: f32 = 0.1; // max |elevation| per unit spike and unit wave

// Frequency control (debug panel)
pub const DEFAULT_FREQUENCY: [f32; 2] = [10.0, 5.0];
pub const FREQUENCY_MIN: f32 = 0.0;
pub const FREQUENCY_MAX: f32 = 20.0;
pub const FREQUENCY_STEP: f32 = 0.01;

// CSS "salmon" (#fa8072)
pub const BASE_COLOR_SRGB: [u8; 3] = [0xfa, 0x80, 0x72];

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_START: [f32; 3] = [0.25, -0.25, 1.0];

// Orbit controls
pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 1.0;
pub const DAMPING_FACTOR: f32 = 0.05; // share of the pending delta applied per update
pub const ROTATE_SPEED: f32 = 1.0;
pub const ZOOM_SPEED: f32 = 1.0;
pub const DELTA_SETTLE_EPS: f32 = 1e-6; // residual velocity below this snaps to zero
pub const POLAR_EPS: f32 = 1e-6; // keeps phi away from the poles

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Assets
pub const TEXTURE_PATH: &str = "./textures/suswa.jpg";

#[inline]
pub fn camera_start_vec3() -> Vec3 {
    Vec3::new(CAMERA_START[0], CAMERA_START[1], CAMERA_START[2])
}
