//! Orbit camera controls with inertial damping and a clamped dolly distance.
//!
//! Input handlers only accumulate intent (`sphere_delta`, `scale`); nothing
//! touches the camera until `update` runs once per frame. Damping assumes that
//! fixed cadence: each update applies `damping_factor` of the pending rotation
//! and keeps the remainder for the next frame.

use crate::camera::PerspectiveCamera;
use crate::constants::*;
use crate::input::PointerInput;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

/// Spherical coordinates around the target, Y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    /// Polar angle from +Y.
    pub phi: f32,
    /// Azimuth around Y, measured from +Z towards +X.
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            enable_damping: true,
            damping_factor: DAMPING_FACTOR,
            rotate_speed: ROTATE_SPEED,
            zoom_speed: ZOOM_SPEED,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ActivePointer {
    id: i32,
    pos: Vec2,
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub config: ControlsConfig,
    spherical: Spherical,
    sphere_delta: Spherical,
    scale: f32,
    pointers: SmallVec<[ActivePointer; 2]>,
    pinch_distance: Option<f32>,
}

impl OrbitControls {
    /// Attach to `camera`, adopting its current eye/target as the orbit.
    pub fn new(camera: &PerspectiveCamera, config: ControlsConfig) -> Self {
        Self {
            config,
            spherical: Spherical::from_offset(camera.eye - camera.target),
            sphere_delta: Spherical::default(),
            scale: 1.0,
            pointers: SmallVec::new(),
            pinch_distance: None,
        }
    }

    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// True while rotation velocity or an unapplied dolly is pending.
    pub fn is_moving(&self) -> bool {
        self.sphere_delta.theta != 0.0 || self.sphere_delta.phi != 0.0 || self.scale != 1.0
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.sphere_delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.sphere_delta.phi -= angle;
    }

    /// Move towards the target; `dolly_scale` < 1 shrinks the radius.
    pub fn dolly_in(&mut self, dolly_scale: f32) {
        if dolly_scale.is_finite() && dolly_scale > 0.0 {
            self.scale *= dolly_scale;
        }
    }

    pub fn dolly_out(&mut self, dolly_scale: f32) {
        if dolly_scale.is_finite() && dolly_scale > 0.0 {
            self.scale /= dolly_scale;
        }
    }

    fn zoom_scale(&self, delta: f32) -> f32 {
        0.95_f32.powf(self.config.zoom_speed * (delta * 0.01).abs())
    }

    /// Feed one input event. `viewport_height` is the logical canvas height
    /// used to turn pixel drags into angles.
    pub fn handle_input(&mut self, input: PointerInput, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        match input {
            PointerInput::Down { id, x, y } => {
                let pos = Vec2::new(x, y);
                match self.pointers.iter_mut().find(|p| p.id == id) {
                    Some(p) => p.pos = pos,
                    None => self.pointers.push(ActivePointer { id, pos }),
                }
                self.pinch_distance = self.current_pinch_distance();
            }
            PointerInput::Move { id, x, y } => {
                let pos = Vec2::new(x, y);
                let Some(idx) = self.pointers.iter().position(|p| p.id == id) else {
                    return;
                };
                let prev = self.pointers[idx].pos;
                self.pointers[idx].pos = pos;
                match self.pointers.len() {
                    1 => {
                        let delta = (pos - prev) * self.config.rotate_speed;
                        self.rotate_left(TAU * delta.x / height);
                        self.rotate_up(TAU * delta.y / height);
                    }
                    _ => {
                        let Some(now) = self.current_pinch_distance() else {
                            return;
                        };
                        if let Some(before) = self.pinch_distance {
                            if before > 0.0 && now > 0.0 {
                                self.dolly_out((now / before).powf(self.config.zoom_speed));
                            }
                        }
                        self.pinch_distance = Some(now);
                    }
                }
            }
            PointerInput::Up { id } => {
                self.pointers.retain(|p| p.id != id);
                self.pinch_distance = self.current_pinch_distance();
            }
            PointerInput::Wheel { delta_y } => {
                if delta_y < 0.0 {
                    self.dolly_in(self.zoom_scale(delta_y));
                } else if delta_y > 0.0 {
                    self.dolly_out(self.zoom_scale(delta_y));
                }
            }
        }
    }

    fn current_pinch_distance(&self) -> Option<f32> {
        match self.pointers.as_slice() {
            [a, b, ..] => Some(a.pos.distance(b.pos)),
            _ => None,
        }
    }

    /// Apply pending rotation/dolly to `camera`. Returns whether the camera
    /// eye changed. With nothing pending the camera is left untouched.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let cfg = self.config;
        let mut next = self.spherical;
        if cfg.enable_damping {
            next.theta += self.sphere_delta.theta * cfg.damping_factor;
            next.phi += self.sphere_delta.phi * cfg.damping_factor;
        } else {
            next.theta += self.sphere_delta.theta;
            next.phi += self.sphere_delta.phi;
        }
        next.phi = next.phi.clamp(POLAR_EPS, PI - POLAR_EPS);
        next.radius = (next.radius * self.scale).clamp(cfg.min_distance, cfg.max_distance);

        if cfg.enable_damping {
            self.sphere_delta.theta *= 1.0 - cfg.damping_factor;
            self.sphere_delta.phi *= 1.0 - cfg.damping_factor;
            if self.sphere_delta.theta.abs() < DELTA_SETTLE_EPS {
                self.sphere_delta.theta = 0.0;
            }
            if self.sphere_delta.phi.abs() < DELTA_SETTLE_EPS {
                self.sphere_delta.phi = 0.0;
            }
        } else {
            self.sphere_delta = Spherical::default();
        }
        self.scale = 1.0;

        if next == self.spherical {
            return false;
        }
        self.spherical = next;
        let eye = camera.target + next.to_offset();
        let changed = eye != camera.eye;
        camera.eye = eye;
        changed
    }
}
