use crate::constants::*;
use glam::{Mat4, Vec2};

/// 8-bit sRGB colour as authored (CSS hex).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const SALMON: Rgb = Rgb::from_array(BASE_COLOR_SRGB);

    pub const fn from_array(c: [u8; 3]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
        }
    }

    /// Linear-light components for shading on an sRGB surface.
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }
}

#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Min/max/step constraint of one panel slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const FREQUENCY: SliderRange = SliderRange {
        min: FREQUENCY_MIN,
        max: FREQUENCY_MAX,
        step: FREQUENCY_STEP,
    };

    /// Snap to the step grid and clamp. Non-finite input yields `None`.
    pub fn constrain(&self, value: f32) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let snapped = if self.step > 0.0 {
            ((value - self.min) / self.step).round() * self.step + self.min
        } else {
            value
        };
        Some(snapped.clamp(self.min, self.max))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrequencyAxis {
    X,
    Y,
}

/// The uniform set shared by both shader stages.
#[derive(Clone, Debug)]
pub struct PlaneUniforms {
    frequency: Vec2,
    pub time: f32,
    pub base_color: Rgb,
}

impl Default for PlaneUniforms {
    fn default() -> Self {
        Self {
            frequency: Vec2::from(DEFAULT_FREQUENCY),
            time: 0.0,
            base_color: Rgb::SALMON,
        }
    }
}

impl PlaneUniforms {
    pub fn new(frequency: Vec2, base_color: Rgb) -> Self {
        let mut u = Self {
            frequency: Vec2::ZERO,
            time: 0.0,
            base_color,
        };
        u.set_frequency(FrequencyAxis::X, frequency.x);
        u.set_frequency(FrequencyAxis::Y, frequency.y);
        u
    }

    pub fn frequency(&self) -> Vec2 {
        self.frequency
    }

    /// Write one frequency component through the slider constraint.
    /// Returns the stored value; NaN/inf leaves the component unchanged.
    pub fn set_frequency(&mut self, axis: FrequencyAxis, value: f32) -> f32 {
        let slot = match axis {
            FrequencyAxis::X => &mut self.frequency.x,
            FrequencyAxis::Y => &mut self.frequency.y,
        };
        if let Some(v) = SliderRange::FREQUENCY.constrain(value) {
            *slot = v;
        }
        *slot
    }

    /// Nudge one component by `delta`, clamped like a slider write.
    pub fn step_frequency(&mut self, axis: FrequencyAxis, delta: f32) -> f32 {
        let current = match axis {
            FrequencyAxis::X => self.frequency.x,
            FrequencyAxis::Y => self.frequency.y,
        };
        self.set_frequency(axis, current + delta)
    }

    /// Store the elapsed seconds as-is.
    #[inline]
    pub fn advance(&mut self, elapsed_sec: f32) {
        self.time = elapsed_sec;
    }

    pub fn pack(&self, model: Mat4, view_proj: Mat4) -> UniformBlock {
        let [r, g, b] = self.base_color.to_linear();
        UniformBlock {
            model: model.to_cols_array_2d(),
            view_proj: view_proj.to_cols_array_2d(),
            base_color: [r, g, b, 1.0],
            frequency: self.frequency.to_array(),
            time: self.time,
            amplitude: SPIKE_AMPLITUDE,
        }
    }
}

/// GPU layout of the uniform buffer; mirrors `Uniforms` in `plane.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UniformBlock {
    pub model: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    pub frequency: [f32; 2],
    pub time: f32,
    pub amplitude: f32,
}
