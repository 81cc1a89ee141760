/// Host-agnostic pointer input, in logical pixels relative to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { id: i32, x: f32, y: f32 },
    Move { id: i32, x: f32, y: f32 },
    Up { id: i32 },
    /// Scroll distance in pixels; positive scrolls away (zoom out).
    Wheel { delta_y: f32 },
}

/// Normalize a DOM `WheelEvent.deltaY` to pixels.
///
/// `delta_mode` 1 is lines and 2 is pages; both are rescaled to roughly what a
/// pixel-mode device reports for one notch.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        1 => 16.0,
        2 => 100.0,
        _ => 1.0,
    };
    (delta_y * scale) as f32
}

/// Whether a DOM `pointerdown` should start a drag. Only the primary mouse
/// button orbits; right and middle drag would pan, which is disabled. Touch
/// and pen contacts always count.
#[inline]
pub fn is_orbit_button(pointer_type: &str, button: i16) -> bool {
    pointer_type != "mouse" || button == 0
}
