// Page wiring for the web frontend. Scene tuning lives in plane_core::constants.

// `<canvas class="webgl">` hosts the WebGPU surface
pub const CANVAS_SELECTOR: &str = "canvas.webgl";

// Debug panel
pub const PANEL_ID: &str = "debug-panel";
pub const PANEL_TOGGLE_KEY: &str = "h";
pub const REGENERATE_KEY: &str = "r";
pub const REGENERATE_BUTTON_ID: &str = "regenerate-spikes";
