pub mod camera;
pub mod clock;
pub mod constants;
pub mod controls;
pub mod events;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod shading;
pub mod texture;
pub mod uniforms;
pub mod viewport;

pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use controls::*;
pub use events::*;
pub use frame::*;
pub use geometry::*;
pub use input::*;
pub use texture::*;
pub use uniforms::*;
pub use viewport::*;

// Shader bundled as a string constant
pub static PLANE_WGSL: &str = include_str!("../shaders/plane.wgsl");
