//! Coordinate types shared by the scene and the renderers.
//!
//! One CPU-side space everywhere: logical pixels, origin at the top-left,
//! +X right and +Y down. Shaders convert to NDC via a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
