//! Shape renderers and their shared frame context.
//!
//! Renderers read the scene's draw stream and issue wgpu commands. Each one
//! owns its pipeline and buffers and rebuilds them lazily when the surface
//! format changes.
//!
//! CPU-side geometry is in logical pixels with a top-left origin and +Y down;
//! the vertex shaders convert to NDC through a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
