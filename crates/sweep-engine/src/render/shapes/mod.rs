//! Shape renderers.

mod common;

pub mod disc;
pub mod polygon;

pub use disc::DiscRenderer;
pub use polygon::PolygonRenderer;
