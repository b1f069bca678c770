//! Paint model shared between the scene and the renderers.
//!
//! Scope: color representation only (linear premultiplied alpha). The face is
//! a two-color design, so there is no paint-source enum here; draw commands
//! carry a solid [`Color`] directly.

pub mod color;

pub use color::Color;
