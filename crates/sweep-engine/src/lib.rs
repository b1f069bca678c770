//! Sweep engine crate.
//!
//! This crate owns the platform + GPU runtime pieces consumed by the face:
//! the winit window/event loop, the wgpu device and surface, the draw-command
//! scene, the shape renderers, and the wall-clock/minute-tick plumbing.
//! The dial geometry itself lives in `sweep-dial` and stays free of any of
//! these concerns.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
