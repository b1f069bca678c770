//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer, and
//! schedules the once-per-minute redraw the face lives on.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
