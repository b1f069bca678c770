//! wgpu device and surface ownership.
//!
//! [`Gpu`] holds the device/queue pair and the window surface, hands out
//! per-frame encoders, and decides how to react when the surface errors.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
