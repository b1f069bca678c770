//! Time subsystem.
//!
//! Provides the two clock-facing pieces of the runtime:
//! - [`WallClock`] reads the local wall-clock hour/minute for the face
//! - [`next_minute_boundary`] computes the deadline the event loop parks on
//!   so a redraw fires once per minute boundary

mod wall_clock;

pub use wall_clock::{next_minute_boundary, WallClock, WallTime};
