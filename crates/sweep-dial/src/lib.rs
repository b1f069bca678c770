//! Dial geometry for the **sweep** watchface.
//!
//! This crate is intentionally dependency-free so the face's geometry can be
//! consumed and tested without pulling in any window or GPU code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`angles`] | `ClockTime`, `DialAngles`, the `resolve` entry point |
//! | [`sector`] | `Point`, `tessellate`, `point_on_circle` |
//!
//! # Quick start
//!
//! ```rust
//! use sweep_dial::{resolve, tessellate, ClockTime, SECTOR_RESOLUTION};
//!
//! let angles = resolve(ClockTime { hour24: 6, minute: 30 });
//! assert_eq!(angles.rotation_deg, 90);
//! assert_eq!(angles.span_deg, 0);
//!
//! let polygon = tessellate(35, angles.span_deg, SECTOR_RESOLUTION);
//! assert_eq!(polygon.len(), SECTOR_RESOLUTION);
//! ```

pub mod angles;
pub mod sector;

pub use angles::{resolve, ClockTime, DialAngles, TWELVE_OCLOCK_OFFSET_DEG};
pub use sector::{point_on_circle, tessellate, Point, EDGE_COMPENSATION, SECTOR_RESOLUTION};
