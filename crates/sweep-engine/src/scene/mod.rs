//! Renderer-agnostic draw stream.
//!
//! The face records what to paint here each redraw; renderers consume the
//! stream in deterministic paint order (z-layer, then insertion order).
//! Shape payloads and their push helpers live one file per shape under
//! [`shapes`].

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
