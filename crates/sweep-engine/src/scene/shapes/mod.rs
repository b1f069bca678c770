pub mod disc;
pub mod polygon;

pub use disc::DiscCmd;
pub use polygon::PolygonCmd;
