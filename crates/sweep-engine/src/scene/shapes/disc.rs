use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled-disc draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl DiscCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl DrawList {
    /// Records a solid disc.
    #[inline]
    pub fn push_disc(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(z, DrawCmd::Disc(DiscCmd::new(center, radius, color)));
    }
}
