use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled-polygon draw payload.
///
/// `vertices` are in shape-local logical pixels in fan order: vertex 0 is the
/// fan apex and the remaining vertices wind around it. The renderer rotates
/// the polygon by `rotation_deg` (clockwise on screen), translates it to
/// `origin`, and closes the fan back to the apex.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub origin: Vec2,
    pub rotation_deg: f32,
    pub vertices: Vec<Vec2>,
    pub color: Color,
}

impl PolygonCmd {
    #[inline]
    pub fn new(origin: Vec2, rotation_deg: f32, vertices: Vec<Vec2>, color: Color) -> Self {
        Self { origin, rotation_deg, vertices, color }
    }
}

impl DrawList {
    /// Records a solid fan polygon.
    #[inline]
    pub fn push_polygon(
        &mut self,
        z: ZIndex,
        origin: Vec2,
        rotation_deg: f32,
        vertices: Vec<Vec2>,
        color: Color,
    ) {
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(origin, rotation_deg, vertices, color)));
    }
}
