//! The pie-segment face.
//!
//! Every redraw rebuilds the whole scene from the current wall-clock minute:
//! a white dial disc, then a black sector swept between the hour and minute
//! positions on top of it. The sector's handedness alternates with the parity
//! of the hour; that resolution lives in `sweep-dial`, this module only feeds
//! it the clock and paints the result.

use sweep_dial::{resolve, tessellate, ClockTime, SECTOR_RESOLUTION};

use sweep_engine::coords::{Vec2, Viewport};
use sweep_engine::core::{App, AppControl, FrameCtx};
use sweep_engine::paint::Color;
use sweep_engine::render::shapes::{DiscRenderer, PolygonRenderer};
use sweep_engine::scene::{DrawList, ZIndex};
use sweep_engine::time::WallTime;

/// Logical window size, matching the 144x168 display the face was drawn for.
pub const FACE_WIDTH: f64 = 144.0;
pub const FACE_HEIGHT: f64 = 168.0;

/// Radius of the dial disc in logical pixels. The sector polygon extends
/// slightly past this (see `sweep_dial::EDGE_COMPENSATION`) so its straight
/// edges never expose a seam of the disc underneath.
const DIAL_RADIUS: i32 = 35;

const DIAL_Z: ZIndex = ZIndex::new(0);
const SECTOR_Z: ZIndex = ZIndex::new(1);

fn clock_time(t: WallTime) -> ClockTime {
    ClockTime {
        hour24: t.hour,
        minute: t.minute,
    }
}

pub struct FaceApp {
    draw_list: DrawList,
    discs: DiscRenderer,
    polygons: PolygonRenderer,
}

impl FaceApp {
    pub fn new() -> Self {
        Self {
            draw_list: DrawList::new(),
            discs: DiscRenderer::new(),
            polygons: PolygonRenderer::new(),
        }
    }

    fn record_scene(&mut self, time: ClockTime, center: Vec2) {
        let angles = resolve(time);
        log::trace!(
            "{:02}:{:02} -> rotation {} span {}",
            time.hour24,
            time.minute,
            angles.rotation_deg,
            angles.span_deg
        );

        self.draw_list.clear();
        self.draw_list
            .push_disc(DIAL_Z, center, DIAL_RADIUS as f32, Color::WHITE);

        let sector = tessellate(DIAL_RADIUS, angles.span_deg, SECTOR_RESOLUTION);
        let vertices: Vec<Vec2> = sector
            .iter()
            .map(|p| Vec2::new(p.x as f32, p.y as f32))
            .collect();

        self.draw_list.push_polygon(
            SECTOR_Z,
            center,
            angles.rotation_deg as f32,
            vertices,
            Color::BLACK,
        );
    }
}

impl App for FaceApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let center = Viewport::new(w, h).center();

        self.record_scene(clock_time(ctx.time), center);

        let draw_list = &mut self.draw_list;
        let discs = &mut self.discs;
        let polygons = &mut self.polygons;

        ctx.render(Color::BLACK, |rctx, target| {
            // Cross-shape ordering is pass order: the disc pass runs first,
            // the sector paints on top of it.
            discs.render(rctx, target, draw_list);
            polygons.render(rctx, target, draw_list);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_holds_one_disc_under_one_sector() {
        use sweep_engine::scene::DrawCmd;

        let mut app = FaceApp::new();
        app.record_scene(ClockTime { hour24: 10, minute: 10 }, Vec2::new(72.0, 84.0));

        let items = app.draw_list.items();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0].cmd, DrawCmd::Disc(_)));
        assert!(matches!(items[1].cmd, DrawCmd::Polygon(_)));
        assert!(items[0].key < items[1].key);
    }

    #[test]
    fn sector_polygon_carries_the_resolved_rotation() {
        use sweep_engine::scene::DrawCmd;

        let mut app = FaceApp::new();
        app.record_scene(ClockTime { hour24: 1, minute: 45 }, Vec2::zero());

        let DrawCmd::Polygon(cmd) = &app.draw_list.items()[1].cmd else {
            panic!("expected polygon");
        };
        assert_eq!(cmd.rotation_deg, 180.0);
        assert_eq!(cmd.vertices.len(), SECTOR_RESOLUTION);
        assert_eq!(cmd.vertices[0], Vec2::zero());
    }

    #[test]
    fn rebuilding_the_scene_replaces_rather_than_accumulates() {
        let mut app = FaceApp::new();
        app.record_scene(ClockTime { hour24: 9, minute: 0 }, Vec2::zero());
        app.record_scene(ClockTime { hour24: 9, minute: 1 }, Vec2::zero());
        assert_eq!(app.draw_list.items().len(), 2);
    }
}
