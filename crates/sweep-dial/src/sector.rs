//! Sector tessellation: a filled pie slice approximated as a fan polygon.
//!
//! Vertices are produced in sector-local device pixels with the apex at the
//! origin and the straight edge along local angle 0. The renderer translates
//! the polygon to the dial center and rotates it by the resolved
//! `rotation_deg` before filling.

/// Vertex count of a tessellated sector: apex, straight edge, and
/// `SECTOR_RESOLUTION - 2` arc subdivision points.
pub const SECTOR_RESOLUTION: usize = 20;

/// Radius padding in pixels pushing the sector rim slightly past the
/// background disc, hiding the rasterization seam along the straight edges.
pub const EDGE_COMPENSATION: i32 = 3;

/// Sector-local vertex in device pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };
}

/// Single conversion point from dial degrees to the radians expected by the
/// trigonometric primitives. Keeping this in one place keeps the rest of the
/// geometry unit-agnostic.
#[inline]
fn degrees_to_radians(angle_deg: i32) -> f32 {
    (angle_deg as f32).to_radians()
}

/// Returns the point at `angle_deg` on the circle of radius
/// `radius + EDGE_COMPENSATION`, rounded to whole pixels.
pub fn point_on_circle(radius: i32, angle_deg: i32) -> Point {
    let r = (radius + EDGE_COMPENSATION) as f32;
    let a = degrees_to_radians(angle_deg);
    Point {
        x: (r * a.cos()).round() as i32,
        y: (r * a.sin()).round() as i32,
    }
}

/// Tessellates a sector of `span_deg` degrees into a closed fan polygon of
/// exactly `resolution` vertices.
///
/// Vertex 0 is the apex (the dial center), vertex 1 sits at local angle 0,
/// and the remaining vertices subdivide the arc in equal whole-degree steps.
/// The step is floored by integer division before scaling — the arc lands on
/// `span - span % (resolution - 2)`, reproducing the stepped look of the
/// original face rather than an exact interpolation.
///
/// The arc advances toward negative local angles; combined with the
/// renderer's rotation transform this yields the correct on-screen sweep.
///
/// A zero span collapses every arc vertex onto vertex 1; the renderer must
/// tolerate the degenerate polygon. `resolution < 3` cannot subdivide an arc
/// at all and yields an empty (no-op) polygon in every build profile.
pub fn tessellate(radius: i32, span_deg: i32, resolution: usize) -> Vec<Point> {
    debug_assert!(radius > 0, "non-positive sector radius: {radius}");
    debug_assert!(
        (0..=360).contains(&span_deg),
        "sector span out of range: {span_deg}"
    );

    if resolution < 3 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(resolution);
    points.push(Point::ORIGIN);
    points.push(point_on_circle(radius, 0));

    let arc_points = resolution as i32 - 2;
    let step = span_deg / arc_points;
    for i in 1..=arc_points {
        points.push(point_on_circle(radius, -(step * i)));
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: i32 = 35;
    const RIM: i32 = RADIUS + EDGE_COMPENSATION; // 38

    // ── structure ─────────────────────────────────────────────────────────

    #[test]
    fn vertex_count_matches_resolution() {
        for span in [0, 6, 90, 180, 354, 360] {
            assert_eq!(tessellate(RADIUS, span, SECTOR_RESOLUTION).len(), SECTOR_RESOLUTION);
        }
    }

    #[test]
    fn apex_is_origin_and_edge_is_at_angle_zero() {
        let poly = tessellate(RADIUS, 90, SECTOR_RESOLUTION);
        assert_eq!(poly[0], Point::ORIGIN);
        assert_eq!(poly[1], Point { x: RIM, y: 0 });
    }

    #[test]
    fn undersized_resolution_is_a_no_op() {
        // Anything below apex + edge + one arc point cannot enclose area;
        // such configurations yield an empty polygon rather than panicking.
        for resolution in 0..3 {
            assert!(tessellate(RADIUS, 90, resolution).is_empty());
        }
    }

    // ── degenerate and full sweeps ────────────────────────────────────────

    #[test]
    fn zero_span_collapses_onto_the_straight_edge() {
        let poly = tessellate(RADIUS, 0, SECTOR_RESOLUTION);
        for v in &poly[1..] {
            assert_eq!(*v, Point { x: RIM, y: 0 });
        }
    }

    #[test]
    fn full_span_arcs_back_to_the_straight_edge() {
        // 360 / 18 = 20 degrees per step; the final arc vertex lands on -360,
        // coinciding with vertex 1.
        let poly = tessellate(RADIUS, 360, SECTOR_RESOLUTION);
        assert_eq!(poly[SECTOR_RESOLUTION - 1], poly[1]);
    }

    #[test]
    fn nonzero_span_has_no_coincident_consecutive_vertices() {
        // Spans whose floored step is a few degrees or more; below that,
        // whole-pixel rounding on a small dial can legitimately merge
        // neighboring arc vertices.
        for span in [90, 180, 270, 354] {
            let poly = tessellate(RADIUS, span, SECTOR_RESOLUTION);
            for pair in poly.windows(2) {
                assert_ne!(pair[0], pair[1], "degenerate edge at span {span}");
            }
        }
    }

    // ── stepping semantics ────────────────────────────────────────────────

    #[test]
    fn arc_steps_are_floored_per_subdivision() {
        // span 100 with 18 arc points floors to 5 degrees per step, so the
        // arc ends at -90, not -100.
        let poly = tessellate(RADIUS, 100, SECTOR_RESOLUTION);
        assert_eq!(poly[SECTOR_RESOLUTION - 1], point_on_circle(RADIUS, -90));
    }

    #[test]
    fn quarter_sweep_ends_straight_down_in_local_frame() {
        // span 90: step 5, last arc vertex at -90 -> (0, -RIM).
        let poly = tessellate(RADIUS, 90, SECTOR_RESOLUTION);
        assert_eq!(poly[SECTOR_RESOLUTION - 1], Point { x: 0, y: -RIM });
    }

    // ── point_on_circle ───────────────────────────────────────────────────

    #[test]
    fn cardinal_points_round_exactly() {
        assert_eq!(point_on_circle(RADIUS, 0), Point { x: RIM, y: 0 });
        assert_eq!(point_on_circle(RADIUS, 90), Point { x: 0, y: RIM });
        assert_eq!(point_on_circle(RADIUS, 180), Point { x: -RIM, y: 0 });
        assert_eq!(point_on_circle(RADIUS, -90), Point { x: 0, y: -RIM });
        assert_eq!(point_on_circle(RADIUS, 360), Point { x: RIM, y: 0 });
    }

    #[test]
    fn compensation_extends_the_radius() {
        let p = point_on_circle(RADIUS, 0);
        assert_eq!(p.x, RADIUS + EDGE_COMPENSATION);
    }
}
