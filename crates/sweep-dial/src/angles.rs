//! Hour/minute to dial-angle resolution.
//!
//! The face draws one filled sector between the hour and minute positions of
//! a 12-hour dial mapped onto 360°. Which hand anchors the sector — and the
//! direction the sector sweeps — alternates with the parity of the hour.
//! That alternation is a deliberate trait of this face's visual style and is
//! reproduced here exactly; see [`resolve`].

/// Degrees the hour position advances per hour on a 12-hour face.
pub const DEGREES_PER_HOUR: i32 = 30;

/// Degrees the minute position advances per minute.
pub const DEGREES_PER_MINUTE: i32 = 6;

/// Display offset rotating the dial so angle 0 points at 12 o'clock rather
/// than the 3 o'clock origin of standard trigonometric convention.
pub const TWELVE_OCLOCK_OFFSET_DEG: i32 = -90;

/// Wall-clock reading, read fresh on every tick and passed by value.
///
/// `hour24` must be in `0..=23` and `minute` in `0..=59`. A valid wall-clock
/// source cannot produce anything else; out-of-range values are a caller bug
/// and only checked by debug assertions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockTime {
    pub hour24: u32,
    pub minute: u32,
}

/// Sector placement for one tick: the leading edge and the angular width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DialAngles {
    /// Leading-edge angle in degrees, normalized to `[0, 360)`.
    /// Already includes [`TWELVE_OCLOCK_OFFSET_DEG`].
    pub rotation_deg: i32,

    /// Angular width of the sector in degrees, in `[0, 360]`.
    pub span_deg: i32,
}

/// Resolves a wall-clock reading into the sector's rotation and span.
///
/// The case split below is four-way on the hour's parity and the relative
/// order of the two hand angles. On even hours the sector is swept between
/// the hands directly; on odd hours it is swept the long way around through
/// the 0°/360° wraparound. The handedness flip every hour is intentional and
/// must not be "simplified" into an unconditional formula — doing so changes
/// the rendered face.
///
/// Pure and deterministic; identical inputs always produce identical output.
pub fn resolve(time: ClockTime) -> DialAngles {
    debug_assert!(time.hour24 < 24, "hour24 out of range: {}", time.hour24);
    debug_assert!(time.minute < 60, "minute out of range: {}", time.minute);

    let hour_angle = (DEGREES_PER_HOUR * time.hour24 as i32) % 360;
    let minute_angle = DEGREES_PER_MINUTE * time.minute as i32;

    let even_hour = time.hour24 % 2 == 0;

    let (rotation, span) = if even_hour {
        if minute_angle >= hour_angle {
            (hour_angle, minute_angle - hour_angle)
        } else {
            (minute_angle, hour_angle - minute_angle)
        }
    } else if minute_angle >= hour_angle {
        (minute_angle, 360 + hour_angle - minute_angle)
    } else {
        (hour_angle, 360 - hour_angle + minute_angle)
    };

    DialAngles {
        rotation_deg: (rotation + TWELVE_OCLOCK_OFFSET_DEG).rem_euclid(360),
        span_deg: span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour24: u32, minute: u32) -> DialAngles {
        resolve(ClockTime { hour24, minute })
    }

    // ── output ranges ─────────────────────────────────────────────────────

    #[test]
    fn rotation_and_span_in_range_for_all_valid_times() {
        for hour24 in 0..24 {
            for minute in 0..60 {
                let a = at(hour24, minute);
                assert!(
                    (0..360).contains(&a.rotation_deg),
                    "rotation {} out of range at {hour24:02}:{minute:02}",
                    a.rotation_deg
                );
                assert!(
                    (0..=360).contains(&a.span_deg),
                    "span {} out of range at {hour24:02}:{minute:02}",
                    a.span_deg
                );
            }
        }
    }

    // ── continuity ────────────────────────────────────────────────────────

    #[test]
    fn span_moves_six_degrees_per_minute_within_an_hour() {
        for hour24 in 0..24 {
            for minute in 0..59 {
                let delta = at(hour24, minute + 1).span_deg - at(hour24, minute).span_deg;
                assert_eq!(
                    delta.abs(),
                    6,
                    "discontinuous span at {hour24:02}:{minute:02} -> :{:02}",
                    minute + 1
                );
            }
        }
    }

    #[test]
    fn rotation_constant_between_case_boundaries() {
        // Within one branch of the case split the leading edge is pinned to
        // one hand; only the span changes. Sample hour 4 (even, hour angle
        // 120): minutes 0..19 anchor on the minute hand, 20..59 on the hour.
        for minute in 21..59 {
            assert_eq!(at(4, minute).rotation_deg, at(4, 20).rotation_deg);
        }
    }

    // ── concrete scenarios ────────────────────────────────────────────────

    #[test]
    fn six_thirty_is_a_degenerate_sector() {
        // Hour angle 180, minute angle 180, even hour: rotation 180, span 0,
        // then the twelve-o'clock offset brings rotation to 90.
        assert_eq!(at(6, 30), DialAngles { rotation_deg: 90, span_deg: 0 });
    }

    #[test]
    fn one_forty_five_sweeps_through_the_wraparound() {
        // Hour angle 30, minute angle 270, odd hour, minute leading:
        // rotation 270, span 360 + 30 - 270 = 120; offset gives 180.
        assert_eq!(at(1, 45), DialAngles { rotation_deg: 180, span_deg: 120 });
    }

    #[test]
    fn three_oclock_takes_the_odd_hour_branch() {
        // Hour angle 90, minute angle 0, odd hour, hour leading:
        // rotation 90, span 360 - 90 = 270; offset gives 0.
        assert_eq!(at(3, 0), DialAngles { rotation_deg: 0, span_deg: 270 });
    }

    #[test]
    fn full_span_is_reachable() {
        // 23:55 — hour angle 330, minute angle 330, odd hour, minute
        // leading: span = 360 + 330 - 330 = 360.
        assert_eq!(at(23, 55).span_deg, 360);
    }

    #[test]
    fn afternoon_hours_alias_onto_the_morning_dial() {
        // 15:00 lands on the same hour position as 03:00, and shares its
        // parity, so the resolved sector is identical.
        assert_eq!(at(15, 0), at(3, 0));
        assert_eq!(at(18, 30), at(6, 30));
    }

    // ── hour rollover ─────────────────────────────────────────────────────

    #[test]
    fn rollover_flips_handedness() {
        // 02:59 (even): minute angle 354 leads hour angle 60 -> span 294.
        // 03:00 (odd): the sector flips to the wraparound sweep -> span 270.
        assert_eq!(at(2, 59).span_deg, 294);
        assert_eq!(at(3, 0).span_deg, 270);

        // 01:59 (odd): minute angle 354, hour angle 30 -> span 36.
        // 02:00 (even): minute angle 0 trails hour angle 60 -> span 60.
        assert_eq!(at(1, 59).span_deg, 36);
        assert_eq!(at(2, 0).span_deg, 60);
    }

    #[test]
    fn midnight_is_degenerate() {
        // Both hands at 12: rotation 0 + offset, span 0.
        assert_eq!(at(0, 0), DialAngles { rotation_deg: 270, span_deg: 0 });
    }
}
