use std::time::{Duration, Instant};

use chrono::{Local, Timelike};

/// Local wall-clock reading at minute granularity.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WallTime {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute of hour, `0..=59`.
    pub minute: u32,
}

/// Source of local wall-clock readings.
///
/// Zero-sized; exists so the runtime owns an explicit clock collaborator
/// rather than reaching for `chrono` at call sites.
#[derive(Debug, Default, Copy, Clone)]
pub struct WallClock;

impl WallClock {
    /// Reads the current local time.
    ///
    /// Every redraw re-reads the clock, so repeated invocations within the
    /// same minute are idempotent from the face's point of view.
    pub fn now(&self) -> WallTime {
        let t = Local::now();
        WallTime {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

/// Returns the `Instant` of the next minute boundary.
///
/// A small floor keeps a deadline that lands exactly on (or marginally past)
/// the boundary from re-arming for "now" and spinning the event loop.
pub fn next_minute_boundary() -> Instant {
    let now = Local::now();

    // Leap seconds surface as nanosecond() >= 1e9; saturating math below
    // treats them as the last instant of the minute.
    let into_minute = Duration::from_secs(u64::from(now.second()))
        + Duration::from_nanos(u64::from(now.nanosecond()));

    let remaining = Duration::from_secs(60)
        .saturating_sub(into_minute)
        .max(Duration::from_millis(5));

    Instant::now() + remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_time_is_in_range() {
        let t = WallClock.now();
        assert!(t.hour < 24);
        assert!(t.minute < 60);
    }

    #[test]
    fn boundary_is_in_the_future_but_within_a_minute() {
        let before = Instant::now();
        let deadline = next_minute_boundary();
        assert!(deadline > before);
        assert!(deadline - before <= Duration::from_secs(61));
    }
}
