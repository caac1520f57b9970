/// Minutes of accumulated screen time between break suggestions.
pub const BREAK_SUGGESTION_INTERVAL_MINUTES: u64 = 60;
pub const DEFAULT_LIMIT_MINUTES: u64 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTimeEvent {
    /// Accumulated screen time crossed a whole multiple of the
    /// suggestion interval. Fired once per crossing.
    BreakSuggested { minutes: u64 },
}

/// Seconds-granularity stopwatch for screen usage. The daily limit is a
/// display threshold only; exceeding it never stops the tracking.
#[derive(Debug, Clone)]
pub struct ScreenTimeTracker {
    elapsed_seconds: u64,
    limit_minutes: u64,
    tracking: bool,
}

impl Default for ScreenTimeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT_MINUTES)
    }
}

impl ScreenTimeTracker {
    pub fn new(limit_minutes: u64) -> Self {
        Self {
            elapsed_seconds: 0,
            limit_minutes,
            tracking: false,
        }
    }

    /// Returns whether the call changed anything; starting an already
    /// tracking stopwatch is a no-op.
    pub fn start(&mut self) -> bool {
        let changed = !self.tracking;
        self.tracking = true;
        changed
    }

    pub fn pause(&mut self) -> bool {
        let changed = self.tracking;
        self.tracking = false;
        changed
    }

    pub fn set_limit(&mut self, minutes: u64) {
        self.limit_minutes = minutes;
    }

    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.tracking = false;
    }

    /// Advances the stopwatch by one second while tracking.
    pub fn tick(&mut self) -> Option<ScreenTimeEvent> {
        if !self.tracking {
            return None;
        }

        self.elapsed_seconds += 1;

        let minutes = self.minutes();
        let crossed_minute = self.elapsed_seconds % 60 == 0;
        if minutes > 0 && crossed_minute && minutes % BREAK_SUGGESTION_INTERVAL_MINUTES == 0 {
            return Some(ScreenTimeEvent::BreakSuggested { minutes });
        }

        None
    }

    pub fn minutes(&self) -> u64 {
        self.elapsed_seconds / 60
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn limit_minutes(&self) -> u64 {
        self.limit_minutes
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn progress_ratio(&self) -> f64 {
        progress_ratio(self.minutes(), self.limit_minutes)
    }
}

/// Fraction of the daily limit already used, capped at 1. A zero limit
/// reads as over-limit.
pub fn progress_ratio(minutes: u64, limit_minutes: u64) -> f64 {
    if limit_minutes == 0 {
        return 1.0;
    }
    (minutes as f64 / limit_minutes as f64).min(1.0)
}

/// Formats accumulated seconds as HH:MM:SS for the session stopwatch.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_only_advances_while_tracking() {
        let mut tracker = ScreenTimeTracker::default();

        tracker.tick();
        assert_eq!(tracker.elapsed_seconds(), 0);

        tracker.start();
        tracker.tick();
        tracker.tick();
        assert_eq!(tracker.elapsed_seconds(), 2);

        tracker.pause();
        tracker.tick();
        assert_eq!(tracker.elapsed_seconds(), 2);
    }

    #[test]
    fn start_and_pause_report_whether_state_changed() {
        let mut tracker = ScreenTimeTracker::default();

        assert!(tracker.start());
        assert!(!tracker.start());
        assert!(tracker.pause());
        assert!(!tracker.pause());
    }

    #[test]
    fn minutes_are_the_floor_of_elapsed_seconds() {
        let mut tracker = ScreenTimeTracker::default();
        tracker.start();

        for _ in 0..119 {
            tracker.tick();
        }
        assert_eq!(tracker.minutes(), 1);

        tracker.tick();
        assert_eq!(tracker.minutes(), 2);
    }

    #[test]
    fn reset_zeroes_the_counter_and_stops_tracking() {
        let mut tracker = ScreenTimeTracker::default();
        tracker.start();
        for _ in 0..90 {
            tracker.tick();
        }

        tracker.reset();

        assert_eq!(tracker.elapsed_seconds(), 0);
        assert_eq!(tracker.minutes(), 0);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn break_suggested_exactly_once_at_the_hour() {
        let mut tracker = ScreenTimeTracker::default();
        tracker.start();

        let mut events = Vec::new();
        for tick in 1..=3600 {
            if let Some(event) = tracker.tick() {
                events.push((tick, event));
            }
        }

        assert_eq!(tracker.minutes(), 60);
        assert_eq!(
            events,
            vec![(3600, ScreenTimeEvent::BreakSuggested { minutes: 60 })]
        );
    }

    #[test]
    fn break_suggested_again_at_the_second_hour() {
        let mut tracker = ScreenTimeTracker::default();
        tracker.start();

        let mut fired = 0;
        for _ in 0..7200 {
            if tracker.tick().is_some() {
                fired += 1;
            }
        }

        assert_eq!(fired, 2);
    }

    #[test]
    fn progress_ratio_is_capped_at_one() {
        let mut tracker = ScreenTimeTracker::new(2);
        tracker.start();
        for _ in 0..60 {
            tracker.tick();
        }
        assert_eq!(tracker.progress_ratio(), 0.5);

        for _ in 0..180 {
            tracker.tick();
        }
        assert_eq!(tracker.progress_ratio(), 1.0);
    }

    #[test]
    fn zero_limit_reads_as_over_limit() {
        let tracker = ScreenTimeTracker::new(0);
        assert_eq!(tracker.progress_ratio(), 1.0);
    }

    #[test]
    fn limit_never_stops_tracking() {
        let mut tracker = ScreenTimeTracker::new(1);
        tracker.start();

        for _ in 0..120 {
            tracker.tick();
        }

        assert!(tracker.is_tracking());
        assert_eq!(tracker.minutes(), 2);
    }

    #[test]
    fn format_elapsed_pads_all_components() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3_661), "01:01:01");
        assert_eq!(format_elapsed(36_000), "10:00:00");
    }
}
