use chrono::{DateTime, Duration, Utc};

use super::InvalidSetting;

pub const DEFAULT_INTERVAL_MINUTES: u32 = 60;

/// Self-renewing reminder schedule. `next_fire` is set exactly while the
/// reminders are enabled, and any interval or enablement change discards
/// the pending fire and recomputes from the moment of the change.
#[derive(Debug, Clone)]
pub struct HydrationReminder {
    interval_minutes: u32,
    enabled: bool,
    next_fire: Option<DateTime<Utc>>,
}

impl Default for HydrationReminder {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MINUTES).expect("default interval is positive")
    }
}

impl HydrationReminder {
    pub fn new(interval_minutes: u32) -> Result<Self, InvalidSetting> {
        if interval_minutes == 0 {
            return Err(InvalidSetting::new("reminder interval"));
        }
        Ok(Self {
            interval_minutes,
            enabled: false,
            next_fire: None,
        })
    }

    /// Restarts the countdown from `now` with the new length; the time
    /// already waited on the old interval is discarded, never prorated.
    pub fn set_interval(&mut self, minutes: u32, now: DateTime<Utc>) -> Result<(), InvalidSetting> {
        if minutes == 0 {
            return Err(InvalidSetting::new("reminder interval"));
        }
        self.interval_minutes = minutes;
        self.reschedule(now);
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool, now: DateTime<Utc>) {
        self.enabled = enabled;
        self.reschedule(now);
    }

    /// Called when the scheduled moment elapses; the schedule renews
    /// itself from `now`.
    pub fn fire(&mut self, now: DateTime<Utc>) {
        self.reschedule(now);
    }

    fn reschedule(&mut self, now: DateTime<Utc>) {
        self.next_fire = self
            .enabled
            .then(|| now + Duration::minutes(i64::from(self.interval_minutes)));
    }

    pub fn next_fire(&self) -> Option<DateTime<Utc>> {
        self.next_fire
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, hour, minute, 0).unwrap()
    }

    #[test]
    fn new_rejects_zero_interval() {
        assert!(HydrationReminder::new(0).is_err());
    }

    #[test]
    fn disabled_reminder_has_no_next_fire() {
        let reminder = HydrationReminder::default();

        assert!(!reminder.is_enabled());
        assert!(reminder.next_fire().is_none());
    }

    #[test]
    fn enabling_schedules_one_interval_ahead() {
        let mut reminder = HydrationReminder::new(30).unwrap();

        reminder.set_enabled(true, at(9, 0));

        assert_eq!(reminder.next_fire(), Some(at(9, 30)));
    }

    #[test]
    fn disabling_clears_the_pending_fire() {
        let mut reminder = HydrationReminder::new(30).unwrap();
        reminder.set_enabled(true, at(9, 0));

        reminder.set_enabled(false, at(9, 10));

        assert!(reminder.next_fire().is_none());
    }

    #[test]
    fn interval_change_restarts_from_the_change_time() {
        let mut reminder = HydrationReminder::new(30).unwrap();
        reminder.set_enabled(true, at(9, 0));

        reminder.set_interval(10, at(9, 5)).unwrap();

        // Counted from the change, not from the original enable.
        assert_eq!(reminder.next_fire(), Some(at(9, 15)));
    }

    #[test]
    fn interval_change_rejects_zero_and_keeps_schedule() {
        let mut reminder = HydrationReminder::new(30).unwrap();
        reminder.set_enabled(true, at(9, 0));

        assert!(reminder.set_interval(0, at(9, 5)).is_err());

        assert_eq!(reminder.interval_minutes(), 30);
        assert_eq!(reminder.next_fire(), Some(at(9, 30)));
    }

    #[test]
    fn firing_renews_the_schedule() {
        let mut reminder = HydrationReminder::new(60).unwrap();
        reminder.set_enabled(true, at(9, 0));

        reminder.fire(at(10, 0));

        assert_eq!(reminder.next_fire(), Some(at(11, 0)));
    }

    #[test]
    fn interval_change_while_disabled_stays_unscheduled() {
        let mut reminder = HydrationReminder::new(30).unwrap();

        reminder.set_interval(45, at(9, 0)).unwrap();

        assert_eq!(reminder.interval_minutes(), 45);
        assert!(reminder.next_fire().is_none());
    }
}
