use super::{InvalidSetting, Phase};

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroEvent {
    /// The countdown reached 00:00. The timer has already flipped to
    /// `next` and stopped; resuming takes an explicit `toggle`.
    PhaseCompleted { next: Phase },
}

/// Work/break countdown driven by one `tick` per second of wall-clock time.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    phase: Phase,
    minutes_remaining: u32,
    seconds_remaining: u32,
    running: bool,
    work_minutes: u32,
    break_minutes: u32,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES, DEFAULT_BREAK_MINUTES)
            .expect("default durations are positive")
    }
}

impl PomodoroTimer {
    pub fn new(work_minutes: u32, break_minutes: u32) -> Result<Self, InvalidSetting> {
        let mut timer = Self {
            phase: Phase::Work,
            minutes_remaining: 0,
            seconds_remaining: 0,
            running: false,
            work_minutes: 1,
            break_minutes: 1,
        };
        timer.configure(work_minutes, break_minutes)?;
        Ok(timer)
    }

    /// Updates the configured durations. While idle the remaining display
    /// of the current phase follows the edit immediately; while running
    /// the new durations apply from the next phase change.
    pub fn configure(
        &mut self,
        work_minutes: u32,
        break_minutes: u32,
    ) -> Result<(), InvalidSetting> {
        if work_minutes == 0 {
            return Err(InvalidSetting::new("work duration"));
        }
        if break_minutes == 0 {
            return Err(InvalidSetting::new("break duration"));
        }

        self.work_minutes = work_minutes;
        self.break_minutes = break_minutes;

        if !self.running {
            self.minutes_remaining = self.duration_of(self.phase);
            self.seconds_remaining = 0;
        }

        Ok(())
    }

    /// Flips the running flag and returns the new value. The countdown
    /// itself is only advanced by `tick`.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Stops the countdown and restores a fresh work phase.
    pub fn reset(&mut self) {
        self.running = false;
        self.phase = Phase::Work;
        self.minutes_remaining = self.work_minutes;
        self.seconds_remaining = 0;
    }

    /// Advances the countdown by one second. A no-op while stopped.
    pub fn tick(&mut self) -> Option<PomodoroEvent> {
        if !self.running {
            return None;
        }

        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
        } else if self.minutes_remaining > 0 {
            self.minutes_remaining -= 1;
            self.seconds_remaining = 59;
        }

        if self.minutes_remaining == 0 && self.seconds_remaining == 0 {
            self.running = false;
            self.phase = self.phase.flipped();
            self.minutes_remaining = self.duration_of(self.phase);
            self.seconds_remaining = 0;
            return Some(PomodoroEvent::PhaseCompleted { next: self.phase });
        }

        None
    }

    fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn minutes_remaining(&self) -> u32 {
        self.minutes_remaining
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }
}
