//! Sereno protocol definitions for CLI-daemon communication
//!
//! This crate defines the IPC protocol between the sereno CLI and daemon.
//! All types are serializable with bincode for efficient binary
//! communication; the wire format is a 4-byte little-endian length prefix
//! followed by the bincode payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use sereno_core::Phase;

/// Requests sent from CLI to daemon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Request {
    /// Start or pause the pomodoro countdown
    PomodoroToggle,
    /// Stop the countdown and restore a fresh work phase
    PomodoroReset,
    /// Set the work/break durations in minutes (both must be positive)
    PomodoroConfigure { work_minutes: u32, break_minutes: u32 },
    /// Begin accumulating screen time
    ScreenStart,
    /// Stop accumulating screen time
    ScreenPause,
    /// Zero the screen-time stopwatch
    ScreenReset,
    /// Set the daily screen limit (display threshold only)
    ScreenSetLimit { minutes: u64 },
    /// Enable or disable the recurring hydration reminder
    HydrationSetEnabled { enabled: bool },
    /// Change the reminder interval in minutes (must be positive)
    HydrationSetInterval { minutes: u32 },
    /// Count one more glass of water
    WaterAddGlass,
    /// Zero the glass counter
    WaterReset,
    /// Set the daily glass target (must be positive)
    WaterSetTarget { glasses: u32 },
    /// Read a snapshot of every module plus the live notice
    GetDashboard,
    /// Ping the daemon to check if it's alive
    Ping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomodoroSnapshot {
    pub phase: Phase,
    pub minutes_remaining: u32,
    pub seconds_remaining: u32,
    pub running: bool,
    pub work_minutes: u32,
    pub break_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenTimeSnapshot {
    pub elapsed_seconds: u64,
    pub minutes: u64,
    pub limit_minutes: u64,
    pub tracking: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationSnapshot {
    pub interval_minutes: u32,
    pub enabled: bool,
    pub next_fire: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterSnapshot {
    pub glasses: u32,
    pub target: u32,
}

/// Responses sent from daemon to CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    /// Render-ready state of the whole dashboard
    Dashboard {
        pomodoro: PomodoroSnapshot,
        screen_time: ScreenTimeSnapshot,
        hydration: HydrationSnapshot,
        water: WaterSnapshot,
        /// Currently displayed transient notice, if any
        notice: Option<String>,
    },
    /// Generic success acknowledgment
    Ok,
    /// Error response with message
    Error { message: String },
    /// Pong response to ping
    Pong,
}
