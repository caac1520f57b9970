//! Sereno core library
//!
//! Contains the domain state machines for the wellbeing dashboard, the
//! configuration model and the translations. This crate has no knowledge
//! of infrastructure concerns.

pub mod config;
pub mod domain;
pub mod i18n;

pub use config::{
    Config, ConfigError, HydrationConfig, NotificationConfig, NotificationUrgency, PomodoroConfig,
    ScreenTimeConfig, WaterConfig,
};
pub use domain::{
    HydrationReminder, InvalidSetting, Notice, Phase, PomodoroEvent, PomodoroTimer,
    ScreenTimeEvent, ScreenTimeTracker, WaterCounter,
};
pub use i18n::{Language, Translator, UnsupportedLanguageError};
