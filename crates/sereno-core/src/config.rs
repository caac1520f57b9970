use crate::domain::{hydration, pomodoro, screen_time, water};
use crate::i18n::Language;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub pomodoro: PomodoroConfig,
    pub screen_time: ScreenTimeConfig,
    pub hydration: HydrationConfig,
    pub water: WaterConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    pub language: Language,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PomodoroConfig {
    pub work_minutes: u32,
    pub break_minutes: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScreenTimeConfig {
    pub limit_minutes: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HydrationConfig {
    pub interval_minutes: u32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    pub target_glasses: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub desktop_enabled: bool,
    pub sound_enabled: bool,
    pub urgency: NotificationUrgency,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationUrgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_minutes: pomodoro::DEFAULT_WORK_MINUTES,
            break_minutes: pomodoro::DEFAULT_BREAK_MINUTES,
        }
    }
}

impl Default for ScreenTimeConfig {
    fn default() -> Self {
        Self {
            limit_minutes: screen_time::DEFAULT_LIMIT_MINUTES,
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            interval_minutes: hydration::DEFAULT_INTERVAL_MINUTES,
            enabled: false,
        }
    }
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            target_glasses: water::DEFAULT_TARGET_GLASSES,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            desktop_enabled: true,
            sound_enabled: true,
            urgency: NotificationUrgency::Normal,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config.sanitized())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sereno")
            .join("config.toml")
    }

    /// Durations, intervals and targets must be positive; a zero in the
    /// file falls back to the field's default. The screen-time limit is
    /// display-only and may legitimately be zero.
    pub fn sanitized(mut self) -> Self {
        if self.pomodoro.work_minutes == 0 {
            self.pomodoro.work_minutes = pomodoro::DEFAULT_WORK_MINUTES;
        }
        if self.pomodoro.break_minutes == 0 {
            self.pomodoro.break_minutes = pomodoro::DEFAULT_BREAK_MINUTES;
        }
        if self.hydration.interval_minutes == 0 {
            self.hydration.interval_minutes = hydration::DEFAULT_INTERVAL_MINUTES;
        }
        if self.water.target_glasses == 0 {
            self.water.target_glasses = water::DEFAULT_TARGET_GLASSES;
        }
        self
    }
}
