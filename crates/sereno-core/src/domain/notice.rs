use chrono::{DateTime, Duration, Utc};

/// A transient dashboard message. At most one is live at a time; a newer
/// notice simply replaces an older unexpired one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    pub fn lasting(
        text: impl Into<String>,
        duration: std::time::Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            text: text.into(),
            expires_at: now + Duration::milliseconds(duration.as_millis() as i64),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
