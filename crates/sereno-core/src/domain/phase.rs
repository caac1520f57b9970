use serde::{Deserialize, Serialize};

/// The pomodoro cycle alternates between these two modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
        }
    }

    pub fn flipped(&self) -> Phase {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_alternates_between_phases() {
        assert_eq!(Phase::Work.flipped(), Phase::Break);
        assert_eq!(Phase::Break.flipped(), Phase::Work);
        assert_eq!(Phase::Work.flipped().flipped(), Phase::Work);
    }

    #[test]
    fn as_str_returns_lowercase_names() {
        assert_eq!(Phase::Work.as_str(), "work");
        assert_eq!(Phase::Break.as_str(), "break");
    }
}
