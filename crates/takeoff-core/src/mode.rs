use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three qualitative takeoff scenarios shown by the visualizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TakeoffMode {
    #[default]
    Slow,
    Moderate,
    Fast,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unknown takeoff mode {0:?} (expected slow, moderate or fast)")]
    InvalidMode(String),
}

impl TakeoffMode {
    /// Tab order.
    pub const ALL: [TakeoffMode; 3] = [TakeoffMode::Slow, TakeoffMode::Moderate, TakeoffMode::Fast];

    /// Stable identifier used by the tab widget and cue file names.
    pub fn id(self) -> &'static str {
        match self {
            TakeoffMode::Slow => "slow",
            TakeoffMode::Moderate => "moderate",
            TakeoffMode::Fast => "fast",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TakeoffMode::Slow => "Slow Takeoff",
            TakeoffMode::Moderate => "Moderate Takeoff",
            TakeoffMode::Fast => "Fast Takeoff",
        }
    }

    /// Audio cue name, e.g. `fast-takeoff`.
    pub fn cue_name(self) -> String {
        format!("{}-takeoff", self.id())
    }

    pub fn next(self) -> Self {
        match self {
            TakeoffMode::Slow => TakeoffMode::Moderate,
            TakeoffMode::Moderate => TakeoffMode::Fast,
            TakeoffMode::Fast => TakeoffMode::Slow,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            TakeoffMode::Slow => TakeoffMode::Fast,
            TakeoffMode::Moderate => TakeoffMode::Slow,
            TakeoffMode::Fast => TakeoffMode::Moderate,
        }
    }
}

impl fmt::Display for TakeoffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TakeoffMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(TakeoffMode::Slow),
            "moderate" => Ok(TakeoffMode::Moderate),
            "fast" => Ok(TakeoffMode::Fast),
            _ => Err(ModeError::InvalidMode(s.to_string())),
        }
    }
}
