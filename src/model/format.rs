use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::schedule::ScheduleError;

/// Tournament format, fixed once a draw is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Every participant of a group meets every other participant.
    RoundRobin,
    /// Single-elimination bracket.
    Knockout,
    /// Round-robin groups whose top finishers feed a knockout bracket.
    GroupPlayoff,
}

impl TournamentFormat {
    /// Returns the stored representation of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::Knockout => "knockout",
            Self::GroupPlayoff => "group_playoff",
        }
    }
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentFormat {
    type Err = ScheduleError;

    /// Parses a stored format string.
    ///
    /// # Returns
    /// - `Ok(TournamentFormat)` - Known format
    /// - `Err(ScheduleError::UnknownFormat)` - Any other value, including different casing
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "round_robin" => Ok(Self::RoundRobin),
            "knockout" => Ok(Self::Knockout),
            "group_playoff" => Ok(Self::GroupPlayoff),
            other => Err(ScheduleError::UnknownFormat(other.to_string())),
        }
    }
}
