use thiserror::Error;

use crate::model::format::TournamentFormat;

/// Invalid input to the scheduler.
///
/// Raised synchronously before any draw is computed. None of these are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Fewer than two participants, no match can be formed.
    #[error("At least 2 participants are required to schedule matches, got {0}")]
    TooFewParticipants(usize),

    /// Group count is zero or larger than the number of participants.
    #[error("Group count must be between 1 and {participant_count}, got {group_count}")]
    GroupCountOutOfRange {
        group_count: usize,
        participant_count: usize,
    },

    /// A group would hold fewer than two participants and cannot play a round-robin.
    #[error("{title} has {size} participant(s), at least 2 are required for a round-robin phase")]
    DegenerateGroup { title: String, size: usize },

    /// A group cannot advance the requested number of finishers.
    #[error("{title} cannot advance {proceeders} of its {size} participants")]
    ProceedersOutOfRange {
        title: String,
        proceeders: usize,
        size: usize,
    },

    /// The groups together advance fewer than two finishers, no playoff can be formed.
    #[error("At least 2 proceeders are required for a playoff, got {0}")]
    NotEnoughProceeders(usize),

    /// The format requires a group count and none was given.
    #[error("Format {0} requires a group count")]
    MissingGroupCount(TournamentFormat),

    /// Unrecognized tournament format.
    #[error("Unknown tournament format '{0}'")]
    UnknownFormat(String),
}
