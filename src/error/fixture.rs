use thiserror::Error;

use crate::model::format::TournamentFormat;

/// Data-integrity failures found while reconstructing a persisted draw.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// A rank placeholder points at a group that is not part of the draw.
    #[error("Match {match_id} references source group {group_id} which is not part of the draw")]
    MissingSourceGroup { match_id: i32, group_id: i32 },

    /// A rank is stored without its source group, or the other way round.
    #[error("Match {match_id} has an incomplete rank placeholder")]
    IncompletePlaceholder { match_id: i32 },

    /// A match is bound to a team that does not exist.
    #[error("Match {match_id} references team {team_id} which does not exist")]
    MissingTeam { match_id: i32, team_id: i32 },

    /// A round was persisted without any match.
    #[error("Round {round_id} in group {group_id} has no matches")]
    EmptyRound { group_id: i32, round_id: i32 },

    /// The draw does not have the final-group layout its format requires.
    #[error("Format {format} expects exactly 1 {kind} group, found {found}")]
    UnexpectedGroupCount {
        format: TournamentFormat,
        kind: &'static str,
        found: usize,
    },
}
