//! Display tree produced by the reconstructor.
//!
//! Serialized as-is for callers. `Opponent` is untagged so a slot renders either as a
//! team object, a placeholder object or `null`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::format::TournamentFormat;

/// Reconstruction result for one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FixtureView {
    /// No draw has been published yet.
    New,
    Generated(FixtureTree),
}

/// The reshaped draw.
///
/// `playoff` holds the knockout phase final-round-first; `groups` holds round-robin
/// groups in stored order. A `round_robin` draw has no playoff, a `knockout` draw has no
/// groups, and a `group_playoff` draw presents both phases side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureTree {
    pub format: TournamentFormat,
    pub playoff: Option<GroupView>,
    pub groups: Vec<GroupView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub id: i32,
    pub title: String,
    pub number_of_proceeders: i32,
    pub is_final: bool,
    pub rounds: Vec<RoundView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub id: i32,
    pub title: String,
    pub position: i32,
    pub matches: Vec<MatchView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    pub id: i32,
    pub position: i32,
    pub team1: Opponent,
    pub team2: Opponent,
    pub next_match_id: Option<i32>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// What a match side shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Opponent {
    Team {
        id: i32,
        name: String,
        image: Option<String>,
    },
    Placeholder(Placeholder),
    /// Bye, or the winner of a match not yet played.
    Pending,
}

/// Stand-in for a team that is not known until its source group completes.
///
/// Carries empty `user1`/`user2` so it has the shape of a team entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub user1: Option<i32>,
    pub user2: Option<i32>,
    pub name: String,
}

impl Placeholder {
    /// "Winner {rank} of {title}".
    pub fn winner_of(rank: i32, group_title: &str) -> Self {
        Self {
            user1: None,
            user2: None,
            name: format!("Winner {} of {}", rank, group_title),
        }
    }
}
