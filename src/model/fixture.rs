//! Domain models for persisted draws.
//!
//! A draw is stored as groups, each holding ordered rounds of ordered matches. These
//! models are built from entity rows at the repository boundary; team references are
//! resolved while converting, rank placeholders are kept as-is for the reconstructor.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::{error::fixture::FixtureError, model::tournament::Team};

/// Entity rows of one group as loaded by the repository.
///
/// Rounds are ordered by position, matches within a round by position. `teams` holds
/// every team any of the matches is bound to.
#[derive(Debug, Clone)]
pub struct GroupWithRounds {
    pub group: entity::fixture_group::Model,
    pub rounds: Vec<(entity::fixture_round::Model, Vec<entity::fixture_match::Model>)>,
    pub teams: HashMap<i32, entity::team::Model>,
}

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSlot {
    /// Bound to a concrete team.
    Team(Team),
    /// The team finishing `rank`-th in `source_group_id`, unknown until that group completes.
    Rank { rank: i32, source_group_id: i32 },
    /// Neither bound nor placeholder: a bye, or the winner of a match not yet played.
    Open,
}

impl MatchSlot {
    /// Resolves the stored columns of one match side.
    ///
    /// A bound team takes precedence over a rank placeholder stored alongside it.
    ///
    /// # Arguments
    /// - `match_id` - ID of the match, for error reporting
    /// - `team_id` - Bound team, if any
    /// - `rank` - Placeholder rank, if any
    /// - `source_group_id` - Placeholder source group, if any
    /// - `teams` - Loaded teams keyed by ID
    ///
    /// # Returns
    /// - `Ok(MatchSlot)` - Resolved slot
    /// - `Err(FixtureError::MissingTeam)` - `team_id` is not among the loaded teams
    /// - `Err(FixtureError::IncompletePlaceholder)` - Only one of rank and source group is set
    pub fn from_columns(
        match_id: i32,
        team_id: Option<i32>,
        rank: Option<i32>,
        source_group_id: Option<i32>,
        teams: &HashMap<i32, entity::team::Model>,
    ) -> Result<Self, FixtureError> {
        if let Some(team_id) = team_id {
            return teams
                .get(&team_id)
                .map(|team| Self::Team(Team::from_entity(team.clone())))
                .ok_or(FixtureError::MissingTeam { match_id, team_id });
        }

        match (rank, source_group_id) {
            (Some(rank), Some(source_group_id)) => Ok(Self::Rank {
                rank,
                source_group_id,
            }),
            (None, None) => Ok(Self::Open),
            _ => Err(FixtureError::IncompletePlaceholder { match_id }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureMatch {
    pub id: i32,
    pub round_id: i32,
    pub position: i32,
    pub team1: MatchSlot,
    pub team2: MatchSlot,
    pub next_match_id: Option<i32>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl FixtureMatch {
    /// Converts a match row, resolving both sides against the loaded teams.
    pub fn from_entity(
        entity: entity::fixture_match::Model,
        teams: &HashMap<i32, entity::team::Model>,
    ) -> Result<Self, FixtureError> {
        let team1 = MatchSlot::from_columns(
            entity.id,
            entity.team1_id,
            entity.team1_rank,
            entity.team1_source_group_id,
            teams,
        )?;
        let team2 = MatchSlot::from_columns(
            entity.id,
            entity.team2_id,
            entity.team2_rank,
            entity.team2_source_group_id,
            teams,
        )?;

        Ok(Self {
            id: entity.id,
            round_id: entity.round_id,
            position: entity.position,
            team1,
            team2,
            next_match_id: entity.next_match_id,
            venue: entity.venue,
            referee: entity.referee,
            start_time: entity.start_time,
            end_time: entity.end_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRound {
    pub id: i32,
    pub group_id: i32,
    /// Earliest round first.
    pub position: i32,
    pub title: String,
    pub matches: Vec<FixtureMatch>,
}

/// A persisted group with its rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureGroup {
    pub id: i32,
    pub tournament_id: i32,
    pub title: String,
    pub position: i32,
    pub number_of_proceeders: i32,
    /// Set on the knockout-phase group.
    pub is_final: bool,
    pub rounds: Vec<FixtureRound>,
}

impl FixtureGroup {
    /// Converts a group without loading its rounds.
    pub fn from_entity(entity: entity::fixture_group::Model) -> Self {
        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            title: entity.title,
            position: entity.position,
            number_of_proceeders: entity.number_of_proceeders,
            is_final: entity.is_final,
            rounds: Vec::new(),
        }
    }

    /// Converts a group together with its rounds and matches.
    ///
    /// # Arguments
    /// - `loaded` - Group, ordered rounds with their ordered matches, and referenced teams
    ///
    /// # Returns
    /// - `Ok(FixtureGroup)` - The converted group tree
    /// - `Err(FixtureError)` - A match references a missing team or holds half a placeholder
    pub fn from_with_rounds(loaded: GroupWithRounds) -> Result<Self, FixtureError> {
        let GroupWithRounds {
            group,
            rounds,
            teams,
        } = loaded;

        let rounds = rounds
            .into_iter()
            .map(|(round, matches)| {
                Ok(FixtureRound {
                    id: round.id,
                    group_id: round.group_id,
                    position: round.position,
                    title: round.title,
                    matches: matches
                        .into_iter()
                        .map(|m| FixtureMatch::from_entity(m, &teams))
                        .collect::<Result<Vec<_>, _>>()?,
                })
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        Ok(Self {
            rounds,
            ..Self::from_entity(group)
        })
    }
}
