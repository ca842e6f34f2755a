//! Scheduler output.
//!
//! A draw is computed on demand and consumed once by the publish step. Participants are
//! 1-based indices; index `i` binds to the `i`-th team in the caller's seeding order, so
//! the caller must bind teams in exactly the order it passed them in.

use serde::Serialize;

use crate::{
    error::schedule::ScheduleError,
    model::format::TournamentFormat,
    scheduler::grid::{self, Grid, BYE},
};

/// Two parallel grids; `table1[r][c]` meets `table2[r][c]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub table1: Grid,
    pub table2: Grid,
}

impl Schedule {
    /// Number of rows (matchdays or knockout rounds).
    pub fn rows(&self) -> usize {
        self.table1.len()
    }

    /// Iterates over every cell of the schedule in row-major order.
    pub fn pairings(&self) -> impl Iterator<Item = Pairing> + '_ {
        grid::pairings(&self.table1, &self.table2)
    }
}

/// One cell of a [`Schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub row: usize,
    pub column: usize,
    pub home: i32,
    pub away: i32,
}

impl Pairing {
    /// Whether one side of the pairing is a bye.
    pub fn is_bye(&self) -> bool {
        self.home == BYE || self.away == BYE
    }

    /// Whether both sides are known participants.
    pub fn is_resolved(&self) -> bool {
        self.home > 0 && self.away > 0
    }
}

/// A set of participants playing a round-robin phase together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// 0-based position of the group in the draw.
    pub id: usize,
    pub title: String,
    pub participants: Vec<i32>,
    /// How many top finishers advance out of the group.
    pub number_of_proceeders: usize,
}

impl Group {
    pub fn size(&self) -> usize {
        self.participants.len()
    }

    /// Overrides how many finishers advance out of the group.
    ///
    /// # Arguments
    /// - `proceeders` - Number of advancing finishers, `1..=size`
    ///
    /// # Returns
    /// - `Ok(Group)` - Group with the new proceeder count
    /// - `Err(ScheduleError::ProceedersOutOfRange)` - Zero, or more than the group holds
    pub fn with_proceeders(mut self, proceeders: usize) -> Result<Self, ScheduleError> {
        if proceeders == 0 || proceeders > self.size() {
            return Err(ScheduleError::ProceedersOutOfRange {
                title: self.title,
                proceeders,
                size: self.participants.len(),
            });
        }

        self.number_of_proceeders = proceeders;
        Ok(self)
    }
}

/// Round-robin schedule of one group, expressed in the group's participant indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSchedule {
    pub group_id: usize,
    pub schedule: Schedule,
}

/// "The team finishing `rank`-th in group `group_id`", unresolved until that group completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankPlaceholder {
    pub rank: usize,
    pub group_id: usize,
}

/// Knockout bracket over group proceeders.
///
/// Bracket index `i` in `schedule` stands for `slots[i - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayoffBracket {
    pub slots: Vec<RankPlaceholder>,
    pub schedule: Schedule,
}

impl PlayoffBracket {
    /// Resolves a bracket index to its rank placeholder. Sentinels resolve to `None`.
    pub fn slot(&self, index: i32) -> Option<&RankPlaceholder> {
        if index < 1 {
            return None;
        }
        self.slots.get(index as usize - 1)
    }
}

/// A complete draw skeleton for one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum Draw {
    RoundRobin {
        groups: Vec<Group>,
        schedules: Vec<GroupSchedule>,
    },
    Knockout {
        participant_count: usize,
        bracket: Schedule,
    },
    GroupPlayoff {
        groups: Vec<Group>,
        schedules: Vec<GroupSchedule>,
        playoff: PlayoffBracket,
    },
}

impl Draw {
    pub fn format(&self) -> TournamentFormat {
        match self {
            Self::RoundRobin { .. } => TournamentFormat::RoundRobin,
            Self::Knockout { .. } => TournamentFormat::Knockout,
            Self::GroupPlayoff { .. } => TournamentFormat::GroupPlayoff,
        }
    }

    /// Number of participant indices the draw expects to be bound.
    pub fn participant_count(&self) -> usize {
        match self {
            Self::RoundRobin { groups, .. } | Self::GroupPlayoff { groups, .. } => {
                groups.iter().map(Group::size).sum()
            }
            Self::Knockout {
                participant_count, ..
            } => *participant_count,
        }
    }
}
