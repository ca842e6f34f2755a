//! Draw generation.
//!
//! Pure functions that turn a participant count and a format into a draw skeleton of
//! participant-index grids. Nothing here performs I/O or holds state, so draws for any
//! number of tournaments can be computed concurrently.
//!
//! - `round_robin` - circle-method pairing tables
//! - `knockout` - single-elimination brackets padded with byes
//! - `group_playoff` - interleaved groups feeding a knockout over rank placeholders
//! - `grid` - sentinels and grid helpers shared by the above

pub mod grid;
pub mod group_playoff;
pub mod knockout;
pub mod round_robin;

use serde::Deserialize;

use crate::{
    error::schedule::ScheduleError,
    model::{
        draw::{Draw, Group},
        format::TournamentFormat,
    },
};

pub use group_playoff::{
    assign_groups, generate_group_round_robin, generate_playoff, proceeder_slots,
    DEFAULT_PROCEEDERS,
};
pub use knockout::generate_knockout;
pub use round_robin::generate_round_robin;

/// Input for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleRequest {
    pub participant_count: usize,
    /// Required for `group_playoff`, optional for `round_robin`, ignored by `knockout`.
    pub group_count: Option<usize>,
    /// Round-robin repetitions, defaults to 1. Zero or negative yields empty tables.
    pub rounds: Option<i32>,
    pub format: TournamentFormat,
    /// Overrides the number of finishers advancing out of every group. Only used by
    /// `group_playoff`, where it sizes the playoff bracket.
    pub proceeders: Option<usize>,
    /// Replaces [`DEFAULT_PROCEEDERS`] when no override is given. Capped to each
    /// group's size, like the built-in default.
    #[serde(default)]
    pub default_proceeders: Option<usize>,
}

impl ScheduleRequest {
    /// Creates a request with default group count, rounds and proceeders.
    pub fn new(format: TournamentFormat, participant_count: usize) -> Self {
        Self {
            participant_count,
            group_count: None,
            rounds: None,
            format,
            proceeders: None,
            default_proceeders: None,
        }
    }
}

/// Generates a complete draw for the requested format.
///
/// `round_robin` without a group count plays one group of everyone. `knockout` ignores
/// the group count and rounds. `group_playoff` plays the group phase and builds the
/// playoff bracket over the groups' proceeders.
///
/// # Arguments
/// - `request` - Participant count, format and optional group count, rounds and proceeders
///
/// # Returns
/// - `Ok(Draw)` - Draw skeleton in participant indices `1..=participant_count`
/// - `Err(ScheduleError)` - Invalid input; nothing was generated
pub fn generate(request: ScheduleRequest) -> Result<Draw, ScheduleError> {
    let rounds = request.rounds.unwrap_or(1).max(0) as usize;

    match request.format {
        TournamentFormat::RoundRobin => {
            let group_count = request.group_count.unwrap_or(1);
            let groups = assign_groups(request.participant_count, group_count)?;
            let schedules = generate_group_round_robin(&groups, rounds)?;
            Ok(Draw::RoundRobin { groups, schedules })
        }
        TournamentFormat::Knockout => Ok(Draw::Knockout {
            participant_count: request.participant_count,
            bracket: generate_knockout(request.participant_count)?,
        }),
        TournamentFormat::GroupPlayoff => {
            let group_count = request
                .group_count
                .ok_or(ScheduleError::MissingGroupCount(request.format))?;
            let groups = assign_groups(request.participant_count, group_count)?;
            let groups = match (request.proceeders, request.default_proceeders) {
                (Some(proceeders), _) => with_proceeders(groups, proceeders)?,
                (None, Some(default)) => with_default_proceeders(groups, default),
                (None, None) => groups,
            };
            let schedules = generate_group_round_robin(&groups, rounds)?;
            let playoff = generate_playoff(&groups)?;
            Ok(Draw::GroupPlayoff {
                groups,
                schedules,
                playoff,
            })
        }
    }
}

/// An explicit override must fit every group.
fn with_proceeders(groups: Vec<Group>, proceeders: usize) -> Result<Vec<Group>, ScheduleError> {
    groups
        .into_iter()
        .map(|group| group.with_proceeders(proceeders))
        .collect()
}

fn with_default_proceeders(mut groups: Vec<Group>, default: usize) -> Vec<Group> {
    for group in &mut groups {
        group.number_of_proceeders = default.clamp(1, group.size());
    }
    groups
}
