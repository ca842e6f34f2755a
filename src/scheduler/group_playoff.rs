//! Group phase feeding a knockout playoff.
//!
//! Participants are dealt into groups like cards, so seeds spread evenly across groups.
//! Each group plays its own round-robin; the playoff bracket is seeded with rank
//! placeholders that stay unbound until the group phase completes.

use crate::{
    error::schedule::ScheduleError,
    model::draw::{Group, GroupSchedule, PlayoffBracket, RankPlaceholder, Schedule},
    scheduler::{grid, knockout::generate_knockout, round_robin::generate_round_robin},
};

/// Number of finishers advancing out of a group unless overridden.
pub const DEFAULT_PROCEEDERS: usize = 2;

/// Deals `participant_count` participants into `group_count` groups.
///
/// Participant `i` (0-based) goes to group `i % group_count`, so with 8 participants
/// and 2 groups the groups hold `{1, 3, 5, 7}` and `{2, 4, 6, 8}`. Every group
/// advances [`DEFAULT_PROCEEDERS`] finishers, capped at the group size.
///
/// # Arguments
/// - `participant_count` - Number of participants, at least 2
/// - `group_count` - Number of groups, `1..=participant_count`
///
/// # Returns
/// - `Ok(Vec<Group>)` - Groups titled "Group A", "Group B", ...
/// - `Err(ScheduleError::TooFewParticipants)` - Fewer than 2 participants
/// - `Err(ScheduleError::GroupCountOutOfRange)` - Zero groups, or more groups than participants
/// - `Err(ScheduleError::DegenerateGroup)` - A group would hold a single participant
pub fn assign_groups(
    participant_count: usize,
    group_count: usize,
) -> Result<Vec<Group>, ScheduleError> {
    if participant_count < 2 {
        return Err(ScheduleError::TooFewParticipants(participant_count));
    }
    if group_count == 0 || group_count > participant_count {
        return Err(ScheduleError::GroupCountOutOfRange {
            group_count,
            participant_count,
        });
    }

    let mut groups: Vec<Group> = (0..group_count)
        .map(|id| Group {
            id,
            title: group_title(id),
            participants: Vec::new(),
            number_of_proceeders: 0,
        })
        .collect();

    for index in 0..participant_count {
        groups[index % group_count]
            .participants
            .push(index as i32 + 1);
    }

    for group in &mut groups {
        // Sizes differ by at most one, so the last group is the smallest.
        if group.size() < 2 {
            return Err(ScheduleError::DegenerateGroup {
                title: group.title.clone(),
                size: group.size(),
            });
        }
        group.number_of_proceeders = DEFAULT_PROCEEDERS.min(group.size());
    }

    Ok(groups)
}

/// Runs an independent round-robin in every group.
///
/// The generic `1..=size` indices of each group's schedule are translated back to the
/// group's own participant indices; byes stay `0`.
pub fn generate_group_round_robin(
    groups: &[Group],
    rounds: usize,
) -> Result<Vec<GroupSchedule>, ScheduleError> {
    groups
        .iter()
        .map(|group| {
            if group.size() < 2 {
                return Err(ScheduleError::DegenerateGroup {
                    title: group.title.clone(),
                    size: group.size(),
                });
            }

            let generic = generate_round_robin(group.size(), rounds)?;
            Ok(GroupSchedule {
                group_id: group.id,
                schedule: Schedule {
                    table1: grid::translate(&generic.table1, &group.participants),
                    table2: grid::translate(&generic.table2, &group.participants),
                },
            })
        })
        .collect()
}

/// Lists the playoff entries of every group, rank-major.
///
/// All group winners come first in group order, then all runners-up, and so on. Group
/// winners therefore take the top seeds, and two finishers of one group start in
/// different halves of the bracket whenever the bracket is large enough.
pub fn proceeder_slots(groups: &[Group]) -> Vec<RankPlaceholder> {
    let deepest = groups
        .iter()
        .map(|group| group.number_of_proceeders)
        .max()
        .unwrap_or(0);

    (1..=deepest)
        .flat_map(|rank| {
            groups
                .iter()
                .filter(move |group| group.number_of_proceeders >= rank)
                .map(move |group| RankPlaceholder {
                    rank,
                    group_id: group.id,
                })
        })
        .collect()
}

/// Builds the knockout bracket played by the group proceeders.
///
/// # Returns
/// - `Ok(PlayoffBracket)` - Bracket whose index `i` stands for `slots[i - 1]`
/// - `Err(ScheduleError::NotEnoughProceeders)` - Fewer than 2 proceeders in total
pub fn generate_playoff(groups: &[Group]) -> Result<PlayoffBracket, ScheduleError> {
    let slots = proceeder_slots(groups);
    if slots.len() < 2 {
        return Err(ScheduleError::NotEnoughProceeders(slots.len()));
    }

    let schedule = generate_knockout(slots.len())?;
    Ok(PlayoffBracket { slots, schedule })
}

/// "Group A" through "Group Z", numbered past that.
fn group_title(id: usize) -> String {
    match u8::try_from(id) {
        Ok(offset) if offset < 26 => format!("Group {}", (b'A' + offset) as char),
        _ => format!("Group {}", id + 1),
    }
}
