//! Rebuilds a persisted draw into its display tree.
//!
//! Reconstruction is read-only and deterministic: the same persisted groups always give
//! the same tree. Rank placeholders are rendered as "Winner {rank} of {group}", bound
//! teams pass through, and the tree is reshaped by format. Any inconsistency fails the
//! whole reconstruction; no group is ever dropped from the result.

use std::collections::HashMap;

use crate::{
    error::fixture::FixtureError,
    model::{
        fixture::{FixtureGroup, FixtureMatch, FixtureRound, MatchSlot},
        format::TournamentFormat,
        view::{FixtureTree, FixtureView, GroupView, MatchView, Opponent, Placeholder, RoundView},
    },
};

/// Reconstructs the display tree of a draw.
///
/// - `round_robin` - every group as a sibling, in stored order
/// - `knockout` - the single group as the playoff, final round first
/// - `group_playoff` - the single final group as the playoff, final round first, next to
///   the non-final groups in stored order
///
/// # Arguments
/// - `groups` - Every persisted group of the draw with its rounds, in stored order
/// - `format` - The tournament's format
///
/// # Returns
/// - `Ok(FixtureView::New)` - No group has been persisted yet
/// - `Ok(FixtureView::Generated)` - The reshaped tree
/// - `Err(FixtureError)` - The persisted draw is inconsistent
pub fn reconstruct(
    groups: Vec<FixtureGroup>,
    format: TournamentFormat,
) -> Result<FixtureView, FixtureError> {
    if groups.is_empty() {
        return Ok(FixtureView::New);
    }

    let titles: HashMap<i32, String> = groups
        .iter()
        .map(|group| (group.id, group.title.clone()))
        .collect();

    let tree = match format {
        TournamentFormat::RoundRobin => FixtureTree {
            format,
            playoff: None,
            groups: group_views(groups, &titles)?,
        },
        TournamentFormat::Knockout => {
            let found = groups.len();
            let mut groups = groups.into_iter();
            let (Some(bracket), None) = (groups.next(), groups.next()) else {
                return Err(FixtureError::UnexpectedGroupCount {
                    format,
                    kind: "knockout",
                    found,
                });
            };

            FixtureTree {
                format,
                playoff: Some(bracket_view(bracket, &titles)?),
                groups: Vec::new(),
            }
        }
        TournamentFormat::GroupPlayoff => {
            let (mut finals, phase): (Vec<_>, Vec<_>) =
                groups.into_iter().partition(|group| group.is_final);
            if finals.len() != 1 {
                return Err(FixtureError::UnexpectedGroupCount {
                    format,
                    kind: "final",
                    found: finals.len(),
                });
            }

            let bracket = finals.remove(0);
            FixtureTree {
                format,
                playoff: Some(bracket_view(bracket, &titles)?),
                groups: group_views(phase, &titles)?,
            }
        }
    };

    Ok(FixtureView::Generated(tree))
}

fn group_views(
    groups: Vec<FixtureGroup>,
    titles: &HashMap<i32, String>,
) -> Result<Vec<GroupView>, FixtureError> {
    groups
        .into_iter()
        .map(|group| group_view(group, titles))
        .collect()
}

/// Knockout phase, final round first.
fn bracket_view(
    group: FixtureGroup,
    titles: &HashMap<i32, String>,
) -> Result<GroupView, FixtureError> {
    let mut view = group_view(group, titles)?;
    view.rounds.reverse();
    Ok(view)
}

fn group_view(
    group: FixtureGroup,
    titles: &HashMap<i32, String>,
) -> Result<GroupView, FixtureError> {
    let group_id = group.id;
    let rounds = group
        .rounds
        .into_iter()
        .map(|round| round_view(group_id, round, titles))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GroupView {
        id: group.id,
        title: group.title,
        number_of_proceeders: group.number_of_proceeders,
        is_final: group.is_final,
        rounds,
    })
}

fn round_view(
    group_id: i32,
    round: FixtureRound,
    titles: &HashMap<i32, String>,
) -> Result<RoundView, FixtureError> {
    if round.matches.is_empty() {
        return Err(FixtureError::EmptyRound {
            group_id,
            round_id: round.id,
        });
    }

    let matches = round
        .matches
        .into_iter()
        .map(|m| match_view(m, titles))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RoundView {
        id: round.id,
        title: round.title,
        position: round.position,
        matches,
    })
}

fn match_view(
    fixture: FixtureMatch,
    titles: &HashMap<i32, String>,
) -> Result<MatchView, FixtureError> {
    Ok(MatchView {
        id: fixture.id,
        position: fixture.position,
        team1: opponent(fixture.id, fixture.team1, titles)?,
        team2: opponent(fixture.id, fixture.team2, titles)?,
        next_match_id: fixture.next_match_id,
        venue: fixture.venue,
        referee: fixture.referee,
        start_time: fixture.start_time,
        end_time: fixture.end_time,
    })
}

fn opponent(
    match_id: i32,
    slot: MatchSlot,
    titles: &HashMap<i32, String>,
) -> Result<Opponent, FixtureError> {
    match slot {
        MatchSlot::Team(team) => Ok(Opponent::Team {
            id: team.id,
            name: team.name,
            image: team.image,
        }),
        MatchSlot::Rank {
            rank,
            source_group_id,
        } => titles
            .get(&source_group_id)
            .map(|title| Opponent::Placeholder(Placeholder::winner_of(rank, title)))
            .ok_or(FixtureError::MissingSourceGroup {
                match_id,
                group_id: source_group_id,
            }),
        MatchSlot::Open => Ok(Opponent::Pending),
    }
}
