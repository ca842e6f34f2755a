//! Single-elimination brackets.
//!
//! The bracket is padded to the next power of two. Row 0 pairs seed `s` with its mirror
//! `slots + 1 - s`; a mirror beyond the participant count is a bye. Odd seeds fill the
//! left half of row 0 and even seeds the right half, so seeds 1 and 2 can only meet in
//! the final. The winner of row `r` column `c` plays in row `r + 1` column `c / 2`, on
//! the `table1` side for even `c` and the `table2` side for odd `c`.
//!
//! Within a half the seeds are placed in order rather than in standard bracket order:
//! from 8 slots on, seed 1's second-round opponent comes from seed 3's match, not seed 4's.

use crate::{
    error::schedule::ScheduleError,
    model::draw::Schedule,
    scheduler::grid::{self, BYE, UNRESOLVED},
};

/// Generates a knockout bracket for `participant_count` participants.
///
/// Rows after the first start out unresolved. A participant drawn against a bye is
/// advanced into row 1 immediately, without a played match.
///
/// # Arguments
/// - `participant_count` - Number of participants, at least 2
///
/// # Returns
/// - `Ok(Schedule)` - `ceil(log2(n))` rows, the first holding `slots / 2` pairings
/// - `Err(ScheduleError::TooFewParticipants)` - Fewer than 2 participants
pub fn generate_knockout(participant_count: usize) -> Result<Schedule, ScheduleError> {
    if participant_count < 2 {
        return Err(ScheduleError::TooFewParticipants(participant_count));
    }

    let slots = bracket_size(participant_count);
    let rounds = round_count(participant_count);
    let width = slots / 2;
    let half = (width / 2).max(1);

    let mut table1 = grid::halving(rounds, width, UNRESOLVED);
    let mut table2 = grid::halving(rounds, width, UNRESOLVED);

    for seed in 1..=width {
        let column = if seed % 2 == 1 {
            seed / 2
        } else {
            half + seed / 2 - 1
        };
        let mirror = slots + 1 - seed;

        table1[0][column] = seed as i32;
        table2[0][column] = if mirror <= participant_count {
            mirror as i32
        } else {
            BYE
        };
    }

    if rounds > 1 {
        for column in 0..width {
            if table2[0][column] != BYE {
                continue;
            }

            let advancing = table1[0][column];
            let side = if column % 2 == 0 {
                &mut table1
            } else {
                &mut table2
            };
            side[1][column / 2] = advancing;
        }
    }

    Ok(Schedule { table1, table2 })
}

/// Bracket size: the next power of two at or above the participant count.
pub fn bracket_size(participant_count: usize) -> usize {
    participant_count.next_power_of_two()
}

/// Number of knockout rounds, `ceil(log2(participant_count))`.
pub fn round_count(participant_count: usize) -> usize {
    bracket_size(participant_count).trailing_zeros() as usize
}
