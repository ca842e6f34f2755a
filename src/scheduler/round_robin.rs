//! Round-robin pairing tables (circle method).
//!
//! With an even participant count, participant `n` is the fixed anchor in column 0 of
//! `table2` while everyone else rotates. With an odd count the anchor position is a bye:
//! the participant in `table1` column 0 sits out that row.

use crate::{
    error::schedule::ScheduleError,
    model::draw::Schedule,
    scheduler::grid::{self, Grid, BYE},
};

/// Generates a round-robin schedule for `participant_count` participants.
///
/// One full rotation pairs every two participants exactly once. `rounds > 1` repeats
/// the same rotation by concatenation, so every cycle reproduces identical fixtures
/// (home and away are not swapped). `rounds == 0` yields an empty schedule.
///
/// # Arguments
/// - `participant_count` - Number of participants, at least 2
/// - `rounds` - How many times the full rotation is played
///
/// # Returns
/// - `Ok(Schedule)` - `rows` rows of `columns` pairings per rotation
/// - `Err(ScheduleError::TooFewParticipants)` - Fewer than 2 participants
pub fn generate_round_robin(
    participant_count: usize,
    rounds: usize,
) -> Result<Schedule, ScheduleError> {
    if participant_count < 2 {
        return Err(ScheduleError::TooFewParticipants(participant_count));
    }

    let (rows, columns) = table_shape(participant_count);

    let table1: Grid = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| wrap(column + 1 + row * columns, rows))
                .collect()
        })
        .collect();

    let anchor = if participant_count % 2 == 0 {
        participant_count as i32
    } else {
        BYE
    };
    let table2: Grid = grid::rotate_rows(&table1)
        .iter()
        .map(|successor| {
            let mut row = grid::reverse_columns(successor);
            row[0] = anchor;
            row
        })
        .collect();

    Ok(Schedule {
        table1: grid::repeat_rows(&table1, rounds),
        table2: grid::repeat_rows(&table2, rounds),
    })
}

/// Rows and columns of one rotation.
///
/// # Returns
/// - `(n - 1, n / 2)` - For an even participant count
/// - `(n, (n + 1) / 2)` - For an odd participant count
pub fn table_shape(participant_count: usize) -> (usize, usize) {
    if participant_count % 2 == 0 {
        (participant_count - 1, participant_count / 2)
    } else {
        (participant_count, (participant_count + 1) / 2)
    }
}

/// 1-based wrap: residue `0` maps to `rows`.
fn wrap(value: usize, rows: usize) -> i32 {
    match value % rows {
        0 => rows as i32,
        residue => residue as i32,
    }
}
