//! Shared grid utilities.
//!
//! A grid is a list of rows of participant indices. Besides real 1-based indices a cell
//! may hold one of the sentinels below.

use crate::model::draw::Pairing;

pub type Grid = Vec<Vec<i32>>;

/// No opponent, the other side of the pairing advances or sits out.
pub const BYE: i32 = 0;

/// Not yet determined, filled by the winner of a previous match.
pub const UNRESOLVED: i32 = -1;

/// Creates a bracket-shaped grid: `rows` rows, the first holding `width` cells and each
/// following row half as many as the one before it.
pub fn halving(rows: usize, width: usize, fill: i32) -> Grid {
    (0..rows).map(|row| vec![fill; (width >> row).max(1)]).collect()
}

/// Moves the first row to the end.
pub fn rotate_rows(grid: &[Vec<i32>]) -> Grid {
    let mut rotated = grid.to_vec();
    if !rotated.is_empty() {
        rotated.rotate_left(1);
    }
    rotated
}

/// Reverses the column order of a row.
pub fn reverse_columns(row: &[i32]) -> Vec<i32> {
    row.iter().rev().copied().collect()
}

/// Concatenates `times` copies of the grid.
pub fn repeat_rows(grid: &[Vec<i32>], times: usize) -> Grid {
    let mut repeated = Vec::with_capacity(grid.len() * times);
    for _ in 0..times {
        repeated.extend(grid.iter().cloned());
    }
    repeated
}

/// Maps 1-based indices through `lookup`, leaving sentinels untouched.
///
/// An index outside `lookup` is left as-is; callers only translate grids produced for a
/// participant count equal to `lookup.len()`.
pub fn translate(grid: &[Vec<i32>], lookup: &[i32]) -> Grid {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|&value| {
                    if value < 1 {
                        return value;
                    }
                    lookup.get(value as usize - 1).copied().unwrap_or(value)
                })
                .collect()
        })
        .collect()
}

/// Walks two parallel grids cell by cell.
pub fn pairings<'a>(table1: &'a Grid, table2: &'a Grid) -> impl Iterator<Item = Pairing> + 'a {
    table1
        .iter()
        .zip(table2.iter())
        .enumerate()
        .flat_map(|(row, (left, right))| {
            left.iter()
                .zip(right.iter())
                .enumerate()
                .map(move |(column, (&home, &away))| Pairing {
                    row,
                    column,
                    home,
                    away,
                })
        })
}
