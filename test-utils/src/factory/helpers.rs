//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a tournament with `team_count` teams.
///
/// Teams are inserted in order, so their IDs ascend in the same order as the returned
/// vector. That ordering is the seeding order the draw publisher binds against.
///
/// # Arguments
/// - `db` - Database connection
/// - `format` - Stored tournament format string
/// - `team_count` - Number of teams to create
///
/// # Returns
/// - `Ok((tournament, teams))` - Created tournament and its teams
/// - `Err(DbErr)` - Database error during creation
pub async fn create_tournament_with_teams(
    db: &DatabaseConnection,
    format: &str,
    team_count: usize,
) -> Result<(entity::tournament::Model, Vec<entity::team::Model>), DbErr> {
    let tournament = crate::factory::tournament::create_tournament(db, format).await?;
    let teams = crate::factory::team::create_teams(db, tournament.id, team_count).await?;

    Ok((tournament, teams))
}
