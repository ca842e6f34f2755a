//! Fixture round factory for creating test round entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a round at `position` in the given group, titled `Round {position + 1}`.
///
/// # Arguments
/// - `db` - Database connection
/// - `group_id` - Owning fixture group
/// - `position` - Round position, earliest round first
///
/// # Returns
/// - `Ok(entity::fixture_round::Model)` - Created round entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_round(
    db: &DatabaseConnection,
    group_id: i32,
    position: i32,
) -> Result<entity::fixture_round::Model, DbErr> {
    entity::fixture_round::ActiveModel {
        id: ActiveValue::NotSet,
        group_id: ActiveValue::Set(group_id),
        position: ActiveValue::Set(position),
        title: ActiveValue::Set(format!("Round {}", position + 1)),
    }
    .insert(db)
    .await
}
