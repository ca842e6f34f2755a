//! Tournament factory for creating test tournament entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tournaments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tournament = TournamentFactory::new(&db)
///     .format("knockout")
///     .build()
///     .await?;
/// ```
pub struct TournamentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::tournament::Model,
}

impl<'a> TournamentFactory<'a> {
    /// Creates a new TournamentFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TournamentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::tournament::entity_builder()
            .name(format!("Tournament {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the tournament name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the stored format string.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.entity.format = format.into();
        self
    }

    /// Builds and inserts the tournament entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tournament::Model)` - Created tournament entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tournament::Model, DbErr> {
        entity::tournament::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            format: ActiveValue::Set(self.entity.format),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tournament with the given format.
///
/// Shorthand for `TournamentFactory::new(db).format(format).build().await`.
pub async fn create_tournament(
    db: &DatabaseConnection,
    format: impl Into<String>,
) -> Result<entity::tournament::Model, DbErr> {
    TournamentFactory::new(db).format(format).build().await
}
