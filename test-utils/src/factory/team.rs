//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db, tournament.id)
///     .name("Lions")
///     .image(Some("lions.png".to_string()))
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::team::Model,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `tournament_id` - Tournament the team belongs to
    pub fn new(db: &'a DatabaseConnection, tournament_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::team::entity_builder()
            .tournament_id(tournament_id)
            .name(format!("Team {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the team image URL.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.entity.image = image;
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            tournament_id: ActiveValue::Set(self.entity.tournament_id),
            name: ActiveValue::Set(self.entity.name),
            image: ActiveValue::Set(self.entity.image),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values for the specified tournament.
pub async fn create_team(
    db: &DatabaseConnection,
    tournament_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, tournament_id).build().await
}

/// Creates `count` teams for the specified tournament, in insertion order.
pub async fn create_teams(
    db: &DatabaseConnection,
    tournament_id: i32,
    count: usize,
) -> Result<Vec<entity::team::Model>, DbErr> {
    let mut teams = Vec::with_capacity(count);
    for _ in 0..count {
        teams.push(create_team(db, tournament_id).await?);
    }

    Ok(teams)
}
