//! Fixture group factory for creating test group entities.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test fixture groups with customizable fields.
pub struct FixtureGroupFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::fixture_group::Model,
}

impl<'a> FixtureGroupFactory<'a> {
    /// Creates a new FixtureGroupFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `tournament_id` - Tournament the group belongs to
    pub fn new(db: &'a DatabaseConnection, tournament_id: i32) -> Self {
        let entity = fixture::fixture_group::entity_builder()
            .tournament_id(tournament_id)
            .build();

        Self { db, entity }
    }

    /// Sets the group title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the position of the group within the draw.
    pub fn position(mut self, position: i32) -> Self {
        self.entity.position = position;
        self
    }

    /// Sets how many finishers advance out of the group.
    pub fn number_of_proceeders(mut self, number_of_proceeders: i32) -> Self {
        self.entity.number_of_proceeders = number_of_proceeders;
        self
    }

    /// Marks the group as the knockout phase of the draw.
    pub fn is_final(mut self, is_final: bool) -> Self {
        self.entity.is_final = is_final;
        self
    }

    /// Builds and inserts the group entity into the database.
    pub async fn build(self) -> Result<entity::fixture_group::Model, DbErr> {
        entity::fixture_group::ActiveModel {
            id: ActiveValue::NotSet,
            tournament_id: ActiveValue::Set(self.entity.tournament_id),
            title: ActiveValue::Set(self.entity.title),
            position: ActiveValue::Set(self.entity.position),
            number_of_proceeders: ActiveValue::Set(self.entity.number_of_proceeders),
            is_final: ActiveValue::Set(self.entity.is_final),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-final group with the given title.
pub async fn create_group(
    db: &DatabaseConnection,
    tournament_id: i32,
    title: impl Into<String>,
) -> Result<entity::fixture_group::Model, DbErr> {
    FixtureGroupFactory::new(db, tournament_id)
        .title(title)
        .build()
        .await
}
