use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::tournament::{CreateTournamentParams, Tournament};

pub struct TournamentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tournament.
    ///
    /// # Arguments
    /// - `params` - Name and format of the tournament
    ///
    /// # Returns
    /// - `Ok(Tournament)` - The created tournament
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateTournamentParams) -> Result<Tournament, DbErr> {
        let tournament = entity::tournament::ActiveModel {
            name: ActiveValue::Set(params.name),
            format: ActiveValue::Set(params.format.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tournament::from_entity(tournament))
    }

    /// Gets a tournament by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Tournament))` - Tournament found
    /// - `Ok(None)` - No tournament with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Tournament>, DbErr> {
        let tournament = entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(tournament.map(Tournament::from_entity))
    }
}
