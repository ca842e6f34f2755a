use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::tournament::{CreateTeamParams, Team};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a team in a tournament.
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let team = entity::team::ActiveModel {
            tournament_id: ActiveValue::Set(params.tournament_id),
            name: ActiveValue::Set(params.name),
            image: ActiveValue::Set(params.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(team))
    }

    /// Gets every team of a tournament, ordered by ID.
    ///
    /// The order is the seeding order a draw is published with.
    pub async fn get_by_tournament(&self, tournament_id: i32) -> Result<Vec<Team>, DbErr> {
        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Gets teams by ID in one query, keyed by ID.
    ///
    /// IDs without a matching team are simply absent from the map.
    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::team::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(|team| (team.id, team)).collect())
    }
}
