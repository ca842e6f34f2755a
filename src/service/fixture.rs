use sea_orm::DatabaseConnection;
use tokio::task::JoinSet;

use crate::{
    data::{group::FixtureGroupRepository, tournament::TournamentRepository},
    error::AppError,
    model::{fixture::FixtureGroup, format::TournamentFormat, view::FixtureView},
    reconstructor,
};

pub struct FixtureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reconstructs the display tree of a tournament's draw.
    ///
    /// For `group_playoff` the group phase and the final group are fetched with separate
    /// queries. Rounds, matches and teams of every group are then loaded concurrently and
    /// reassembled in stored group order before the tree is built.
    ///
    /// # Arguments
    /// - `tournament_id` - Tournament to reconstruct
    ///
    /// # Returns
    /// - `Ok(FixtureView::New)` - Nothing has been published yet
    /// - `Ok(FixtureView::Generated)` - The reshaped draw
    /// - `Err(AppError::NotFound)` - Tournament does not exist
    /// - `Err(AppError::BadRequest)` - Tournament has an unknown stored format
    /// - `Err(AppError::FixtureErr)` - Persisted draw is inconsistent
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reconstruct(&self, tournament_id: i32) -> Result<FixtureView, AppError> {
        let tournament = TournamentRepository::new(self.db)
            .get_by_id(tournament_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tournament {} not found", tournament_id)))?;

        let format = tournament
            .format()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let repo = FixtureGroupRepository::new(self.db);
        let groups = match format {
            TournamentFormat::GroupPlayoff => {
                let mut groups = repo.get_by_tournament(tournament_id, Some(false)).await?;
                groups.extend(repo.get_by_tournament(tournament_id, Some(true)).await?);
                groups
            }
            TournamentFormat::RoundRobin | TournamentFormat::Knockout => {
                repo.get_by_tournament(tournament_id, None).await?
            }
        };

        let groups = self.load_rounds(groups).await?;

        let view = reconstructor::reconstruct(groups, format).map_err(|e| {
            tracing::warn!("Fixture of tournament {} is inconsistent: {}", tournament_id, e);
            AppError::from(e)
        })?;

        tracing::info!("Reconstructed {} fixture of tournament {}", format, tournament_id);

        Ok(view)
    }

    /// Loads every group's rounds concurrently, preserving the input order.
    ///
    /// Any failing group fails the whole load; no group is dropped from the result.
    async fn load_rounds(
        &self,
        groups: Vec<entity::fixture_group::Model>,
    ) -> Result<Vec<FixtureGroup>, AppError> {
        tracing::debug!("Loading {} fixture groups", groups.len());

        let mut tasks = JoinSet::new();
        for (index, group) in groups.into_iter().enumerate() {
            let db = self.db.clone();
            tasks.spawn(async move {
                let loaded = FixtureGroupRepository::new(&db).get_with_rounds(group).await;
                (index, loaded)
            });
        }

        let mut loaded = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined
                .map_err(|e| AppError::InternalError(format!("Fixture group load failed: {}", e)))?;
            let group = FixtureGroup::from_with_rounds(result?).map_err(|e| {
                tracing::warn!("Fixture group could not be loaded: {}", e);
                AppError::from(e)
            })?;
            loaded.push((index, group));
        }

        loaded.sort_by_key(|(index, _)| *index);

        Ok(loaded.into_iter().map(|(_, group)| group).collect())
    }
}
