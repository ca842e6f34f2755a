use sea_orm::DatabaseConnection;

use crate::{
    data::{draw::DrawRepository, team::TeamRepository, tournament::TournamentRepository},
    error::AppError,
    model::{draw::Draw, format::TournamentFormat},
    scheduler::{self, ScheduleRequest},
};

/// Draw parameters not stored on the tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOptions {
    pub group_count: Option<usize>,
    pub rounds: Option<i32>,
    pub proceeders: Option<usize>,
    /// Configured fallback for `proceeders`, capped to each group's size.
    pub default_proceeders: Option<usize>,
}

impl PublishOptions {
    /// Names of the explicitly set options that `format` does not use.
    pub fn unused_by(&self, format: TournamentFormat) -> Vec<&'static str> {
        let mut unused = Vec::new();
        match format {
            TournamentFormat::Knockout => {
                if self.group_count.is_some() {
                    unused.push("group_count");
                }
                if self.rounds.is_some() {
                    unused.push("rounds");
                }
                if self.proceeders.is_some() {
                    unused.push("proceeders");
                }
            }
            TournamentFormat::RoundRobin => {
                if self.proceeders.is_some() {
                    unused.push("proceeders");
                }
            }
            TournamentFormat::GroupPlayoff => {}
        }
        unused
    }
}

/// Summary of a published draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedDraw {
    pub tournament_id: i32,
    pub group_ids: Vec<i32>,
    pub draw: Draw,
}

pub struct PublishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublishService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates and persists the draw of a tournament.
    ///
    /// The tournament's teams, ordered by ID, are the participants: the team with the
    /// lowest ID is seed 1. The draw is generated with the tournament's stored format and
    /// written atomically.
    ///
    /// # Arguments
    /// - `tournament_id` - Tournament to publish a draw for
    /// - `options` - Group count, rounds and proceeder override
    ///
    /// # Returns
    /// - `Ok(PublishedDraw)` - Generated draw and the created group IDs
    /// - `Err(AppError::NotFound)` - Tournament does not exist
    /// - `Err(AppError::BadRequest)` - A draw already exists, or the stored format is unknown
    /// - `Err(AppError::ScheduleErr)` - The teams and options cannot form a draw
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn publish(
        &self,
        tournament_id: i32,
        options: PublishOptions,
    ) -> Result<PublishedDraw, AppError> {
        let tournament = TournamentRepository::new(self.db)
            .get_by_id(tournament_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tournament {} not found", tournament_id)))?;

        let format = tournament
            .format()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let draw_repo = DrawRepository::new(self.db);
        if draw_repo.exists_for_tournament(tournament_id).await? {
            return Err(AppError::BadRequest(format!(
                "Fixture already generated for tournament {}",
                tournament_id
            )));
        }

        let team_ids: Vec<i32> = TeamRepository::new(self.db)
            .get_by_tournament(tournament_id)
            .await?
            .into_iter()
            .map(|team| team.id)
            .collect();

        let unused = options.unused_by(format);
        if !unused.is_empty() {
            tracing::debug!(
                "Ignoring {} for {} tournament {}",
                unused.join(", "),
                format,
                tournament_id
            );
        }

        let draw = scheduler::generate(ScheduleRequest {
            participant_count: team_ids.len(),
            group_count: options.group_count,
            rounds: options.rounds,
            format,
            proceeders: options.proceeders,
            default_proceeders: options.default_proceeders,
        })?;

        let groups = draw_repo.publish(tournament_id, &draw, &team_ids).await?;

        tracing::info!(
            "Published {} draw for tournament {} ({}) with {} teams in {} groups",
            format,
            tournament.id,
            tournament.name,
            team_ids.len(),
            groups.len()
        );

        Ok(PublishedDraw {
            tournament_id,
            group_ids: groups.into_iter().map(|g| g.id).collect(),
            draw,
        })
    }

    /// Deletes a tournament's draw so it can be published again.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted groups, `0` when nothing was published
    /// - `Err(AppError::NotFound)` - Tournament does not exist
    pub async fn reset(&self, tournament_id: i32) -> Result<u64, AppError> {
        TournamentRepository::new(self.db)
            .get_by_id(tournament_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tournament {} not found", tournament_id)))?;

        let deleted = DrawRepository::new(self.db)
            .delete_for_tournament(tournament_id)
            .await?;

        tracing::info!("Reset draw of tournament {} ({} groups)", tournament_id, deleted);

        Ok(deleted)
    }
}
