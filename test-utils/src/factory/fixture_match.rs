//! Fixture match factory for creating test match entities.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches with customizable sides.
///
/// # Example
///
/// ```rust,ignore
/// let m = FixtureMatchFactory::new(&db, round.id)
///     .team1(Some(home.id))
///     .team2_placeholder(2, group.id)
///     .build()
///     .await?;
/// ```
pub struct FixtureMatchFactory<'a> {
    db: &'a DatabaseConnection,
    builder: fixture::fixture_match::FixtureMatchEntityBuilder,
}

impl<'a> FixtureMatchFactory<'a> {
    /// Creates a new FixtureMatchFactory with both sides open.
    pub fn new(db: &'a DatabaseConnection, round_id: i32) -> Self {
        Self {
            db,
            builder: fixture::fixture_match::entity_builder().round_id(round_id),
        }
    }

    /// Sets the position within the round.
    pub fn position(mut self, position: i32) -> Self {
        self.builder = self.builder.position(position);
        self
    }

    /// Binds the first side to a team.
    pub fn team1(mut self, team_id: Option<i32>) -> Self {
        self.builder = self.builder.team1(team_id);
        self
    }

    /// Binds the second side to a team.
    pub fn team2(mut self, team_id: Option<i32>) -> Self {
        self.builder = self.builder.team2(team_id);
        self
    }

    /// Sets the first side to a rank placeholder.
    pub fn team1_placeholder(mut self, rank: i32, source_group_id: i32) -> Self {
        self.builder = self.builder.team1_placeholder(rank, source_group_id);
        self
    }

    /// Sets the second side to a rank placeholder.
    pub fn team2_placeholder(mut self, rank: i32, source_group_id: i32) -> Self {
        self.builder = self.builder.team2_placeholder(rank, source_group_id);
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::fixture_match::Model, DbErr> {
        let m = self.builder.build();
        entity::fixture_match::ActiveModel {
            id: ActiveValue::NotSet,
            round_id: ActiveValue::Set(m.round_id),
            position: ActiveValue::Set(m.position),
            team1_id: ActiveValue::Set(m.team1_id),
            team2_id: ActiveValue::Set(m.team2_id),
            team1_rank: ActiveValue::Set(m.team1_rank),
            team1_source_group_id: ActiveValue::Set(m.team1_source_group_id),
            team2_rank: ActiveValue::Set(m.team2_rank),
            team2_source_group_id: ActiveValue::Set(m.team2_source_group_id),
            next_match_id: ActiveValue::Set(m.next_match_id),
            venue: ActiveValue::Set(m.venue),
            referee: ActiveValue::Set(m.referee),
            start_time: ActiveValue::Set(m.start_time),
            end_time: ActiveValue::Set(m.end_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a match between two teams.
pub async fn create_match(
    db: &DatabaseConnection,
    round_id: i32,
    position: i32,
    team1_id: i32,
    team2_id: i32,
) -> Result<entity::fixture_match::Model, DbErr> {
    FixtureMatchFactory::new(db, round_id)
        .position(position)
        .team1(Some(team1_id))
        .team2(Some(team2_id))
        .build()
        .await
}
