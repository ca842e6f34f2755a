use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{BTreeSet, HashMap};

use crate::{data::team::TeamRepository, model::fixture::GroupWithRounds};

pub struct FixtureGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureGroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the groups of a tournament's draw in stored order.
    ///
    /// # Arguments
    /// - `tournament_id` - Tournament to fetch groups for
    /// - `is_final` - Only final (`Some(true)`) or only non-final (`Some(false)`) groups,
    ///   or all of them (`None`)
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Groups ordered by position
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_tournament(
        &self,
        tournament_id: i32,
        is_final: Option<bool>,
    ) -> Result<Vec<entity::fixture_group::Model>, DbErr> {
        let mut query = entity::prelude::FixtureGroup::find()
            .filter(entity::fixture_group::Column::TournamentId.eq(tournament_id));

        if let Some(is_final) = is_final {
            query = query.filter(entity::fixture_group::Column::IsFinal.eq(is_final));
        }

        query
            .order_by_asc(entity::fixture_group::Column::Position)
            .order_by_asc(entity::fixture_group::Column::Id)
            .all(self.db)
            .await
    }

    /// Loads the rounds, matches and bound teams of a group.
    ///
    /// Issues three queries regardless of group size: rounds, matches of all rounds, and
    /// the teams referenced by those matches.
    ///
    /// # Arguments
    /// - `group` - The group to load
    ///
    /// # Returns
    /// - `Ok(GroupWithRounds)` - Rounds by position, each with its matches by position
    /// - `Err(DbErr)` - Database error
    pub async fn get_with_rounds(
        &self,
        group: entity::fixture_group::Model,
    ) -> Result<GroupWithRounds, DbErr> {
        let rounds = entity::prelude::FixtureRound::find()
            .filter(entity::fixture_round::Column::GroupId.eq(group.id))
            .order_by_asc(entity::fixture_round::Column::Position)
            .all(self.db)
            .await?;

        let round_ids: Vec<i32> = rounds.iter().map(|r| r.id).collect();
        let mut matches_by_round: HashMap<i32, Vec<entity::fixture_match::Model>> =
            HashMap::new();
        if !round_ids.is_empty() {
            let matches = entity::prelude::FixtureMatch::find()
                .filter(entity::fixture_match::Column::RoundId.is_in(round_ids))
                .order_by_asc(entity::fixture_match::Column::RoundId)
                .order_by_asc(entity::fixture_match::Column::Position)
                .all(self.db)
                .await?;

            for m in matches {
                matches_by_round.entry(m.round_id).or_default().push(m);
            }
        }

        let team_ids: BTreeSet<i32> = matches_by_round
            .values()
            .flatten()
            .flat_map(|m| [m.team1_id, m.team2_id])
            .flatten()
            .collect();
        let teams = TeamRepository::new(self.db)
            .get_by_ids(team_ids.into_iter().collect())
            .await?;

        let rounds = rounds
            .into_iter()
            .map(|round| {
                let matches = matches_by_round.remove(&round.id).unwrap_or_default();
                (round, matches)
            })
            .collect();

        Ok(GroupWithRounds {
            group,
            rounds,
            teams,
        })
    }
}
