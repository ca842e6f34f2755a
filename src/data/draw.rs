//! Persistence of scheduler draws.
//!
//! Publishing turns a [`Draw`] into group, round and match rows inside one transaction.
//! A half-written draw would leave `next_match_id` chains and rank placeholders pointing
//! at rows that do not exist, so any failure rolls the whole draw back.
//!
//! Participant index `i` of the draw binds to `team_ids[i - 1]`. Callers must pass teams
//! in the same order they seeded the draw with.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::model::draw::{Draw, Group, GroupSchedule, PlayoffBracket, Schedule};

/// Stored columns of one match side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SideColumns {
    team_id: Option<i32>,
    rank: Option<i32>,
    source_group_id: Option<i32>,
}

pub struct DrawRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DrawRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a draw for a tournament atomically.
    ///
    /// Round-robin groups get one round per matchday and one match per pairing that is
    /// not a bye. A knockout bracket persists every slot: byes and not-yet-played winners
    /// are stored open, bye winners are already bound in the second round, and every
    /// match except the final points at the match its winner advances to. Playoff leaves
    /// store `(rank, source_group_id)` placeholders.
    ///
    /// # Arguments
    /// - `tournament_id` - Tournament to publish the draw for
    /// - `draw` - Scheduler output
    /// - `team_ids` - Team bound to each participant index, in seeding order
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Created groups in stored order
    /// - `Err(DbErr::Custom)` - `team_ids` does not match the draw's participant count;
    ///   nothing was written
    /// - `Err(DbErr)` - Database error; the transaction was rolled back
    pub async fn publish(
        &self,
        tournament_id: i32,
        draw: &Draw,
        team_ids: &[i32],
    ) -> Result<Vec<entity::fixture_group::Model>, DbErr> {
        if team_ids.len() != draw.participant_count() {
            return Err(DbErr::Custom(format!(
                "Draw expects {} teams, got {}",
                draw.participant_count(),
                team_ids.len()
            )));
        }

        let txn = self.db.begin().await?;

        let groups = match draw {
            Draw::RoundRobin { groups, schedules } => {
                insert_group_phase(&txn, tournament_id, groups, schedules, team_ids).await?
            }
            Draw::Knockout { bracket, .. } => {
                let group = insert_group(&txn, tournament_id, "Knockout", 0, 0, true).await?;
                insert_bracket(&txn, group.id, bracket, |index| {
                    bind_participant(index, team_ids)
                })
                .await?;
                vec![group]
            }
            Draw::GroupPlayoff {
                groups,
                schedules,
                playoff,
            } => {
                let mut created =
                    insert_group_phase(&txn, tournament_id, groups, schedules, team_ids).await?;
                let group_ids: Vec<i32> = created.iter().map(|g| g.id).collect();

                let final_group = insert_group(
                    &txn,
                    tournament_id,
                    "Playoff",
                    created.len() as i32,
                    0,
                    true,
                )
                .await?;
                insert_bracket(&txn, final_group.id, &playoff.schedule, |index| {
                    bind_rank(index, playoff, &group_ids)
                })
                .await?;

                created.push(final_group);
                created
            }
        };

        txn.commit().await?;

        Ok(groups)
    }

    /// Checks whether a draw has been published for a tournament.
    pub async fn exists_for_tournament(&self, tournament_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::FixtureGroup::find()
            .filter(entity::fixture_group::Column::TournamentId.eq(tournament_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a tournament's draw so it can be published again.
    ///
    /// Matches go first since knockout matches and playoff placeholders reference each
    /// other and the groups.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted groups
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete_for_tournament(&self, tournament_id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let group_ids: Vec<i32> = entity::prelude::FixtureGroup::find()
            .filter(entity::fixture_group::Column::TournamentId.eq(tournament_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|g| g.id)
            .collect();

        if group_ids.is_empty() {
            txn.commit().await?;
            return Ok(0);
        }

        let round_ids: Vec<i32> = entity::prelude::FixtureRound::find()
            .filter(entity::fixture_round::Column::GroupId.is_in(group_ids.clone()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();

        if !round_ids.is_empty() {
            // Unlink advancement pointers so no row references a match being deleted.
            entity::prelude::FixtureMatch::update_many()
                .col_expr(
                    entity::fixture_match::Column::NextMatchId,
                    sea_orm::sea_query::Expr::value(Option::<i32>::None),
                )
                .filter(entity::fixture_match::Column::RoundId.is_in(round_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::FixtureMatch::delete_many()
                .filter(entity::fixture_match::Column::RoundId.is_in(round_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::FixtureRound::delete_many()
            .filter(entity::fixture_round::Column::GroupId.is_in(group_ids.clone()))
            .exec(&txn)
            .await?;

        let result = entity::prelude::FixtureGroup::delete_many()
            .filter(entity::fixture_group::Column::Id.is_in(group_ids))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }
}

/// Persists round-robin groups with one round per matchday.
async fn insert_group_phase<C: ConnectionTrait>(
    conn: &C,
    tournament_id: i32,
    groups: &[Group],
    schedules: &[GroupSchedule],
    team_ids: &[i32],
) -> Result<Vec<entity::fixture_group::Model>, DbErr> {
    let mut created = Vec::with_capacity(groups.len());

    for (group, schedule) in groups.iter().zip(schedules) {
        let row = insert_group(
            conn,
            tournament_id,
            &group.title,
            group.id as i32,
            group.number_of_proceeders as i32,
            false,
        )
        .await?;

        insert_matchdays(conn, row.id, &schedule.schedule, team_ids).await?;
        created.push(row);
    }

    Ok(created)
}

async fn insert_matchdays<C: ConnectionTrait>(
    conn: &C,
    group_id: i32,
    schedule: &Schedule,
    team_ids: &[i32],
) -> Result<(), DbErr> {
    for (row, (left, right)) in schedule.table1.iter().zip(&schedule.table2).enumerate() {
        let round = insert_round(conn, group_id, row, format!("Round {}", row + 1)).await?;

        let played = left
            .iter()
            .zip(right)
            .filter(|(home, away)| **home > 0 && **away > 0);
        for (position, (&home, &away)) in played.enumerate() {
            insert_match(
                conn,
                round.id,
                position,
                bind_participant(home, team_ids)?,
                bind_participant(away, team_ids)?,
            )
            .await?;
        }
    }

    Ok(())
}

/// Persists every slot of a knockout bracket and chains each match to the next round.
async fn insert_bracket<C, F>(
    conn: &C,
    group_id: i32,
    bracket: &Schedule,
    resolve: F,
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    F: Fn(i32) -> Result<SideColumns, DbErr>,
{
    let rows = bracket.rows();
    let mut match_ids: Vec<Vec<i32>> = Vec::with_capacity(rows);

    for (row, (left, right)) in bracket.table1.iter().zip(&bracket.table2).enumerate() {
        let round = insert_round(conn, group_id, row, knockout_round_title(rows, row)).await?;

        let mut ids = Vec::with_capacity(left.len());
        for (column, (&home, &away)) in left.iter().zip(right).enumerate() {
            let created = insert_match(conn, round.id, column, resolve(home)?, resolve(away)?)
                .await?;
            ids.push(created.id);
        }
        match_ids.push(ids);
    }

    for (row, next_row) in match_ids.iter().zip(match_ids.iter().skip(1)) {
        for (column, &id) in row.iter().enumerate() {
            let next_match_id = next_row.get(column / 2).copied().ok_or_else(|| {
                DbErr::Custom(format!("Bracket row is missing column {}", column / 2))
            })?;

            entity::fixture_match::ActiveModel {
                id: ActiveValue::Unchanged(id),
                next_match_id: ActiveValue::Set(Some(next_match_id)),
                ..Default::default()
            }
            .update(conn)
            .await?;
        }
    }

    Ok(())
}

async fn insert_group<C: ConnectionTrait>(
    conn: &C,
    tournament_id: i32,
    title: &str,
    position: i32,
    number_of_proceeders: i32,
    is_final: bool,
) -> Result<entity::fixture_group::Model, DbErr> {
    entity::fixture_group::ActiveModel {
        tournament_id: ActiveValue::Set(tournament_id),
        title: ActiveValue::Set(title.to_string()),
        position: ActiveValue::Set(position),
        number_of_proceeders: ActiveValue::Set(number_of_proceeders),
        is_final: ActiveValue::Set(is_final),
        ..Default::default()
    }
    .insert(conn)
    .await
}

async fn insert_round<C: ConnectionTrait>(
    conn: &C,
    group_id: i32,
    position: usize,
    title: String,
) -> Result<entity::fixture_round::Model, DbErr> {
    entity::fixture_round::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        position: ActiveValue::Set(position as i32),
        title: ActiveValue::Set(title),
        ..Default::default()
    }
    .insert(conn)
    .await
}

async fn insert_match<C: ConnectionTrait>(
    conn: &C,
    round_id: i32,
    position: usize,
    team1: SideColumns,
    team2: SideColumns,
) -> Result<entity::fixture_match::Model, DbErr> {
    entity::fixture_match::ActiveModel {
        round_id: ActiveValue::Set(round_id),
        position: ActiveValue::Set(position as i32),
        team1_id: ActiveValue::Set(team1.team_id),
        team2_id: ActiveValue::Set(team2.team_id),
        team1_rank: ActiveValue::Set(team1.rank),
        team1_source_group_id: ActiveValue::Set(team1.source_group_id),
        team2_rank: ActiveValue::Set(team2.rank),
        team2_source_group_id: ActiveValue::Set(team2.source_group_id),
        next_match_id: ActiveValue::Set(None),
        venue: ActiveValue::Set(None),
        referee: ActiveValue::Set(None),
        start_time: ActiveValue::Set(None),
        end_time: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(conn)
    .await
}

/// Binds a participant index to its team. Sentinels stay open.
fn bind_participant(index: i32, team_ids: &[i32]) -> Result<SideColumns, DbErr> {
    if index < 1 {
        return Ok(SideColumns::default());
    }

    let team_id = team_ids
        .get(index as usize - 1)
        .copied()
        .ok_or_else(|| DbErr::Custom(format!("No team bound to participant {}", index)))?;

    Ok(SideColumns {
        team_id: Some(team_id),
        ..Default::default()
    })
}

/// Binds a playoff bracket index to its rank placeholder. Sentinels stay open.
///
/// `group_ids[g]` is the stored ID of the draw's group `g`.
fn bind_rank(
    index: i32,
    playoff: &PlayoffBracket,
    group_ids: &[i32],
) -> Result<SideColumns, DbErr> {
    if index < 1 {
        return Ok(SideColumns::default());
    }

    let slot = playoff
        .slot(index)
        .ok_or_else(|| DbErr::Custom(format!("No proceeder bound to playoff slot {}", index)))?;
    let source_group_id = group_ids
        .get(slot.group_id)
        .copied()
        .ok_or_else(|| DbErr::Custom(format!("Playoff slot {} has no source group", index)))?;

    Ok(SideColumns {
        team_id: None,
        rank: Some(slot.rank as i32),
        source_group_id: Some(source_group_id),
    })
}

/// "Final", "Semi-finals", "Quarter-finals", then "Round of N".
fn knockout_round_title(rows: usize, row: usize) -> String {
    match rows - row {
        1 => "Final".to_string(),
        2 => "Semi-finals".to_string(),
        3 => "Quarter-finals".to_string(),
        remaining => format!("Round of {}", 1usize << remaining),
    }
}
