use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261005_000002_create_team_table::Team,
    m20261005_000003_create_fixture_group_table::FixtureGroup,
    m20261005_000004_create_fixture_round_table::FixtureRound,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FixtureMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(FixtureMatch::Id))
                    .col(integer(FixtureMatch::RoundId))
                    .col(integer(FixtureMatch::Position))
                    .col(integer_null(FixtureMatch::Team1Id))
                    .col(integer_null(FixtureMatch::Team2Id))
                    .col(integer_null(FixtureMatch::Team1Rank))
                    .col(integer_null(FixtureMatch::Team1SourceGroupId))
                    .col(integer_null(FixtureMatch::Team2Rank))
                    .col(integer_null(FixtureMatch::Team2SourceGroupId))
                    .col(integer_null(FixtureMatch::NextMatchId))
                    .col(string_null(FixtureMatch::Venue))
                    .col(string_null(FixtureMatch::Referee))
                    .col(timestamp_null(FixtureMatch::StartTime))
                    .col(timestamp_null(FixtureMatch::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_match_round_id")
                            .from(FixtureMatch::Table, FixtureMatch::RoundId)
                            .to(FixtureRound::Table, FixtureRound::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_match_team1_id")
                            .from(FixtureMatch::Table, FixtureMatch::Team1Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_match_team2_id")
                            .from(FixtureMatch::Table, FixtureMatch::Team2Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_match_team1_source_group_id")
                            .from(FixtureMatch::Table, FixtureMatch::Team1SourceGroupId)
                            .to(FixtureGroup::Table, FixtureGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_match_team2_source_group_id")
                            .from(FixtureMatch::Table, FixtureMatch::Team2SourceGroupId)
                            .to(FixtureGroup::Table, FixtureGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_match_next_match_id")
                            .from(FixtureMatch::Table, FixtureMatch::NextMatchId)
                            .to(FixtureMatch::Table, FixtureMatch::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FixtureMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FixtureMatch {
    Table,
    Id,
    RoundId,
    Position,
    Team1Id,
    Team2Id,
    Team1Rank,
    Team1SourceGroupId,
    Team2Rank,
    Team2SourceGroupId,
    NextMatchId,
    Venue,
    Referee,
    StartTime,
    EndTime,
}
