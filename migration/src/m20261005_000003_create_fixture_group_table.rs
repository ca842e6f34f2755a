use sea_orm_migration::{prelude::*, schema::*};

use super::m20261005_000001_create_tournament_table::Tournament;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FixtureGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(FixtureGroup::Id))
                    .col(integer(FixtureGroup::TournamentId))
                    .col(string(FixtureGroup::Title))
                    .col(integer(FixtureGroup::Position))
                    .col(integer(FixtureGroup::NumberOfProceeders).default(0))
                    .col(boolean(FixtureGroup::IsFinal).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_group_tournament_id")
                            .from(FixtureGroup::Table, FixtureGroup::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fixture_group_tournament_final")
                    .table(FixtureGroup::Table)
                    .col(FixtureGroup::TournamentId)
                    .col(FixtureGroup::IsFinal)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FixtureGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FixtureGroup {
    Table,
    Id,
    TournamentId,
    Title,
    Position,
    NumberOfProceeders,
    IsFinal,
}
