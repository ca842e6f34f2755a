use sea_orm_migration::{prelude::*, schema::*};

use super::m20261005_000003_create_fixture_group_table::FixtureGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FixtureRound::Table)
                    .if_not_exists()
                    .col(pk_auto(FixtureRound::Id))
                    .col(integer(FixtureRound::GroupId))
                    .col(integer(FixtureRound::Position))
                    .col(string(FixtureRound::Title))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_round_group_id")
                            .from(FixtureRound::Table, FixtureRound::GroupId)
                            .to(FixtureGroup::Table, FixtureGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FixtureRound::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FixtureRound {
    Table,
    Id,
    GroupId,
    Position,
    Title,
}
