pub use sea_orm_migration::prelude::*;

mod m20261005_000001_create_tournament_table;
mod m20261005_000002_create_team_table;
mod m20261005_000003_create_fixture_group_table;
mod m20261005_000004_create_fixture_round_table;
mod m20261005_000005_create_fixture_match_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261005_000001_create_tournament_table::Migration),
            Box::new(m20261005_000002_create_team_table::Migration),
            Box::new(m20261005_000003_create_fixture_group_table::Migration),
            Box::new(m20261005_000004_create_fixture_round_table::Migration),
            Box::new(m20261005_000005_create_fixture_match_table::Migration),
        ]
    }
}
