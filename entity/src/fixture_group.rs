use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fixture_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tournament_id: i32,
    pub title: String,
    /// Order of the group within its tournament's draw.
    pub position: i32,
    /// How many top finishers advance out of the group.
    pub number_of_proceeders: i32,
    /// Set on the knockout-phase group of a draw.
    pub is_final: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tournament,
    #[sea_orm(has_many = "super::fixture_round::Entity")]
    FixtureRound,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::fixture_round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FixtureRound.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
