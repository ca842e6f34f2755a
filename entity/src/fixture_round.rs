use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fixture_round")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    /// Earliest round first.
    pub position: i32,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fixture_group::Entity",
        from = "Column::GroupId",
        to = "super::fixture_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FixtureGroup,
    #[sea_orm(has_many = "super::fixture_match::Entity")]
    FixtureMatch,
}

impl Related<super::fixture_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FixtureGroup.def()
    }
}

impl Related<super::fixture_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FixtureMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
