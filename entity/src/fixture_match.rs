use sea_orm::entity::prelude::*;

/// A persisted match slot.
///
/// Each side is either bound to a team (`team*_id`), a rank placeholder
/// (`team*_rank` + `team*_source_group_id`), or open until a previous match is played.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fixture_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub round_id: i32,
    pub position: i32,
    pub team1_id: Option<i32>,
    pub team2_id: Option<i32>,
    pub team1_rank: Option<i32>,
    pub team1_source_group_id: Option<i32>,
    pub team2_rank: Option<i32>,
    pub team2_source_group_id: Option<i32>,
    /// Knockout advancement pointer; the winner moves into this match.
    pub next_match_id: Option<i32>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub start_time: Option<DateTimeUtc>,
    pub end_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fixture_round::Entity",
        from = "Column::RoundId",
        to = "super::fixture_round::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FixtureRound,
}

impl Related<super::fixture_round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FixtureRound.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
