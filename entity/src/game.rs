use sea_orm::entity::prelude::*;

/// A played match. The table is named `game` since `match` is reserved.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_date: Date,
    pub match_time: Option<Time>,
    pub opponent: String,
    pub our_score: i32,
    pub opponent_score: i32,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub result: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::match_attendance::Entity")]
    MatchAttendance,
    #[sea_orm(has_many = "super::match_goal_assist::Entity")]
    MatchGoalAssist,
}

impl Related<super::match_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchAttendance.def()
    }
}

impl Related<super::match_goal_assist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchGoalAssist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
