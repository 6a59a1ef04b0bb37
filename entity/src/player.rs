use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub phone_number: Option<String>,
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
