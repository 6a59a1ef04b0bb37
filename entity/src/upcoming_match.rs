use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "upcoming_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_date: Date,
    pub match_time: Option<Time>,
    pub opponent: String,
    pub venue: Option<String>,
    pub memo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
