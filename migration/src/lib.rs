pub use sea_orm_migration::prelude::*;

mod m20260105_000001_player;
mod m20260105_000002_game;
mod m20260105_000003_match_attendance;
mod m20260105_000004_match_goal_assist;
mod m20260105_000005_season_stats;
mod m20260105_000006_upcoming_match;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_player::Migration),
            Box::new(m20260105_000002_game::Migration),
            Box::new(m20260105_000003_match_attendance::Migration),
            Box::new(m20260105_000004_match_goal_assist::Migration),
            Box::new(m20260105_000005_season_stats::Migration),
            Box::new(m20260105_000006_upcoming_match::Migration),
        ]
    }
}
