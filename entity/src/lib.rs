pub mod prelude;

pub mod game;
pub mod match_attendance;
pub mod match_goal_assist;
pub mod player;
pub mod season_stats;
pub mod upcoming_match;
