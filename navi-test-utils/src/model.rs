//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main navi crate so fixtures and assertions read the same
//! way on both sides.

pub type PlayerModel = entity::player::Model;
pub type MatchModel = entity::game::Model;
pub type AttendanceModel = entity::match_attendance::Model;
pub type GoalAssistModel = entity::match_goal_assist::Model;
pub type SeasonStatsModel = entity::season_stats::Model;
pub type UpcomingMatchModel = entity::upcoming_match::Model;
