pub use super::game::Entity as Game;
pub use super::match_attendance::Entity as MatchAttendance;
pub use super::match_goal_assist::Entity as MatchGoalAssist;
pub use super::player::Entity as Player;
pub use super::season_stats::Entity as SeasonStats;
pub use super::upcoming_match::Entity as UpcomingMatch;
