//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so type signatures don't need to reach into the generated
//! `entity` crate directly.

/// Type alias for player database model.
///
/// # Fields (from `entity::player::Model`)
/// - `id` - Primary key
/// - `name` - Unique display name, used for name-based lookups
/// - `phone_number` - Contact number, `None` when unset
pub type PlayerModel = entity::player::Model;

/// Type alias for played match database model.
///
/// # Fields (from `entity::game::Model`)
/// - `id` - Primary key
/// - `match_date` - Date the match was played
/// - `match_time` - Kick-off time (nullable)
/// - `opponent` - Opposing team name, empty when unknown
/// - `our_score` / `opponent_score` - Final score
/// - `result` - "승", "무" or "패", always derived from the score
pub type MatchModel = entity::game::Model;

/// Type alias for match attendance database model.
///
/// One row per player per match; unique on (`match_id`, `player_id`).
pub type AttendanceModel = entity::match_attendance::Model;

/// Type alias for per-match goal/assist database model.
pub type GoalAssistModel = entity::match_goal_assist::Model;

/// Type alias for season tally database model.
///
/// One row per season year; `total_matches` always equals `wins + draws + losses`.
pub type SeasonStatsModel = entity::season_stats::Model;

/// Type alias for scheduled match database model.
pub type UpcomingMatchModel = entity::upcoming_match::Model;
