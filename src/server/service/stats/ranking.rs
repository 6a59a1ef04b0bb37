use std::collections::HashMap;

use crate::model::season::RankingDto;

/// Name shown for a contribution whose player row no longer exists
pub const UNKNOWN_PLAYER_NAME: &str = "?";

/// Metric a player ranking is computed over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankingMetric {
    Goals,
    Assists,
    Attendance,
}

/// Sums contributions per player and ranks the totals, highest first.
///
/// Players are accumulated in the order they first appear in `contributions` and sorted with a
/// stable sort, so equal totals keep that order. Ranks are positional (1, 2, 3, ...) even when
/// totals tie. Players whose total is zero or less are left out.
///
/// # Arguments
/// - `contributions` - `(player_id, value)` pairs in scan order
/// - `names` - Player ID to name lookup
///
/// # Returns
/// Ranking lines in display order
pub fn rank_players<I>(contributions: I, names: &HashMap<i32, String>) -> Vec<RankingDto>
where
    I: IntoIterator<Item = (i32, i32)>,
{
    let mut totals: Vec<(i32, i32)> = Vec::new();
    let mut positions: HashMap<i32, usize> = HashMap::new();

    for (player_id, value) in contributions {
        match positions.get(&player_id) {
            Some(&position) => totals[position].1 += value,
            None => {
                positions.insert(player_id, totals.len());
                totals.push((player_id, value));
            }
        }
    }

    totals.retain(|(_, total)| *total > 0);
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals
        .into_iter()
        .enumerate()
        .map(|(position, (player_id, value))| RankingDto {
            rank: position as i32 + 1,
            player_name: names
                .get(&player_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_PLAYER_NAME.to_string()),
            value,
        })
        .collect()
}
