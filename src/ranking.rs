use crate::models::GameRecord;

pub const TOP_GAMES_LIMIT: usize = 5;

/// Orders `games` by playtime, most played first, and keeps at most `limit`.
///
/// Equal playtimes come back in no particular order.
pub fn top_by_playtime(mut games: Vec<GameRecord>, limit: usize) -> Vec<GameRecord> {
    games.sort_unstable_by(|a, b| b.playtime_forever.cmp(&a.playtime_forever));
    games.truncate(limit);
    games
}
