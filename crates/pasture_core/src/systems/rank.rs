//! Ranking service: the top-10 leaderboard over live creatures.

use pasture_data::Creature;
use serde::{Deserialize, Serialize};

/// Entries published to the leaderboard feed, at most [`LEADERBOARD_LEN`].
pub const LEADERBOARD_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: usize,
    pub is_player: bool,
}

/// Builds the leaderboard: player plus every live bot, sorted descending by
/// mass, truncated to the top 10.
///
/// Ties keep prior list order (stable sort): the player sorts ahead of any
/// bot of equal mass, and tied bots keep their storage order.
#[must_use]
pub fn leaderboard(player: &Creature, bots: &[Creature]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = std::iter::once(player)
        .chain(bots.iter())
        .map(|c| LeaderboardEntry {
            name: c.name.clone(),
            score: c.mass,
            is_player: c.is_player,
        })
        .collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_LEN);
    entries
}
