//! Render-ready world snapshots.
//!
//! Published once per tick; detached from the live world so an external
//! renderer can draw the scene without touching core state.

use crate::systems::rank::LeaderboardEntry;
use pasture_data::{Food, Rgb, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreatureSnapshot {
    pub name: String,
    pub color: Rgb,
    pub is_player: bool,
    pub mass: usize,
    pub segments: Vec<Vec2>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    /// Player first, then live bots in storage order.
    pub creatures: Vec<CreatureSnapshot>,
    pub food: Vec<Food>,
    pub score: u64,
    pub leaderboard: Vec<LeaderboardEntry>,
}
