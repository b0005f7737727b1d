use super::entity::{Rgb, Vec2};
use serde::{Deserialize, Serialize};

/// A consumable food pellet.
///
/// Immutable after creation; it leaves the world only by being eaten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    pub radius: f64,
    pub color: Rgb,
}

impl Food {
    #[must_use]
    pub fn new(pos: Vec2, radius: f64, color: Rgb) -> Self {
        Self { pos, radius, color }
    }
}
