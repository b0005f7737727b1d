//! Collision primitives: food consumption, self-collision, and
//! head-vs-body checks between creatures.
//!
//! Everything is plain Euclidean distance against fixed thresholds. The
//! cross-creature checks run through [`BodyIndex`], a per-tick spatial index
//! over every live body segment, so the scans stay near-linear while the
//! outcomes match a full pairwise sweep.

use crate::spatial_hash::SpatialHash;
use pasture_data::{Creature, Food, Vec2};

/// Owner slot of the player's segments in a [`BodyIndex`].
pub const PLAYER_SLOT: usize = 0;

/// True if a head at `head` reaches `food`.
#[must_use]
pub fn eats(head: Vec2, food: &Food, segment_radius: f64) -> bool {
    head.distance(food.pos) < food.radius + segment_radius
}

/// True if the creature's head touches its own body.
///
/// The first `exempt` trailing segments are skipped: the body immediately
/// behind the head always curves close to it, and counting those segments
/// would flag every turn as fatal.
#[must_use]
pub fn self_collision(
    creature: &Creature,
    segment_radius: f64,
    self_factor: f64,
    exempt: usize,
) -> bool {
    let head = creature.head();
    let threshold = segment_radius * self_factor;
    creature
        .segments
        .iter()
        .skip(exempt)
        .any(|&s| head.distance(s) < threshold)
}

/// Spatial index over every body segment of the player and all bots.
///
/// Rebuilt once per tick after movement. Each indexed point remembers its
/// owner slot ([`PLAYER_SLOT`] for the player, `1 + bot_index` for bots) so
/// that queries can exclude the querying creature's own body and bots that
/// already died earlier in the same resolution pass.
pub struct BodyIndex {
    hash: SpatialHash,
    points: Vec<Vec2>,
    owners: Vec<usize>,
}

impl BodyIndex {
    pub fn new(cell_size: f64, width: f64, height: f64) -> Self {
        Self {
            hash: SpatialHash::new(cell_size, width, height),
            points: Vec::new(),
            owners: Vec::new(),
        }
    }

    /// Owner slot of bot `bot_idx`.
    #[inline]
    #[must_use]
    pub fn bot_slot(bot_idx: usize) -> usize {
        bot_idx + 1
    }

    pub fn rebuild(&mut self, player: &Creature, bots: &[Creature]) {
        self.points.clear();
        self.owners.clear();
        for (slot, creature) in std::iter::once(player).chain(bots.iter()).enumerate() {
            for &segment in &creature.segments {
                self.points.push(segment);
                self.owners.push(slot);
            }
        }
        self.hash.rebuild(&self.points);
    }

    /// True if any indexed segment whose owner passes `owner_ok` lies within
    /// `threshold` of `head`.
    ///
    /// `scratch` is reused query storage. Candidate order is irrelevant:
    /// the result is a pure existence test.
    pub fn hit<F>(&self, head: Vec2, threshold: f64, scratch: &mut Vec<usize>, owner_ok: F) -> bool
    where
        F: Fn(usize) -> bool,
    {
        self.hash.query_into(head.x, head.y, threshold, scratch);
        scratch
            .iter()
            .any(|&i| owner_ok(self.owners[i]) && head.distance(self.points[i]) < threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasture_data::Rgb;

    const R: f64 = 8.0;

    fn creature_at(x: f64, y: f64, len: usize) -> Creature {
        Creature::new(x, y, len, R, 0.0, Rgb::default(), "Clover", false)
    }

    #[test]
    fn test_eats_threshold() {
        let food = Food::new(Vec2::new(13.9, 0.0), 6.0, Rgb::default());
        assert!(eats(Vec2::new(0.0, 0.0), &food, R));
        let far = Food::new(Vec2::new(14.0, 0.0), 6.0, Rgb::default());
        assert!(!eats(Vec2::new(0.0, 0.0), &far, R));
    }

    #[test]
    fn test_self_collision_exempts_leading_segments() {
        // A body coiled so tightly that segments 1..=3 sit on top of the
        // head. Only index 4 onward may trigger.
        let mut c = creature_at(0.0, 0.0, 8);
        for i in 1..4 {
            c.segments[i] = Vec2::new(0.5, 0.5);
        }
        for i in 4..8 {
            c.segments[i] = Vec2::new(500.0 + i as f64 * R, 0.0);
        }
        assert!(!self_collision(&c, R, 1.5, 4));

        // Now fold a distant segment back under the head.
        c.segments[6] = Vec2::new(2.0, 2.0);
        assert!(self_collision(&c, R, 1.5, 4));
    }

    #[test]
    fn test_self_collision_threshold_is_1_5_radius() {
        let mut c = creature_at(0.0, 0.0, 6);
        c.segments[5] = Vec2::new(12.0, 0.0); // exactly 1.5 * 8
        assert!(!self_collision(&c, R, 1.5, 4));
        c.segments[5] = Vec2::new(11.9, 0.0);
        assert!(self_collision(&c, R, 1.5, 4));
    }

    #[test]
    fn test_body_index_hit_respects_owner_filter() {
        let player = creature_at(100.0, 100.0, 5);
        let bots = vec![creature_at(300.0, 300.0, 5)];
        let mut index = BodyIndex::new(64.0, 3000.0, 3000.0);
        index.rebuild(&player, &bots);
        let mut scratch = Vec::new();

        // A point on the bot's body, checked against bot segments only.
        let probe = Vec2::new(292.0, 300.0);
        assert!(index.hit(probe, 14.4, &mut scratch, |o| o != PLAYER_SLOT));
        assert!(!index.hit(probe, 14.4, &mut scratch, |o| o == PLAYER_SLOT));

        // Far from everything.
        assert!(!index.hit(Vec2::new(1500.0, 1500.0), 14.4, &mut scratch, |_| true));
    }

    #[test]
    fn test_body_index_full_body_counts_head_included() {
        let player = creature_at(100.0, 100.0, 5);
        let bots = vec![creature_at(400.0, 400.0, 5)];
        let mut index = BodyIndex::new(64.0, 3000.0, 3000.0);
        index.rebuild(&player, &bots);
        let mut scratch = Vec::new();

        // Probe right on the bot's head: the head is part of the body
        // sequence for cross-creature checks.
        assert!(index.hit(Vec2::new(400.0, 405.0), 14.4, &mut scratch, |o| {
            o == BodyIndex::bot_slot(0)
        }));
    }
}
