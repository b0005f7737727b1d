//! Bot steering: one fixed deterministic heuristic.
//!
//! A bot chases the nearest food pellet inside its search radius. With no
//! pellet in range it wanders: the heading gets an occasional random nudge
//! and the target sits a fixed distance ahead. Either way, a head close to a
//! wall has the offending target axis overridden to point back inside.

use crate::config::SimConfig;
use crate::spatial_hash::SpatialHash;
use pasture_data::{Creature, Food, Vec2};
use rand::Rng;

/// Computes a bot's steering target for this tick.
///
/// `food_index` must be built over `food` positions. May perturb the bot's
/// heading (the wander nudge), which is why the bot is taken mutably.
/// `scratch` is reused query storage.
pub fn bot_target<R: Rng>(
    bot: &mut Creature,
    food: &[Food],
    food_index: &SpatialHash,
    scratch: &mut Vec<usize>,
    config: &SimConfig,
    rng: &mut R,
) -> Vec2 {
    let head = bot.head();

    // Nearest pellet strictly inside the search radius, ties broken by
    // lowest pellet index.
    food_index.query_into(head.x, head.y, config.steering.food_search_radius, scratch);
    scratch.sort_unstable();
    let mut min_dist = config.steering.food_search_radius;
    let mut nearest: Option<Vec2> = None;
    for &i in scratch.iter() {
        let d = head.distance(food[i].pos);
        if d < min_dist {
            min_dist = d;
            nearest = Some(food[i].pos);
        }
    }

    let mut target = match nearest {
        Some(pos) => pos,
        None => {
            if rng.gen_bool(config.steering.wander_chance) {
                bot.angle +=
                    rng.gen_range(-config.steering.wander_jitter..config.steering.wander_jitter);
            }
            Vec2::new(
                head.x + bot.angle.cos() * config.steering.lookahead,
                head.y + bot.angle.sin() * config.steering.lookahead,
            )
        }
    };

    // Wall avoidance overrides only the axis in violation, after target
    // selection.
    let margin = config.steering.boundary_margin;
    if head.x < margin {
        target.x = head.x + margin;
    }
    if head.x > config.world.width - margin {
        target.x = head.x - margin;
    }
    if head.y < margin {
        target.y = head.y + margin;
    }
    if head.y > config.world.height - margin {
        target.y = head.y - margin;
    }

    target
}
