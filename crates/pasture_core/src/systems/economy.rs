//! Spawn/growth economy: keeps the world's food count at its target and
//! converts dead creatures into food bursts.

use crate::config::SimConfig;
use pasture_data::{Food, Rgb, Vec2};
use rand::Rng;
use std::f64::consts::TAU;

/// Pellet colors sit in the green-yellow band: hue 90-150, fixed
/// saturation/lightness.
fn pellet_color<R: Rng>(rng: &mut R) -> Rgb {
    let hue = rng.gen_range(90.0..150.0);
    hsl_to_rgb(hue, 0.7, 0.6)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Rgb::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Spawns one pellet at a uniformly random position inside the world bounds.
pub fn spawn_food<R: Rng>(config: &SimConfig, rng: &mut R) -> Food {
    let pos = Vec2::new(
        rng.gen::<f64>() * config.world.width,
        rng.gen::<f64>() * config.world.height,
    );
    Food::new(pos, config.economy.food_radius, pellet_color(rng))
}

/// Scatters `count` pellets around `origin`, one per unit of the dead
/// creature's mass.
///
/// Each pellet lands at a uniformly random angle and a uniformly random
/// distance in `[0, burst_scatter)`. Distance-uniform rather than
/// area-uniform, so the burst clusters toward the death point. That
/// distribution is part of the observable behavior; keep it.
pub fn death_burst<R: Rng>(food: &mut Vec<Food>, origin: Vec2, count: usize, config: &SimConfig, rng: &mut R) {
    for _ in 0..count {
        let angle = rng.gen::<f64>() * TAU;
        let distance = rng.gen::<f64>() * config.economy.burst_scatter;
        let pos = Vec2::new(
            origin.x + angle.cos() * distance,
            origin.y + angle.sin() * distance,
        );
        food.push(Food::new(pos, config.economy.food_radius, pellet_color(rng)));
    }
}

/// Tops the food set back up to the configured target count.
///
/// Appends only; burst food may leave the set above target, and that excess
/// stays until eaten.
pub fn replenish<R: Rng>(food: &mut Vec<Food>, config: &SimConfig, rng: &mut R) {
    while food.len() < config.world.food_count {
        food.push(spawn_food(config, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_replenish_hits_target_exactly() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut food = Vec::new();
        replenish(&mut food, &config, &mut rng);
        assert_eq!(food.len(), config.world.food_count);

        // Already at or above target: no-op.
        replenish(&mut food, &config, &mut rng);
        assert_eq!(food.len(), config.world.food_count);
    }

    #[test]
    fn test_spawned_food_inside_bounds() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..500 {
            let f = spawn_food(&config, &mut rng);
            assert!(f.pos.x >= 0.0 && f.pos.x < config.world.width);
            assert!(f.pos.y >= 0.0 && f.pos.y < config.world.height);
            assert_eq!(f.radius, config.economy.food_radius);
        }
    }

    #[test]
    fn test_death_burst_count_and_scatter() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let origin = Vec2::new(1500.0, 1500.0);
        let mut food = Vec::new();
        death_burst(&mut food, origin, 25, &config, &mut rng);
        assert_eq!(food.len(), 25);
        for f in &food {
            assert!(f.pos.distance(origin) < config.economy.burst_scatter);
        }
    }

    #[test]
    fn test_pellet_colors_in_green_yellow_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..200 {
            let c = pellet_color(&mut rng);
            // Hue 90-150 at l=0.6: green dominates, blue stays lowest.
            assert!(c.g > c.b);
            assert!(c.g >= c.r);
        }
    }

    #[test]
    fn test_hsl_conversion_reference_points() {
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Rgb::new(255, 255, 255));
    }
}
