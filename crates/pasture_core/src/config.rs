//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. All simulation parameters can be customized through this system.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in the `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 3000.0
//! height = 3000.0
//! bot_count = 15
//! food_count = 200
//! seed = 42
//!
//! [creature]
//! base_speed = 3.0
//! boost_speed = 6.0
//! ```

use serde::{Deserialize, Serialize};

/// World-level simulation configuration.
///
/// Dimensions of the arena, the population to seed it with, and the global
/// food-count target the spawn economy maintains.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub bot_count: usize,
    pub food_count: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 3000.0,
            height: 3000.0,
            bot_count: 15,
            food_count: 200,
            seed: None,
        }
    }
}

/// Creature body and movement configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CreatureConfig {
    pub initial_length: usize,
    pub segment_radius: f64,
    pub base_speed: f64,
    pub boost_speed: f64,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            initial_length: 10,
            segment_radius: 8.0,
            base_speed: 3.0,
            boost_speed: 6.0,
        }
    }
}

/// Bot steering heuristic configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SteeringConfig {
    /// Food beyond this distance is invisible to a bot.
    pub food_search_radius: f64,
    /// Per-tick probability of a heading perturbation while wandering.
    pub wander_chance: f64,
    /// Heading perturbation is uniform in `[-wander_jitter, wander_jitter]`.
    pub wander_jitter: f64,
    /// Wander target distance ahead of the head.
    pub lookahead: f64,
    /// Heads closer than this to a wall get their target nudged inward.
    pub boundary_margin: f64,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            food_search_radius: 300.0,
            wander_chance: 0.02,
            wander_jitter: 0.25,
            lookahead: 100.0,
            boundary_margin: 100.0,
        }
    }
}

/// Collision thresholds, as multiples of the segment radius.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CollisionConfig {
    /// Head-vs-own-body fatal threshold factor.
    pub self_factor: f64,
    /// Head-vs-other-body fatal threshold factor.
    pub cross_factor: f64,
    /// Leading segments exempt from the self-collision check.
    pub self_exempt: usize,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            self_factor: 1.5,
            cross_factor: 1.8,
            self_exempt: 4,
        }
    }
}

/// Food spawn and growth economy configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EconomyConfig {
    pub food_radius: f64,
    /// Mass gained per food pellet consumed.
    pub growth_per_food: usize,
    /// Death-burst pellets land within this distance of the dead head.
    pub burst_scatter: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            food_radius: 6.0,
            growth_per_food: 1,
            burst_scatter: 100.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub creature: CreatureConfig,
    #[serde(default)]
    pub steering: SteeringConfig,
    #[serde(default)]
    pub collision: CollisionConfig,
    #[serde(default)]
    pub economy: EconomyConfig,
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(self.world.width > 0.0, "World width must be positive");
        anyhow::ensure!(self.world.height > 0.0, "World height must be positive");
        anyhow::ensure!(
            self.world.width.is_finite() && self.world.height.is_finite(),
            "World dimensions must be finite"
        );
        anyhow::ensure!(
            self.world.bot_count <= 1000,
            "Bot count too large (max 1000)"
        );
        anyhow::ensure!(
            self.world.food_count <= 100_000,
            "Food count too large (max 100000)"
        );

        // Creature validation
        anyhow::ensure!(
            self.creature.initial_length > 0,
            "Initial length must be positive"
        );
        anyhow::ensure!(
            self.creature.segment_radius > 0.0,
            "Segment radius must be positive"
        );
        anyhow::ensure!(
            self.creature.base_speed > 0.0,
            "Base speed must be positive"
        );
        anyhow::ensure!(
            self.creature.boost_speed >= self.creature.base_speed,
            "Boost speed must be at least base speed"
        );

        // Steering validation
        anyhow::ensure!(
            self.steering.food_search_radius > 0.0,
            "Food search radius must be positive"
        );
        anyhow::ensure!(
            self.steering.wander_chance >= 0.0 && self.steering.wander_chance <= 1.0,
            "Wander chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.steering.wander_jitter > 0.0,
            "Wander jitter must be positive"
        );
        anyhow::ensure!(
            self.steering.boundary_margin >= 0.0,
            "Boundary margin must be non-negative"
        );

        // Collision validation
        anyhow::ensure!(
            self.collision.self_factor > 0.0,
            "Self-collision factor must be positive"
        );
        anyhow::ensure!(
            self.collision.cross_factor > 0.0,
            "Cross-collision factor must be positive"
        );

        // Economy validation
        anyhow::ensure!(
            self.economy.food_radius > 0.0,
            "Food radius must be positive"
        );
        anyhow::ensure!(
            self.economy.growth_per_food > 0,
            "Growth per food must be positive"
        );
        anyhow::ensure!(
            self.economy.burst_scatter >= 0.0,
            "Burst scatter must be non-negative"
        );

        Ok(())
    }

    /// Loads and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of the rule-bearing sections, for tagging recorded
    /// sessions. The world seed is excluded so that two runs of the same
    /// rules compare equal.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.creature).as_bytes());
        hasher.update(format!("{:?}", self.steering).as_bytes());
        hasher.update(format!("{:?}", self.collision).as_bytes());
        hasher.update(format!("{:?}", self.economy).as_bytes());
        hex::encode(hasher.finalize())
    }
}
