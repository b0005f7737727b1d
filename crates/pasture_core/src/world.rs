//! The authoritative per-tick state transition.
//!
//! [`World`] owns every creature and food record for a session and advances
//! them one tick at a time, in a fixed order: bot steering, movement (player
//! then bots), food consumption (player then bots), creature-vs-creature
//! resolution, spawn replenishment, ranking. All randomness flows through
//! the world's own seeded RNG, so a seeded session replays exactly.

use crate::config::SimConfig;
use crate::metrics::Metrics;
use crate::snapshot::{CreatureSnapshot, WorldSnapshot};
use crate::spatial_hash::SpatialHash;
use crate::systems::collision::{self, BodyIndex, PLAYER_SLOT};
use crate::systems::economy;
use crate::systems::movement::Locomotion;
use crate::systems::rank::{self, LeaderboardEntry};
use crate::systems::steering;
use pasture_data::{Creature, Food, Rgb, Vec2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;
use std::time::Instant;

/// Grid cell size for the food index. Coarse relative to the 300-unit food
/// search radius so a steering query touches at most a 3x3 block of cells.
const FOOD_CELL_SIZE: f64 = 150.0;
/// Grid cell size for the body-segment index. Collision thresholds are
/// under 15 units, so queries stay within one cell and its neighbors.
const BODY_CELL_SIZE: f64 = 64.0;

/// Bot display names, cycled by bot index.
const BOT_NAMES: [&str; 15] = [
    "Bessie", "Daisy", "Buttercup", "Clover", "Rosie", "Bella", "Luna", "Maggie", "Molly",
    "Penny", "Ruby", "Sadie", "Sophie", "Stella", "Willow",
];

/// Bot body colors, cycled by bot index.
const BOT_COLORS: [Rgb; 15] = [
    Rgb::new(33, 150, 243),
    Rgb::new(76, 175, 80),
    Rgb::new(255, 152, 0),
    Rgb::new(156, 39, 176),
    Rgb::new(0, 188, 212),
    Rgb::new(255, 235, 59),
    Rgb::new(244, 67, 54),
    Rgb::new(63, 81, 181),
    Rgb::new(139, 195, 74),
    Rgb::new(255, 87, 34),
    Rgb::new(103, 58, 183),
    Rgb::new(0, 150, 136),
    Rgb::new(255, 193, 7),
    Rgb::new(121, 85, 72),
    Rgb::new(96, 125, 139),
];

const PLAYER_COLOR: Rgb = Rgb::new(233, 30, 99);
const PLAYER_NAME: &str = "You";

/// Per-tick input for the player, pre-resolved to world coordinates.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    pub target: Vec2,
    pub boost: bool,
}

/// Events surfaced by a tick.
#[derive(Debug, Clone)]
pub enum WorldEvent {
    BotDied {
        name: String,
        mass: usize,
        /// Head position at the moment of death; the food burst scatters
        /// around it.
        at: Vec2,
        /// True when the bot ran into the player's body (the player absorbs
        /// half the mass).
        by_player: bool,
    },
    PlayerDied {
        final_score: u64,
    },
}

pub struct World {
    pub config: SimConfig,
    pub tick: u64,
    pub player: Creature,
    /// Live bots, in stable storage order. Shrinks as bots die; nothing is
    /// re-spawned mid-session.
    pub bots: Vec<Creature>,
    pub food: Vec<Food>,
    pub score: u64,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub metrics: Metrics,
    rng: ChaCha8Rng,
    food_index: SpatialHash,
    body_index: BodyIndex,
    scratch: Vec<usize>,
}

impl World {
    /// Initializes a session: one player at the arena center, the configured
    /// number of bots at random positions, and the food set at its target
    /// count.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let mut rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let spacing = config.creature.segment_radius;
        let player = Creature::new(
            config.world.width / 2.0,
            config.world.height / 2.0,
            config.creature.initial_length,
            spacing,
            rng.gen::<f64>() * TAU,
            PLAYER_COLOR,
            PLAYER_NAME,
            true,
        );

        let bots = (0..config.world.bot_count)
            .map(|i| {
                let x = rng.gen::<f64>() * config.world.width;
                let y = rng.gen::<f64>() * config.world.height;
                let angle = rng.gen::<f64>() * TAU;
                Creature::new(
                    x,
                    y,
                    config.creature.initial_length,
                    spacing,
                    angle,
                    BOT_COLORS[i % BOT_COLORS.len()],
                    BOT_NAMES[i % BOT_NAMES.len()],
                    false,
                )
            })
            .collect();

        let mut food = Vec::with_capacity(config.world.food_count);
        economy::replenish(&mut food, &config, &mut rng);

        let food_index = SpatialHash::new(FOOD_CELL_SIZE, config.world.width, config.world.height);
        let body_index = BodyIndex::new(BODY_CELL_SIZE, config.world.width, config.world.height);

        let mut world = Self {
            config,
            tick: 0,
            player,
            bots,
            food,
            score: 0,
            leaderboard: Vec::new(),
            metrics: Metrics::new(),
            rng,
            food_index,
            body_index,
            scratch: Vec::new(),
        };
        world.leaderboard = rank::leaderboard(&world.player, &world.bots);
        Ok(world)
    }

    /// Advances the simulation by one tick.
    ///
    /// Runs the fixed step sequence against the input sampled for this
    /// frame and returns the events that occurred. A `PlayerDied` event
    /// means the session is over: the tick ended at the fatal collision,
    /// before replenishment and ranking, and the caller must stop driving
    /// ticks.
    pub fn update(&mut self, input: &TickInput) -> Vec<WorldEvent> {
        let started = Instant::now();
        self.tick += 1;
        let mut events = Vec::new();

        // Steering: every bot picks its target before anything moves.
        self.rebuild_food_index();
        let targets: Vec<Vec2> = (0..self.bots.len())
            .map(|i| {
                steering::bot_target(
                    &mut self.bots[i],
                    &self.food,
                    &self.food_index,
                    &mut self.scratch,
                    &self.config,
                    &mut self.rng,
                )
            })
            .collect();

        // Movement: player first, then bots in storage order.
        self.player.boosting = input.boost;
        self.player.advance(
            input.target,
            self.config.creature.base_speed,
            self.config.creature.boost_speed,
        );
        for (bot, &target) in self.bots.iter_mut().zip(&targets) {
            bot.advance(
                target,
                self.config.creature.base_speed,
                self.config.creature.boost_speed,
            );
        }

        // Consumption: player first, then each bot.
        self.consume_food();

        // Creature-vs-creature resolution, then the pending player flag.
        // A player death ends the tick at the terminal event: no
        // replenishment runs and the leaderboard keeps its pre-death
        // ordering for the game-over screen.
        let player_died = self.resolve_creature_collisions(&mut events);
        if player_died {
            events.push(WorldEvent::PlayerDied {
                final_score: self.score,
            });
        } else {
            // Replenishment and ranking close out a live tick.
            economy::replenish(&mut self.food, &self.config, &mut self.rng);
            self.leaderboard = rank::leaderboard(&self.player, &self.bots);
        }

        self.metrics
            .record_tick(started.elapsed(), 1 + self.bots.len(), self.food.len());
        for event in &events {
            match event {
                WorldEvent::BotDied { name, mass, .. } => {
                    self.metrics.increment_counter("bot_deaths");
                    self.metrics
                        .log_event("bot_died", &format!("{name} at mass {mass}"));
                }
                WorldEvent::PlayerDied { final_score } => {
                    self.metrics
                        .log_event("player_died", &format!("final score {final_score}"));
                }
            }
        }

        if !player_died {
            self.check_invariants();
        }
        events
    }

    /// Publishes the render-ready view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        let creatures = std::iter::once(&self.player)
            .chain(self.bots.iter())
            .map(|c| CreatureSnapshot {
                name: c.name.clone(),
                color: c.color,
                is_player: c.is_player,
                mass: c.mass,
                segments: c.segments.clone(),
            })
            .collect();
        WorldSnapshot {
            tick: self.tick,
            width: self.config.world.width,
            height: self.config.world.height,
            creatures,
            food: self.food.clone(),
            score: self.score,
            leaderboard: self.leaderboard.clone(),
        }
    }

    fn rebuild_food_index(&mut self) {
        let positions: Vec<Vec2> = self.food.iter().map(|f| f.pos).collect();
        self.food_index.rebuild(&positions);
    }

    /// Each creature eats every pellet its head reaches, player first so an
    /// earlier eater wins a contested pellet. Growth is one unit per pellet;
    /// the player's pellets also score one point each.
    fn consume_food(&mut self) {
        self.rebuild_food_index();
        let mut consumed = vec![false; self.food.len()];
        let reach = self.config.economy.food_radius + self.config.creature.segment_radius;
        let growth = self.config.economy.growth_per_food;

        for slot in 0..=self.bots.len() {
            let creature = if slot == 0 {
                &mut self.player
            } else {
                &mut self.bots[slot - 1]
            };
            let head = creature.head();
            self.food_index
                .query_into(head.x, head.y, reach, &mut self.scratch);
            for &i in &self.scratch {
                if !consumed[i]
                    && collision::eats(head, &self.food[i], self.config.creature.segment_radius)
                {
                    consumed[i] = true;
                    creature.grow(growth);
                    if creature.is_player {
                        self.score += 1;
                        self.metrics.increment_counter("player_food");
                    }
                }
            }
        }

        let mut keep = consumed.iter();
        self.food.retain(|_| !*keep.next().unwrap());
    }

    /// The deterministic two-step collision pass.
    ///
    /// Step 1 checks the player's head against every bot body and only
    /// records a pending death flag. Step 2 walks bots in storage order with
    /// first-match-wins: a bot dies to the player's body (burst plus
    /// absorption) or, failing that, to any other bot's body that is still
    /// alive at check time; a bot killed earlier in the pass no longer
    /// kills. Deletions apply after the scan completes.
    fn resolve_creature_collisions(&mut self, events: &mut Vec<WorldEvent>) -> bool {
        self.body_index.rebuild(&self.player, &self.bots);
        let threshold = self.config.creature.segment_radius * self.config.collision.cross_factor;

        let player_died = self.body_index.hit(
            self.player.head(),
            threshold,
            &mut self.scratch,
            |owner| owner != PLAYER_SLOT,
        );

        let mut alive = vec![true; self.bots.len()];
        for i in 0..self.bots.len() {
            let head = self.bots[i].head();
            let own_slot = BodyIndex::bot_slot(i);

            let hit_player =
                self.body_index
                    .hit(head, threshold, &mut self.scratch, |owner| {
                        owner == PLAYER_SLOT
                    });
            if hit_player {
                alive[i] = false;
                let mass = self.bots[i].mass;
                economy::death_burst(&mut self.food, head, mass, &self.config, &mut self.rng);
                self.player.grow(mass / 2);
                events.push(WorldEvent::BotDied {
                    name: self.bots[i].name.clone(),
                    mass,
                    at: head,
                    by_player: true,
                });
                continue;
            }

            let hit_bot = self
                .body_index
                .hit(head, threshold, &mut self.scratch, |owner| {
                    owner != PLAYER_SLOT && owner != own_slot && alive[owner - 1]
                });
            if hit_bot {
                alive[i] = false;
                let mass = self.bots[i].mass;
                economy::death_burst(&mut self.food, head, mass, &self.config, &mut self.rng);
                events.push(WorldEvent::BotDied {
                    name: self.bots[i].name.clone(),
                    mass,
                    at: head,
                    by_player: false,
                });
            }
        }

        let mut keep = alive.iter();
        self.bots.retain(|_| *keep.next().unwrap());

        player_died
    }

    /// Economy and body invariants. A violation is a logic bug in the
    /// collision/growth pipeline, so it must abort loudly rather than be
    /// clamped away.
    fn check_invariants(&self) {
        debug_assert!(
            self.player.segments.len() <= self.player.mass,
            "player body longer than mass"
        );
        for bot in &self.bots {
            debug_assert!(
                bot.segments.len() <= bot.mass,
                "bot {} body longer than mass",
                bot.name
            );
        }
        debug_assert!(
            self.food.len() >= self.config.world.food_count,
            "food dropped below target after replenishment"
        );
    }
}
