//! # Pasture Core
//!
//! The simulation core for Pasture, a slither-style arena game: one
//! player-controlled creature and a herd of autonomous bots race to eat
//! scattered food while avoiding fatal body collisions in a bounded 2D
//! world.
//!
//! This crate is the authoritative per-tick state transition and nothing
//! else: rendering, input capture, and screen flow live outside and talk to
//! the core through a per-tick input, a detached world snapshot, a
//! leaderboard feed, and a terminal game-over signal.
//!
//! ## Architecture
//!
//! - **Explicit world value**: [`world::World`] owns every creature and
//!   food record; one `update` call is one deterministic tick.
//! - **Fixed step order**: steering, movement, consumption, collision
//!   resolution, replenishment, ranking. Always in that order, so
//!   multi-creature collision chains resolve reproducibly.
//! - **Seeded RNG**: every random decision draws from the world's own
//!   `ChaCha8Rng`, making seeded sessions replayable.
//! - **Spatial hashing**: food and body-segment scans run through a uniform
//!   grid instead of full pairwise sweeps, with identical outcomes.
//!
//! ## Example
//!
//! ```
//! use pasture_core::config::{SimConfig, WorldConfig};
//! use pasture_core::game::Game;
//! use pasture_core::world::TickInput;
//! use pasture_data::Vec2;
//!
//! let config = SimConfig {
//!     world: WorldConfig { seed: Some(42), ..Default::default() },
//!     ..Default::default()
//! };
//! let mut game = Game::new(config).unwrap();
//! game.start().unwrap();
//!
//! let input = TickInput { target: Vec2::new(1500.0, 1500.0), boost: false };
//! let report = game.frame(&input).unwrap();
//! assert_eq!(report.snapshot.tick, 1);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Session state machine (menu, playing, game over)
pub mod game;
/// Performance metrics collection and logging
pub mod metrics;
/// Render-ready world snapshots
pub mod snapshot;
/// Spatial hashing for near-linear proximity queries
pub mod spatial_hash;
/// Per-tick simulation systems (steering, movement, collision, economy, rank)
pub mod systems;
/// The world state and tick orchestrator
pub mod world;

pub use config::SimConfig;
pub use game::{FrameReport, Game, GamePhase};
pub use metrics::{init_logging, Metrics};
pub use snapshot::{CreatureSnapshot, WorldSnapshot};
pub use systems::movement::Locomotion;
pub use systems::rank::LeaderboardEntry;
pub use world::{TickInput, World, WorldEvent};
