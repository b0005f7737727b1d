//! Session state machine: menu, playing, game over.
//!
//! Wraps a [`World`] and drives exactly one state transition per external
//! frame trigger. The player's fatal collision is the only path out of
//! `Playing`; after it, the frozen world is kept around for the game-over
//! screen and no further ticks run until a restart.

use crate::config::SimConfig;
use crate::snapshot::WorldSnapshot;
use crate::world::{TickInput, World, WorldEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing,
    GameOver { final_score: u64 },
}

/// Output of one frame while playing.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub snapshot: WorldSnapshot,
    pub high_score: u64,
    /// Carries the final score on the terminal frame.
    pub ended: Option<u64>,
}

pub struct Game {
    config: SimConfig,
    pub phase: GamePhase,
    pub world: Option<World>,
    /// Best final score seen across sessions. Survives restarts.
    pub high_score: u64,
    sessions: u64,
}

impl Game {
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase: GamePhase::Menu,
            world: None,
            high_score: 0,
            sessions: 0,
        })
    }

    /// `menu --start--> playing` and `gameover --restart--> playing`.
    ///
    /// Fully re-initializes the world and resets the score; the high score
    /// carries over. A configured seed is offset by the session count so a
    /// restart plays a fresh arena while the run as a whole stays
    /// reproducible.
    pub fn start(&mut self) -> anyhow::Result<()> {
        let mut config = self.config.clone();
        if let Some(seed) = config.world.seed {
            config.world.seed = Some(seed.wrapping_add(self.sessions));
        }
        self.world = Some(World::new(config)?);
        self.sessions += 1;
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Runs one tick against this frame's input.
    ///
    /// Returns `None` outside the `Playing` phase: the menu and game-over
    /// screens do not simulate. On the tick where the player dies this
    /// still returns the final snapshot, with `ended` set, and flips to
    /// `GameOver` so the next trigger is ignored.
    pub fn frame(&mut self, input: &TickInput) -> Option<FrameReport> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let world = self.world.as_mut()?;

        let events = world.update(input);
        let mut ended = None;
        for event in &events {
            if let WorldEvent::PlayerDied { final_score } = event {
                if *final_score > self.high_score {
                    self.high_score = *final_score;
                }
                self.phase = GamePhase::GameOver {
                    final_score: *final_score,
                };
                ended = Some(*final_score);
            }
        }

        Some(FrameReport {
            snapshot: world.snapshot(),
            high_score: self.high_score,
            ended,
        })
    }
}
