//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and metrics tracking for monitoring
//! simulation performance and health.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Metrics collector for a simulation session.
pub struct Metrics {
    tick_count: AtomicU64,
    creature_count: AtomicU64,
    food_count: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            creature_count: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, creatures: usize, food: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.creature_count
            .store(creatures as u64, Ordering::Relaxed);
        self.food_count.store(food as u64, Ordering::Relaxed);

        // Log at info level every 600 ticks (~10s at 60 Hz)
        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick.is_multiple_of(600) {
            tracing::info!(
                tick = tick,
                creatures = creatures,
                food = food,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current value of a named counter.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    /// Gets the current tick count.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Gets the current creature count.
    #[must_use]
    pub fn creature_count(&self) -> u64 {
        self.creature_count.load(Ordering::Relaxed)
    }

    /// Gets the current food count.
    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(
            event_type = event_type,
            details = details,
            "Simulation event"
        );
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
