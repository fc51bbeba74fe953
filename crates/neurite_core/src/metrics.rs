//! Engine metrics collection.
//!
//! Provides structured logging and counters for monitoring how the engine is
//! being exercised by its host. The collector is instance-owned: the engine
//! itself keeps no global state, so the host decides the collector's
//! lifetime.

use neurite_data::GenerationStats;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Counters for engine activity.
pub struct Metrics {
    simulation_count: AtomicU64,
    validation_count: AtomicU64,
    generation_count: AtomicU64,
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
            simulation_count: AtomicU64::new(0),
            validation_count: AtomicU64::new(0),
            generation_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed simulation run.
    pub fn record_simulation(&self, duration: Duration, activated: usize) {
        let run = self.simulation_count.fetch_add(1, Ordering::Relaxed) + 1;
        if run % 100 == 0 {
            tracing::info!(
                runs = run,
                activated = activated,
                duration_us = duration.as_micros() as u64,
                "Simulation run"
            );
        }
    }

    /// Records a completed validation with its overall score.
    pub fn record_validation(&self, overall_score: u32) {
        self.validation_count.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(overall = overall_score, "Validation scored");
    }

    /// Records one optimizer generation.
    pub fn record_generation(&self, stats: &GenerationStats) {
        let total = self.generation_count.fetch_add(1, Ordering::Relaxed) + 1;
        if total % 100 == 0 {
            tracing::info!(
                generations = total,
                best = stats.best_fitness,
                diversity = stats.diversity,
                "Evolution progress"
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

    #[must_use]
    pub fn simulation_count(&self) -> u64 {
        self.simulation_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn validation_count(&self) -> u64 {
        self.validation_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count.load(Ordering::Relaxed)
    }

    /// Elapsed time since the collector was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
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
