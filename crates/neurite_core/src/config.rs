//! Configuration management for engine parameters.
//!
//! Strongly-typed configuration structures that map to a `config.toml` file.
//! Defaults are hardcoded in the `Default` impls; a toml file overrides them.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [simulation]
//! max_steps = 10
//! activation_threshold = 0.5
//!
//! [evolution]
//! population_size = 20
//! genome_size = 12
//! mutation_rate = 0.1
//! ```

use serde::{Deserialize, Serialize};

/// Signal-propagation parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Step budget bounding every propagation run.
    pub max_steps: u32,
    /// Minimum `|weight|` for a connection to carry activation.
    pub activation_threshold: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_steps: 10,
            activation_threshold: 0.5,
        }
    }
}

/// Genetic-algorithm hyperparameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub genome_size: usize,
    /// Per-gene mutation probability.
    pub mutation_rate: f32,
    /// Half-width of the uniform mutation perturbation.
    pub mutation_amount: f32,
    /// Probability that a child comes from single-point crossover rather
    /// than a clone of its first parent.
    pub crossover_rate: f32,
    /// Genomes carried unchanged into the next generation.
    pub elitism_count: usize,
    /// Sample size for tournament selection.
    pub tournament_size: usize,
    /// Annealing horizon for fitness noise; progress past it clamps to 1.
    pub max_generations: u32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            genome_size: 12,
            mutation_rate: 0.1,
            mutation_amount: 0.15,
            crossover_rate: 0.7,
            elitism_count: 2,
            tournament_size: 3,
            max_generations: 100,
        }
    }
}

/// Top-level engine configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub simulation: SimulationConfig,
    pub evolution: EvolutionConfig,
}

impl EngineConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        let sim = &self.simulation;
        anyhow::ensure!(sim.max_steps > 0, "Propagation step budget must be positive");
        anyhow::ensure!(
            sim.max_steps <= 1000,
            "Propagation step budget too large (max 1000)"
        );
        anyhow::ensure!(
            sim.activation_threshold > 0.0 && sim.activation_threshold <= 1.0,
            "Activation threshold must be in (0, 1]"
        );

        self.evolution.validate()
    }

    /// Parses and validates configuration from toml content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable content hash of the configuration, for stamping reproducible
    /// runs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.simulation).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl EvolutionConfig {
    /// Validates the GA hyperparameters on their own; the optimizer calls
    /// this at seed time.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.population_size >= 2,
            "Population size must be at least 2"
        );
        anyhow::ensure!(
            self.population_size <= 10_000,
            "Population size too large (max 10000)"
        );
        anyhow::ensure!(
            self.genome_size >= 4,
            "Genome size must cover the four weight slices (min 4)"
        );
        anyhow::ensure!(self.genome_size <= 4096, "Genome size too large (max 4096)");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.mutation_rate),
            "Mutation rate must be in [0, 1]"
        );
        anyhow::ensure!(
            self.mutation_amount > 0.0 && self.mutation_amount <= 1.0,
            "Mutation amount must be in (0, 1]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.crossover_rate),
            "Crossover rate must be in [0, 1]"
        );
        anyhow::ensure!(
            self.elitism_count < self.population_size,
            "Elitism count must leave room for offspring"
        );
        anyhow::ensure!(
            self.tournament_size >= 1,
            "Tournament size must be at least 1"
        );
        anyhow::ensure!(self.max_generations >= 1, "Max generations must be positive");
        Ok(())
    }
}
