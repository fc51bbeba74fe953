//! Genetic-algorithm weight optimizer.
//!
//! The optimizer owns its population exclusively and is driven from outside:
//! every call to [`EvolutionaryOptimizer::step`] performs exactly one
//! generation and returns, so any scheduler controls cadence and cancelling
//! a run is simply not calling `step` again. A generation always completes
//! in full, which keeps the population invariant (fully evaluated, sorted
//! descending by fitness, constant size) intact at every observable moment.

pub mod error;
pub mod fitness;

pub use error::{OptimizerError, Result};

use crate::config::EvolutionConfig;
use fitness::NOISE_AMPLITUDE;
use neurite_data::{GenerationStats, Genome, TargetBehavior, GENE_MAX, GENE_MIN};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Lifecycle of an optimizer instance.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OptimizerState {
    /// No population.
    Idle,
    /// Population created and evaluated, no generation stepped yet.
    Seeded,
    /// At least one generation stepped.
    Evolving,
    /// Host paused the run; population intact.
    Paused,
    /// Host stopped the run; reset before seeding again.
    Stopped,
}

/// Evolves a population of weight genomes toward a target behavior.
#[derive(Clone, Debug)]
pub struct EvolutionaryOptimizer {
    config: EvolutionConfig,
    target: TargetBehavior,
    state: OptimizerState,
    population: Vec<Genome>,
    generation: u32,
    history: Vec<GenerationStats>,
}

impl EvolutionaryOptimizer {
    #[must_use]
    pub fn new(config: EvolutionConfig, target: TargetBehavior) -> Self {
        Self {
            config,
            target,
            state: OptimizerState::Idle,
            population: Vec::new(),
            generation: 0,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> OptimizerState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn target(&self) -> TargetBehavior {
        self.target
    }

    /// The current population, sorted descending by fitness.
    #[must_use]
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// The fittest genome, if a population exists.
    #[must_use]
    pub fn best(&self) -> Option<&Genome> {
        self.population.first()
    }

    /// Stats of every generation stepped since the last seed.
    #[must_use]
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Creates and evaluates the initial population.
    ///
    /// Seeding anywhere but `Idle` is a caller error: a running optimizer
    /// must be reset first so the population ownership window stays clean.
    pub fn seed<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        match self.state {
            OptimizerState::Idle => {}
            OptimizerState::Stopped => return Err(OptimizerError::Stopped),
            _ => return Err(OptimizerError::AlreadyRunning),
        }
        self.config
            .validate()
            .map_err(|e| OptimizerError::InvalidParameters(e.to_string()))?;

        self.population = (0..self.config.population_size)
            .map(|_| {
                let weights = (0..self.config.genome_size)
                    .map(|_| rng.gen_range(GENE_MIN..=GENE_MAX))
                    .collect();
                let mut genome = Genome::new(weights, 0);
                genome.fitness = fitness::evaluate(&genome, self.target, NOISE_AMPLITUDE, rng);
                genome
            })
            .collect();
        sort_by_fitness(&mut self.population);

        self.generation = 0;
        self.history.clear();
        self.state = OptimizerState::Seeded;

        tracing::info!(
            population = self.config.population_size,
            genome_size = self.config.genome_size,
            target = ?self.target,
            "Optimizer seeded"
        );
        Ok(())
    }

    /// Runs exactly one generation and returns its stats.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<GenerationStats> {
        match self.state {
            OptimizerState::Seeded | OptimizerState::Evolving => {}
            OptimizerState::Idle => return Err(OptimizerError::NotSeeded),
            OptimizerState::Paused => return Err(OptimizerError::Paused),
            OptimizerState::Stopped => return Err(OptimizerError::Stopped),
        }

        let next_generation = self.generation + 1;
        let noise_amplitude = self.annealed_noise(next_generation);

        let mut next: Vec<Genome> = Vec::with_capacity(self.config.population_size);
        for elite in self.population.iter().take(self.config.elitism_count) {
            let mut elite = elite.clone();
            elite.generation = next_generation;
            next.push(elite);
        }

        while next.len() < self.config.population_size {
            let parent1 = tournament_select(&self.population, self.config.tournament_size, rng);
            let parent2 = tournament_select(&self.population, self.config.tournament_size, rng);

            let mut weights = if rng.gen::<f32>() < self.config.crossover_rate {
                single_point_crossover(&parent1.weights, &parent2.weights, rng)
            } else {
                parent1.weights.clone()
            };
            mutate(
                &mut weights,
                self.config.mutation_rate,
                self.config.mutation_amount,
                rng,
            );

            let mut child = Genome::new(weights, next_generation);
            child.fitness = fitness::evaluate(&child, self.target, noise_amplitude, rng);
            next.push(child);
        }

        sort_by_fitness(&mut next);
        self.population = next;
        self.generation = next_generation;
        self.state = OptimizerState::Evolving;

        let stats = GenerationStats {
            generation: next_generation,
            best_fitness: self.population[0].fitness,
            avg_fitness: self.population.iter().map(|g| g.fitness).sum::<f32>()
                / self.population.len() as f32,
            diversity: diversity(&self.population),
        };
        self.history.push(stats);

        tracing::debug!(
            generation = stats.generation,
            best = stats.best_fitness,
            avg = stats.avg_fitness,
            diversity = stats.diversity,
            "Generation complete"
        );
        Ok(stats)
    }

    /// Pauses a running optimizer; no-op in other states.
    pub fn pause(&mut self) {
        if matches!(
            self.state,
            OptimizerState::Seeded | OptimizerState::Evolving
        ) {
            self.state = OptimizerState::Paused;
        }
    }

    /// Resumes a paused optimizer; no-op in other states.
    pub fn resume(&mut self) {
        if self.state == OptimizerState::Paused {
            self.state = OptimizerState::Evolving;
        }
    }

    /// Stops the run. The population survives for inspection until `reset`.
    pub fn stop(&mut self) {
        if self.state != OptimizerState::Idle {
            self.state = OptimizerState::Stopped;
        }
    }

    /// Drops the population and returns to `Idle`, the only state `seed`
    /// accepts.
    pub fn reset(&mut self) {
        self.population.clear();
        self.history.clear();
        self.generation = 0;
        self.state = OptimizerState::Idle;
    }

    /// Noise amplitude for a generation: the base amplitude annealed
    /// linearly toward zero over the configured horizon.
    fn annealed_noise(&self, generation: u32) -> f32 {
        let progress = (generation as f32 / self.config.max_generations as f32).min(1.0);
        NOISE_AMPLITUDE * (1.0 - progress)
    }
}

/// Tournament selection: sample `k` genomes and keep the fittest.
fn tournament_select<'a, R: Rng>(
    population: &'a [Genome],
    tournament_size: usize,
    rng: &mut R,
) -> &'a Genome {
    population
        .choose_multiple(rng, tournament_size.min(population.len()))
        .max_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap_or(Ordering::Equal))
        .unwrap_or(&population[0])
}

/// Single-point crossover: genes up to the cut come from the first parent,
/// the rest from the second.
fn single_point_crossover<R: Rng>(parent1: &[f32], parent2: &[f32], rng: &mut R) -> Vec<f32> {
    let point = rng.gen_range(1..parent1.len());
    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Per-gene mutation: a bounded uniform perturbation, clamped back into the
/// gene range.
fn mutate<R: Rng>(weights: &mut [f32], rate: f32, amount: f32, rng: &mut R) {
    for gene in weights.iter_mut() {
        if rng.gen::<f32>() < rate {
            *gene += rng.gen_range(-amount..amount);
            *gene = gene.clamp(GENE_MIN, GENE_MAX);
        }
    }
}

fn sort_by_fitness(population: &mut [Genome]) {
    population.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
}

/// Mean pairwise L1 distance between weight vectors, normalized by genome
/// length. Zero for a population of clones.
fn diversity(population: &[Genome]) -> f32 {
    if population.len() < 2 {
        return 0.0;
    }
    let genome_len = population[0].weights.len().max(1);
    let mut total = 0.0f32;
    let mut pairs = 0u32;
    for (i, a) in population.iter().enumerate() {
        for b in &population[i + 1..] {
            total += a
                .weights
                .iter()
                .zip(&b.weights)
                .map(|(x, y)| (x - y).abs())
                .sum::<f32>();
            pairs += 1;
        }
    }
    total / pairs as f32 / genome_len as f32
}
