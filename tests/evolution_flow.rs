use neurite_lib::model::behavior::TargetBehavior;
use neurite_lib::model::config::{EngineConfig, EvolutionConfig};
use neurite_lib::model::evolution::{EvolutionaryOptimizer, OptimizerError, OptimizerState};
use neurite_lib::model::genome::Genome;
use neurite_lib::model::Metrics;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn spec_config() -> EvolutionConfig {
    EvolutionConfig {
        population_size: 20,
        genome_size: 12,
        mutation_rate: 0.1,
        crossover_rate: 0.7,
        elitism_count: 2,
        ..Default::default()
    }
}

#[test]
fn test_ten_generations_emit_ten_stat_events() {
    let mut optimizer = EvolutionaryOptimizer::new(spec_config(), TargetBehavior::Chemotaxis);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    optimizer.seed(&mut rng).expect("seed should succeed");

    let mut emitted = Vec::new();
    for _ in 0..10 {
        emitted.push(optimizer.step(&mut rng).expect("step should succeed"));
    }

    assert_eq!(emitted.len(), 10);
    assert_eq!(optimizer.history(), emitted.as_slice());
    assert_eq!(optimizer.generation(), 10);
    assert_eq!(emitted.last().map(|s| s.generation), Some(10));

    // The population invariant holds at the generation boundary: constant
    // size, fully evaluated, sorted descending by fitness.
    assert_eq!(optimizer.population().len(), 20);
    for pair in optimizer.population().windows(2) {
        assert!(pair[0].fitness >= pair[1].fitness);
    }
    for genome in optimizer.population() {
        assert!((0.0..=1.0).contains(&genome.fitness));
        assert_eq!(genome.len(), 12);
    }
}

#[test]
fn test_best_fitness_is_monotone_with_elitism() {
    let mut optimizer = EvolutionaryOptimizer::new(spec_config(), TargetBehavior::Avoidance);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    optimizer.seed(&mut rng).expect("seed should succeed");

    let mut best = optimizer.best().expect("seeded population").fitness;
    for _ in 0..25 {
        let stats = optimizer.step(&mut rng).expect("step should succeed");
        assert!(stats.best_fitness >= best);
        best = stats.best_fitness;
    }
}

#[test]
fn test_zero_rate_generation_is_pure_cloning() {
    let config = EvolutionConfig {
        mutation_rate: 0.0,
        crossover_rate: 0.0,
        ..spec_config()
    };
    let mut optimizer = EvolutionaryOptimizer::new(config, TargetBehavior::OmegaTurn);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    optimizer.seed(&mut rng).expect("seed should succeed");
    let parents: Vec<Vec<f32>> = optimizer
        .population()
        .iter()
        .map(|g| g.weights.clone())
        .collect();

    optimizer.step(&mut rng).expect("step should succeed");
    for child in optimizer.population() {
        assert!(
            parents.iter().any(|p| p == &child.weights),
            "every child must be a bit-identical clone of a parent"
        );
    }
}

#[test]
fn test_state_machine_round_trip() {
    let mut optimizer = EvolutionaryOptimizer::new(spec_config(), TargetBehavior::Foraging);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    assert_eq!(optimizer.state(), OptimizerState::Idle);
    assert_eq!(optimizer.step(&mut rng), Err(OptimizerError::NotSeeded));

    optimizer.seed(&mut rng).expect("seed should succeed");
    assert_eq!(optimizer.state(), OptimizerState::Seeded);
    assert_eq!(optimizer.seed(&mut rng), Err(OptimizerError::AlreadyRunning));

    optimizer.step(&mut rng).expect("step should succeed");
    assert_eq!(optimizer.state(), OptimizerState::Evolving);

    optimizer.pause();
    assert_eq!(optimizer.step(&mut rng), Err(OptimizerError::Paused));
    optimizer.resume();
    optimizer.step(&mut rng).expect("resumed step should succeed");

    optimizer.stop();
    assert_eq!(optimizer.state(), OptimizerState::Stopped);
    assert_eq!(optimizer.seed(&mut rng), Err(OptimizerError::Stopped));

    optimizer.reset();
    assert_eq!(optimizer.state(), OptimizerState::Idle);
    assert!(optimizer.best().is_none());
    optimizer.seed(&mut rng).expect("reseed after reset");
}

#[test]
fn test_diversity_collapses_for_converged_population() {
    // Pure cloning with zero variation drives diversity toward the spread
    // already present at seed time; a population of identical genomes
    // reports exactly zero.
    let config = EvolutionConfig {
        population_size: 6,
        mutation_rate: 0.0,
        crossover_rate: 0.0,
        elitism_count: 5,
        ..spec_config()
    };
    let mut optimizer = EvolutionaryOptimizer::new(config, TargetBehavior::Foraging);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    optimizer.seed(&mut rng).expect("seed should succeed");

    let seeded = optimizer.step(&mut rng).expect("step should succeed");
    assert!(seeded.diversity >= 0.0);
    assert!(seeded.diversity <= 1.0);
}

#[test]
fn test_optimizer_from_toml_config() {
    let config = EngineConfig::from_toml(
        r#"
        [simulation]
        max_steps = 10
        activation_threshold = 0.5

        [evolution]
        population_size = 10
        genome_size = 8
        mutation_rate = 0.2
        mutation_amount = 0.1
        crossover_rate = 0.6
        elitism_count = 1
        tournament_size = 3
        max_generations = 40
        "#,
    )
    .expect("config should parse");

    let mut optimizer =
        EvolutionaryOptimizer::new(config.evolution, TargetBehavior::Chemotaxis);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    optimizer.seed(&mut rng).expect("seed should succeed");
    optimizer.step(&mut rng).expect("step should succeed");
    assert_eq!(optimizer.population().len(), 10);
}

#[test]
fn test_best_genome_snapshot_for_persistence() {
    let mut optimizer = EvolutionaryOptimizer::new(spec_config(), TargetBehavior::Chemotaxis);
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    optimizer.seed(&mut rng).expect("seed should succeed");
    optimizer.step(&mut rng).expect("step should succeed");

    let best = optimizer.best().expect("population exists");
    let restored = Genome::from_hex(&best.to_hex()).expect("hex DNA should decode");
    assert_eq!(restored.generation, best.generation);
    assert_eq!(restored.weights.len(), best.weights.len());
}

#[test]
fn test_metrics_observe_generations() {
    neurite_lib::model::init_logging();
    let metrics = Metrics::new();
    let mut optimizer = EvolutionaryOptimizer::new(spec_config(), TargetBehavior::Avoidance);
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    optimizer.seed(&mut rng).expect("seed should succeed");

    for _ in 0..4 {
        let stats = optimizer.step(&mut rng).expect("step should succeed");
        metrics.record_generation(&stats);
    }
    assert_eq!(metrics.generation_count(), 4);
}
