//! # Neurite Core
//!
//! The computational engine behind the Neurite circuit-building application.
//!
//! This crate contains three closed, testable pieces:
//! - Signal propagation: discrete-time activation spread over a learner-built
//!   circuit, predicting an emergent behavior
//! - Reference validation: multi-factor scoring of a circuit against the
//!   curated reference connectome, with pathway detection
//! - Evolutionary optimization: a genetic algorithm over weight genomes,
//!   stepped one generation at a time by the caller
//!
//! ## Architecture
//!
//! The engine holds no hidden global state: every function takes its circuit,
//! genome, or population explicitly, and every randomized operation takes an
//! injected `Rng` so runs replay bit-identically from a seed. The reference
//! connectome is the single process-wide immutable table, built once on first
//! access.
//!
//! ## Example
//!
//! ```
//! use neurite_core::simulate::SignalPropagationSimulator;
//! use neurite_data::{Circuit, Connection, NeuronKind, Stimulus, StimulusKind, SynapseKind};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut circuit = Circuit::new();
//! circuit.add_neuron("ASEL", NeuronKind::Sensory);
//! circuit.add_neuron("AIYL", NeuronKind::Interneuron);
//! circuit.add_neuron("SMBD", NeuronKind::Motor);
//! circuit.upsert_connection(Connection::new("ASEL", "AIYL", 0.8, SynapseKind::Chemical));
//! circuit.upsert_connection(Connection::new("AIYL", "SMBD", 0.75, SynapseKind::Chemical));
//!
//! let simulator = SignalPropagationSimulator::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let outcome = simulator.simulate(
//!     &circuit,
//!     &Stimulus::new(StimulusKind::SmellFood, 1.0),
//!     &mut rng,
//! );
//! assert!(outcome.activated.contains("SMBD"));
//! ```

/// Engine configuration loaded from `config.toml`
pub mod config;
/// Curated reference connectome, pathway catalog, and motor-group tables
pub mod connectome;
/// Genetic-algorithm weight optimizer and fitness evaluation
pub mod evolution;
/// Engine metrics collection and logging setup
pub mod metrics;
/// Discrete-time signal propagation over circuit snapshots
pub mod simulate;
/// Circuit scoring against the reference connectome
pub mod validate;

pub use config::{EngineConfig, EvolutionConfig, SimulationConfig};
pub use connectome::{reference, MotorGroup, Pathway, ReferenceConnectome};
pub use evolution::{EvolutionaryOptimizer, OptimizerError, OptimizerState};
pub use metrics::{init_logging, Metrics};
pub use simulate::SignalPropagationSimulator;
pub use validate::ReferenceValidator;
