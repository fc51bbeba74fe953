//! Shared data types for the Neurite engine.
//!
//! Everything here is plain data: circuit snapshots produced by the UI
//! layer, stimulus/behavior vocabulary, genomes, and the result bundles the
//! engine hands back to its collaborators. Serialization of these types to
//! any wire or file format is the collaborators' responsibility.

pub mod data;

pub use data::behavior::{BehaviorLabel, Stimulus, StimulusKind, TargetBehavior};
pub use data::circuit::{Circuit, Connection, Neuron, NeuronId, NeuronKind, SynapseKind};
pub use data::genome::{Genome, GENE_MAX, GENE_MIN};
pub use data::report::{GenerationStats, SimulationOutcome, ValidationResult};
