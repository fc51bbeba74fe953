use super::behavior::BehaviorLabel;
use super::circuit::{Connection, NeuronId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of one signal-propagation run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationOutcome {
    /// Predicted emergent behavior.
    pub behavior: BehaviorLabel,
    /// Confidence in the prediction, in `[0.0, 1.0]`.
    pub confidence: f32,
    /// Every neuron that ended the run active.
    pub activated: HashSet<NeuronId>,
}

/// Scoring bundle produced by validating a circuit against the reference
/// connectome.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    /// Weighted blend of the three sub-scores, rounded to `0..=100`.
    pub overall_score: u32,
    /// Share of drawn connections that exist in the reference, as a percent.
    pub accuracy_score: f32,
    /// Share of buildable reference connections actually drawn, as a percent.
    pub completeness_score: f32,
    /// Wiring-direction score from neuron-kind transitions, as a percent.
    pub pathway_score: f32,
    /// Letter grade derived from the overall score.
    pub grade: String,
    /// Qualitative notes for the learner.
    pub feedback: Vec<String>,
    /// Achievement badges earned by this circuit.
    pub badges: Vec<String>,
    /// Drawn connections confirmed by the reference connectome.
    pub correct_connections: Vec<Connection>,
    /// Reference connections buildable from the placed neurons but not drawn.
    pub missing_connections: Vec<Connection>,
    /// Drawn connections absent from the reference connectome.
    pub extra_connections: Vec<Connection>,
    /// Name of the first reference pathway this circuit realizes, if any.
    pub detected_pathway: Option<String>,
    /// Whether the extra wiring stays within plausible bounds.
    pub biologically_plausible: bool,
}

/// Per-generation statistics emitted by the optimizer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerationStats {
    pub generation: u32,
    pub best_fitness: f32,
    pub avg_fitness: f32,
    /// Mean pairwise L1 distance between weight vectors, normalized by
    /// genome length.
    pub diversity: f32,
}
