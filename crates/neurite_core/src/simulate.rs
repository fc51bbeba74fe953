//! Discrete-time signal propagation over a circuit snapshot.
//!
//! Activation spreads monotonically: a neuron that fires stays active for
//! the rest of the run, so the loop reaches a fixed point after at most
//! `|neurons|` net state changes regardless of cycles. The step budget is a
//! second, configuration-level bound on top of that.

use crate::config::SimulationConfig;
use crate::connectome;
use neurite_data::{BehaviorLabel, Circuit, NeuronId, NeuronKind, SimulationOutcome, Stimulus};
use rand::Rng;
use std::collections::HashSet;

/// Propagates a stimulus through a circuit and classifies the emergent
/// behavior from the motor neurons that end up active.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignalPropagationSimulator {
    config: SimulationConfig,
}

impl SignalPropagationSimulator {
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Runs one simulation. The sensory Bernoulli draws are the only source
    /// of randomness; the same circuit, stimulus, and seed replay
    /// bit-identically.
    pub fn simulate<R: Rng>(
        &self,
        circuit: &Circuit,
        stimulus: &Stimulus,
        rng: &mut R,
    ) -> SimulationOutcome {
        let motor_present = circuit.count_of_kind(NeuronKind::Motor);

        if circuit.count_of_kind(NeuronKind::Sensory) == 0 {
            // Nothing can ever fire without a sensory layer.
            return SimulationOutcome {
                behavior: BehaviorLabel::Resting,
                confidence: if motor_present == 0 { 1.0 } else { 0.5 },
                activated: HashSet::new(),
            };
        }

        let strength = stimulus.strength.clamp(0.0, 1.0);
        let mut active: HashSet<NeuronId> = HashSet::new();
        for neuron in circuit.neurons_of_kind(NeuronKind::Sensory) {
            if rng.gen::<f32>() < strength {
                active.insert(neuron.id.clone());
            }
        }

        for _ in 0..self.config.max_steps {
            let mut fired: Vec<NeuronId> = Vec::new();
            for conn in &circuit.connections {
                if conn.weight.abs() < self.config.activation_threshold {
                    continue;
                }
                if !active.contains(conn.from.as_str()) || active.contains(conn.to.as_str()) {
                    continue;
                }
                // Dangling endpoints are skipped, not errors.
                if circuit.neuron(&conn.to).is_none() {
                    continue;
                }
                fired.push(conn.to.clone());
            }
            if fired.is_empty() {
                break;
            }
            active.extend(fired);
        }

        let (behavior, confidence) = classify(circuit, &active, motor_present);
        SimulationOutcome {
            behavior,
            confidence: confidence.clamp(0.0, 1.0),
            activated: active,
        }
    }
}

/// Maps the active motor subset onto a behavior label via the fixed
/// motor-group tables. The group with the most active members wins; ties go
/// to the earlier declared group.
fn classify(
    circuit: &Circuit,
    active: &HashSet<NeuronId>,
    motor_present: usize,
) -> (BehaviorLabel, f32) {
    let mut best: Option<(BehaviorLabel, usize, usize)> = None;
    for group in connectome::reference().motor_groups() {
        let hits = group
            .members
            .iter()
            .filter(|id| active.contains(**id))
            .count();
        if hits > 0 && best.map_or(true, |(_, best_hits, _)| hits > best_hits) {
            best = Some((group.label, hits, group.members.len()));
        }
    }

    match best {
        Some((label, hits, group_size)) => (label, hits as f32 / group_size as f32),
        None => {
            // No named motor group fired; the circuit rests. Confidence is
            // the fraction of placed motor neurons that stayed quiet.
            let active_motor = circuit
                .neurons_of_kind(NeuronKind::Motor)
                .filter(|n| active.contains(&n.id))
                .count();
            let confidence = if motor_present == 0 {
                1.0
            } else {
                (motor_present - active_motor) as f32 / motor_present as f32
            };
            (BehaviorLabel::Resting, confidence)
        }
    }
}
