//! Circuit scoring against the reference connectome.
//!
//! Scoring is a pure read of a circuit snapshot: connection accuracy against
//! the ground-truth edge set, completeness of the buildable reference edges,
//! a wiring-direction score from neuron-kind transitions, and detection of
//! the named pathway the circuit realizes. Connections with an endpoint
//! missing from the circuit are excluded from every count, never fatal.

pub mod feedback;

use crate::connectome::{self, Pathway, ReferenceConnectome};
use neurite_data::{Circuit, Connection, NeuronKind, ValidationResult};
use std::collections::{HashMap, HashSet};

/// Weighting of the three sub-scores in the overall score.
const ACCURACY_WEIGHT: f32 = 0.4;
const COMPLETENESS_WEIGHT: f32 = 0.35;
const PATHWAY_WEIGHT: f32 = 0.25;

/// Points per connection for the wiring-direction score, scaled by 25 and
/// clamped to 100.
const PATHWAY_POINT_SCALE: f32 = 25.0;

/// Scores learner circuits against the curated reference connectome.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceValidator {
    reference: &'static ReferenceConnectome,
}

impl Default for ReferenceValidator {
    fn default() -> Self {
        Self {
            reference: connectome::reference(),
        }
    }
}

impl ReferenceValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces the full scoring bundle for one circuit snapshot.
    #[must_use]
    pub fn validate(&self, circuit: &Circuit) -> ValidationResult {
        let scored = scorable_connections(circuit);

        let mut correct: Vec<Connection> = Vec::new();
        let mut extra: Vec<Connection> = Vec::new();
        for conn in &scored {
            if self.reference.contains_connection(&conn.from, &conn.to) {
                correct.push((*conn).clone());
            } else {
                extra.push((*conn).clone());
            }
        }

        let drawn: HashSet<(&str, &str)> = scored
            .iter()
            .map(|c| (c.from.as_str(), c.to.as_str()))
            .collect();

        let mut buildable = 0usize;
        let mut missing: Vec<Connection> = Vec::new();
        for conn in self.reference.connections() {
            if circuit.neuron(&conn.from).is_none() || circuit.neuron(&conn.to).is_none() {
                continue;
            }
            buildable += 1;
            if !drawn.contains(&(conn.from.as_str(), conn.to.as_str())) {
                missing.push(conn.clone());
            }
        }

        let accuracy_score = if scored.is_empty() {
            0.0
        } else {
            correct.len() as f32 / scored.len() as f32 * 100.0
        };
        let completeness_score = if buildable == 0 {
            0.0
        } else {
            (buildable - missing.len()) as f32 / buildable as f32 * 100.0
        };
        let pathway_score = wiring_direction_score(circuit, &scored);

        let overall_score = (ACCURACY_WEIGHT * accuracy_score
            + COMPLETENESS_WEIGHT * completeness_score
            + PATHWAY_WEIGHT * pathway_score)
            .round()
            .clamp(0.0, 100.0) as u32;

        let detected = detect_pathway(circuit);
        let biologically_plausible = extra.len() <= 2 * correct.len();

        let feedback = feedback::notes(&correct, &missing, &extra, detected);
        let badges = feedback::badges(feedback::BadgeInput {
            overall_score,
            accuracy_score,
            completeness_score,
            correct_count: correct.len(),
            neuron_count: circuit.neuron_count(),
            pathway_detected: detected.is_some(),
            biologically_plausible,
        });

        tracing::debug!(
            overall = overall_score,
            accuracy = accuracy_score,
            completeness = completeness_score,
            pathway = pathway_score,
            detected = detected.map(|p| p.name),
            "Circuit validated"
        );

        ValidationResult {
            overall_score,
            accuracy_score,
            completeness_score,
            pathway_score,
            grade: feedback::grade(overall_score).to_string(),
            feedback,
            badges,
            correct_connections: correct,
            missing_connections: missing,
            extra_connections: extra,
            detected_pathway: detected.map(|p| p.name.to_string()),
            biologically_plausible,
        }
    }
}

/// Finds the first declared pathway whose sensory (unless empty), command,
/// and motor sets all intersect the circuit's neurons. First match wins.
#[must_use]
pub fn detect_pathway(circuit: &Circuit) -> Option<&'static Pathway> {
    let ids: HashSet<&str> = circuit.neurons.iter().map(|n| n.id.as_str()).collect();
    let overlaps = |members: &[&str]| members.iter().any(|id| ids.contains(id));

    connectome::reference().pathways().iter().find(|p| {
        (p.required_sensory.is_empty() || overlaps(p.required_sensory))
            && overlaps(p.command_neurons)
            && overlaps(p.motor_neurons)
    })
}

/// The connections that participate in scoring: both endpoints placed, and
/// one logical edge per `(from, to)` pair (the last drawn wins).
fn scorable_connections(circuit: &Circuit) -> Vec<&Connection> {
    let mut last_index: HashMap<(&str, &str), usize> = HashMap::new();
    for (i, conn) in circuit.connections.iter().enumerate() {
        last_index.insert((conn.from.as_str(), conn.to.as_str()), i);
    }

    circuit
        .connections
        .iter()
        .enumerate()
        .filter(|(i, conn)| {
            last_index.get(&(conn.from.as_str(), conn.to.as_str())) == Some(i)
                && circuit.neuron(&conn.from).is_some()
                && circuit.neuron(&conn.to).is_some()
        })
        .map(|(_, conn)| conn)
        .collect()
}

/// Awards wiring-direction points per connection from the circuit's own
/// neuron kinds: sensory into the relay/command layer and relay/command onto
/// motors are full points, relay-to-relay is half.
fn wiring_direction_score(circuit: &Circuit, scored: &[&Connection]) -> f32 {
    use NeuronKind::{Command, Interneuron, Motor, Sensory};

    let mut points = 0.0f32;
    for conn in scored {
        let (Some(from), Some(to)) = (circuit.kind_of(&conn.from), circuit.kind_of(&conn.to))
        else {
            continue;
        };
        points += match (from, to) {
            (Sensory, Command | Interneuron) => 1.0,
            (Command | Interneuron, Motor) => 1.0,
            (Interneuron, Interneuron) => 0.5,
            _ => 0.0,
        };
    }
    (points * PATHWAY_POINT_SCALE).clamp(0.0, 100.0)
}
