//! Curated reference connectome: the ground-truth wiring a learner circuit
//! is scored against.
//!
//! The table is a teaching subset of the C. elegans somatic connectome
//! covering three classic circuits: anterior gentle-touch avoidance,
//! posterior touch escape, and chemotaxis head steering. It is built once on
//! first access and never mutated.

use neurite_data::{BehaviorLabel, Connection, Neuron, NeuronKind, SynapseKind};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// A named sensory→command→motor grouping expected to produce a specific
/// behavior.
#[derive(Clone, Copy, Debug)]
pub struct Pathway {
    pub name: &'static str,
    /// Sensory neurons feeding the pathway; empty means any sensor suffices.
    pub required_sensory: &'static [&'static str],
    pub command_neurons: &'static [&'static str],
    pub motor_neurons: &'static [&'static str],
    pub expected_behavior: BehaviorLabel,
    pub description: &'static str,
}

/// A motor-neuron subgroup mapped to the behavior it drives.
#[derive(Clone, Copy, Debug)]
pub struct MotorGroup {
    pub label: BehaviorLabel,
    pub members: &'static [&'static str],
}

/// Motor groups in classification priority order.
static MOTOR_GROUPS: [MotorGroup; 3] = [
    MotorGroup {
        label: BehaviorLabel::MoveForward,
        members: &["DB1", "DB2", "VB1", "VB2"],
    },
    MotorGroup {
        label: BehaviorLabel::MoveBackward,
        members: &["DA1", "DA2", "VA1", "VA2"],
    },
    MotorGroup {
        label: BehaviorLabel::HeadWiggle,
        members: &["SMBD", "SMBV", "SMDD", "SMDV"],
    },
];

/// Pathways in detection priority order; the first match wins for circuits
/// realizing more than one.
static PATHWAYS: [Pathway; 3] = [
    Pathway {
        name: "Anterior Touch Avoidance",
        required_sensory: &["ALML", "ALMR", "AVM"],
        command_neurons: &["AVAL", "AVAR", "AVDL", "AVDR"],
        motor_neurons: &["DA1", "DA2", "VA1", "VA2"],
        expected_behavior: BehaviorLabel::MoveBackward,
        description: "Gentle touch to the head recruits the backward command \
                      interneurons and drives reversal",
    },
    Pathway {
        name: "Posterior Touch Escape",
        required_sensory: &["PLML", "PLMR"],
        command_neurons: &["AVBL", "AVBR", "PVCL", "PVCR"],
        motor_neurons: &["DB1", "DB2", "VB1", "VB2"],
        expected_behavior: BehaviorLabel::MoveForward,
        description: "Tail touch recruits the forward command interneurons \
                      and accelerates the animal away",
    },
    Pathway {
        name: "Chemotaxis",
        required_sensory: &["ASEL", "ASER"],
        command_neurons: &["AIYL", "AIYR", "AIZL", "AIZR"],
        motor_neurons: &["SMBD", "SMBV", "SMDD", "SMDV"],
        expected_behavior: BehaviorLabel::HeadWiggle,
        description: "Salt-sensing neurons steer the head toward an \
                      attractant through the AIY/AIZ relay",
    },
];

/// The fixed ground-truth table: neurons with their anatomical kinds, the
/// curated connection set, and lookup indexes over both.
#[derive(Debug)]
pub struct ReferenceConnectome {
    neurons: Vec<Neuron>,
    connections: Vec<Connection>,
    kinds: HashMap<String, NeuronKind>,
    edges: HashSet<(String, String)>,
}

impl ReferenceConnectome {
    fn curated() -> Self {
        let neurons = curated_neurons();
        let connections = curated_connections();
        let kinds = neurons.iter().map(|n| (n.id.clone(), n.kind)).collect();
        let edges = connections
            .iter()
            .map(|c| (c.from.clone(), c.to.clone()))
            .collect();
        Self {
            neurons,
            connections,
            kinds,
            edges,
        }
    }

    #[must_use]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    #[must_use]
    pub fn kind_of(&self, id: &str) -> Option<NeuronKind> {
        self.kinds.get(id).copied()
    }

    #[must_use]
    pub fn contains_connection(&self, from: &str, to: &str) -> bool {
        self.edges.contains(&(from.to_string(), to.to_string()))
    }

    #[must_use]
    pub fn pathways(&self) -> &'static [Pathway] {
        &PATHWAYS
    }

    #[must_use]
    pub fn motor_groups(&self) -> &'static [MotorGroup] {
        &MOTOR_GROUPS
    }
}

/// Process-wide reference connectome, built on first access.
pub fn reference() -> &'static ReferenceConnectome {
    static REFERENCE: OnceLock<ReferenceConnectome> = OnceLock::new();
    REFERENCE.get_or_init(ReferenceConnectome::curated)
}

fn curated_neurons() -> Vec<Neuron> {
    use NeuronKind::{Command, Interneuron, Motor, Sensory};

    let table: [(&str, NeuronKind); 31] = [
        // Touch and chemosensory layer
        ("ALML", Sensory),
        ("ALMR", Sensory),
        ("AVM", Sensory),
        ("PLML", Sensory),
        ("PLMR", Sensory),
        ("ASEL", Sensory),
        ("ASER", Sensory),
        // Chemotaxis relay
        ("AIYL", Interneuron),
        ("AIYR", Interneuron),
        ("AIZL", Interneuron),
        ("AIZR", Interneuron),
        // Command interneurons
        ("AVAL", Command),
        ("AVAR", Command),
        ("AVDL", Command),
        ("AVDR", Command),
        ("AVBL", Command),
        ("AVBR", Command),
        ("PVCL", Command),
        ("PVCR", Command),
        // Locomotion and head motor neurons
        ("DA1", Motor),
        ("DA2", Motor),
        ("VA1", Motor),
        ("VA2", Motor),
        ("DB1", Motor),
        ("DB2", Motor),
        ("VB1", Motor),
        ("VB2", Motor),
        ("SMBD", Motor),
        ("SMBV", Motor),
        ("SMDD", Motor),
        ("SMDV", Motor),
    ];

    table
        .into_iter()
        .map(|(id, kind)| Neuron::new(id, kind))
        .collect()
}

fn curated_connections() -> Vec<Connection> {
    use SynapseKind::{Chemical, Electrical};

    // Chemical weights come from synapse counts on the 1..=15 anatomical
    // scale; gap junctions carry a fixed strong coupling.
    let chemical: [(&str, &str, u8); 26] = [
        // Anterior touch avoidance
        ("ALML", "AVDL", 12),
        ("ALMR", "AVDR", 12),
        ("AVM", "AVDL", 9),
        ("AVM", "AVDR", 9),
        ("AVDL", "AVAL", 13),
        ("AVDR", "AVAR", 13),
        ("AVAL", "DA1", 14),
        ("AVAL", "VA1", 12),
        ("AVAR", "DA2", 14),
        ("AVAR", "VA2", 12),
        // Posterior touch escape
        ("PLML", "PVCL", 12),
        ("PLMR", "PVCR", 12),
        ("PVCL", "AVBL", 11),
        ("PVCR", "AVBR", 11),
        ("AVBL", "DB1", 14),
        ("AVBL", "VB1", 12),
        ("AVBR", "DB2", 14),
        ("AVBR", "VB2", 12),
        // Chemotaxis head steering
        ("ASEL", "AIYL", 13),
        ("ASER", "AIYR", 13),
        ("AIYL", "AIZL", 10),
        ("AIYR", "AIZR", 10),
        ("AIZL", "SMBD", 11),
        ("AIZR", "SMBV", 11),
        ("AIYL", "SMBD", 8),
        ("AIYR", "SMBV", 8),
    ];

    let mut connections: Vec<Connection> = chemical
        .into_iter()
        .map(|(from, to, count)| Connection::from_synapse_count(from, to, count, Chemical))
        .collect();

    for (from, to) in [("AVAL", "AVAR"), ("AVBL", "AVBR"), ("ASEL", "ASER")] {
        connections.push(Connection::new(from, to, 0.9, Electrical));
    }

    connections
}
