use serde::{Deserialize, Serialize};

/// Identifier of a neuron. Identity is the id; two neurons with the same id
/// are the same neuron.
pub type NeuronId = String;

/// Functional class of a neuron.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NeuronKind {
    /// Receives external stimuli.
    Sensory,
    /// Internal relay between the sensory and command layers.
    Interneuron,
    /// Drives a motor program.
    Command,
    /// Produces muscle output.
    Motor,
}

/// Kind of synaptic link between two neurons.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SynapseKind {
    /// Directed chemical synapse.
    Chemical,
    /// Gap junction.
    Electrical,
}

/// A placed neuron. The kind is immutable once placed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Neuron {
    pub id: NeuronId,
    pub kind: NeuronKind,
}

impl Neuron {
    #[must_use]
    pub fn new(id: impl Into<NeuronId>, kind: NeuronKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// A weighted directed edge between two neurons.
///
/// The weight is always kept in `[-1.0, 1.0]`; constructors clamp.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub from: NeuronId,
    pub to: NeuronId,
    pub weight: f32,
    pub kind: SynapseKind,
}

impl Connection {
    #[must_use]
    pub fn new(
        from: impl Into<NeuronId>,
        to: impl Into<NeuronId>,
        weight: f32,
        kind: SynapseKind,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: weight.clamp(-1.0, 1.0),
            kind,
        }
    }

    /// Builds a chemical connection from a synapse count on the 1..=15
    /// anatomical scale, normalized onto `(0.0, 1.0]`.
    #[must_use]
    pub fn from_synapse_count(
        from: impl Into<NeuronId>,
        to: impl Into<NeuronId>,
        count: u8,
        kind: SynapseKind,
    ) -> Self {
        let count = count.clamp(1, 15);
        Self::new(from, to, f32::from(count) / 15.0, kind)
    }
}

/// A learner-built circuit snapshot: a set of neurons plus the connections
/// drawn between them.
///
/// Circuits are created and mutated by the UI layer; the engine only reads
/// snapshots. The builder helpers below enforce the last-write-wins rule for
/// duplicate ids and duplicate `(from, to)` edges, but the engine never
/// assumes a snapshot went through them: connections referencing unknown
/// neuron ids are tolerated and skipped by every consumer.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Circuit {
    pub neurons: Vec<Neuron>,
    pub connections: Vec<Connection>,
}

impl Circuit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a neuron. Re-placing an existing id replaces it (last write
    /// wins, no duplicate entries).
    pub fn add_neuron(&mut self, id: impl Into<NeuronId>, kind: NeuronKind) {
        let id = id.into();
        if let Some(existing) = self.neurons.iter_mut().find(|n| n.id == id) {
            existing.kind = kind;
        } else {
            self.neurons.push(Neuron { id, kind });
        }
    }

    /// Draws a connection. A duplicate `(from, to)` pair replaces the
    /// existing edge; there are no multigraph semantics.
    pub fn upsert_connection(&mut self, connection: Connection) {
        if let Some(existing) = self
            .connections
            .iter_mut()
            .find(|c| c.from == connection.from && c.to == connection.to)
        {
            *existing = connection;
        } else {
            self.connections.push(connection);
        }
    }

    #[must_use]
    pub fn neuron(&self, id: &str) -> Option<&Neuron> {
        self.neurons.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn kind_of(&self, id: &str) -> Option<NeuronKind> {
        self.neuron(id).map(|n| n.kind)
    }

    #[must_use]
    pub fn contains_connection(&self, from: &str, to: &str) -> bool {
        self.connections.iter().any(|c| c.from == from && c.to == to)
    }

    #[must_use]
    pub fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn neurons_of_kind(&self, kind: NeuronKind) -> impl Iterator<Item = &Neuron> {
        self.neurons.iter().filter(move |n| n.kind == kind)
    }

    #[must_use]
    pub fn count_of_kind(&self, kind: NeuronKind) -> usize {
        self.neurons_of_kind(kind).count()
    }
}
