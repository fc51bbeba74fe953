use serde::{Deserialize, Serialize};

/// Kind of external stimulus applied to a circuit.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StimulusKind {
    /// Gentle touch to the head.
    TouchHead,
    /// Gentle touch to the tail.
    TouchTail,
    /// Attractive odor.
    SmellFood,
}

/// A stimulus descriptor: what is applied and how strongly.
///
/// Strength is the per-sensory-neuron activation probability and is always
/// kept in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Stimulus {
    pub kind: StimulusKind,
    pub strength: f32,
}

impl Stimulus {
    #[must_use]
    pub fn new(kind: StimulusKind, strength: f32) -> Self {
        Self {
            kind,
            strength: strength.clamp(0.0, 1.0),
        }
    }
}

/// Emergent behavior vocabulary shared by the simulator and the validator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BehaviorLabel {
    MoveForward,
    MoveBackward,
    HeadWiggle,
    Resting,
}

/// Behavior the weight optimizer is asked to evolve toward.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TargetBehavior {
    /// Steering toward a chemical gradient.
    Chemotaxis,
    /// Reflexive withdrawal from an aversive stimulus.
    Avoidance,
    /// Balanced exploratory locomotion.
    Foraging,
    /// Sharp reorientation turn.
    OmegaTurn,
}
