use serde::{Deserialize, Serialize};

/// Lower bound of every gene in a genome.
pub const GENE_MIN: f32 = 0.0;
/// Upper bound of every gene in a genome.
pub const GENE_MAX: f32 = 1.0;

/// A candidate weight vector under evolution.
///
/// Weights stay in `[GENE_MIN, GENE_MAX]` and fitness in `[0.0, 1.0]` at all
/// times. A genome is immutable once its fitness is computed, except for the
/// generation tag on elite clones carried into the next generation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Genome {
    pub weights: Vec<f32>,
    pub fitness: f32,
    pub generation: u32,
}

impl Genome {
    /// Builds a genome from raw weights, clamping each gene into range.
    /// Fitness starts at zero until an evaluator scores it.
    #[must_use]
    pub fn new(weights: Vec<f32>, generation: u32) -> Self {
        let weights = weights
            .into_iter()
            .map(|w| w.clamp(GENE_MIN, GENE_MAX))
            .collect();
        Self {
            weights,
            fitness: 0.0,
            generation,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Serializes the genome to a hex DNA string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(bytes)
    }

    /// Deserializes a genome from a hex DNA string.
    pub fn from_hex(hex_str: &str) -> anyhow::Result<Self> {
        let bytes = hex::decode(hex_str)?;
        let genome = serde_json::from_slice(&bytes)?;
        Ok(genome)
    }
}
