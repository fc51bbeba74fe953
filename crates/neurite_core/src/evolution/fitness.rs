//! Fitness evaluation: a closed-form score per target behavior over the
//! four named slices of a weight genome.
//!
//! Evaluation is pure given a fixed random draw: the same genome, target,
//! noise amplitude, and RNG state always produce the same score.

use neurite_data::{Genome, TargetBehavior};
use rand::Rng;

/// Base amplitude of the uniform fitness noise. The optimizer anneals it
/// toward zero as the run approaches its generation horizon.
pub const NOISE_AMPLITUDE: f32 = 0.1;

/// The four named slices of a genome's weight vector. Quarter boundaries;
/// remainder genes land in the inhibitory slice.
#[derive(Clone, Copy, Debug)]
pub struct GenomeSlices<'a> {
    pub sensory_inter: &'a [f32],
    pub inter_command: &'a [f32],
    pub command_motor: &'a [f32],
    pub inhibitory: &'a [f32],
}

/// Partitions a weight vector into its four functional slices.
#[must_use]
pub fn slices(weights: &[f32]) -> GenomeSlices<'_> {
    let quarter = weights.len() / 4;
    GenomeSlices {
        sensory_inter: &weights[..quarter],
        inter_command: &weights[quarter..2 * quarter],
        command_motor: &weights[2 * quarter..3 * quarter],
        inhibitory: &weights[3 * quarter..],
    }
}

/// Scores a genome for a target behavior, adding a bounded uniform noise
/// draw of the given amplitude, and clamps to `[0.0, 1.0]`.
pub fn evaluate<R: Rng>(
    genome: &Genome,
    target: TargetBehavior,
    noise_amplitude: f32,
    rng: &mut R,
) -> f32 {
    let base = base_score(&genome.weights, target);
    let noise = if noise_amplitude > 0.0 {
        rng.gen_range(-noise_amplitude..=noise_amplitude)
    } else {
        0.0
    };
    (base + noise).clamp(0.0, 1.0)
}

fn base_score(weights: &[f32], target: TargetBehavior) -> f32 {
    let s = slices(weights);
    match target {
        // Strong sensory relay feeding a strong relay-to-command stage.
        TargetBehavior::Chemotaxis => mean(s.sensory_inter) * mean(s.inter_command),
        // Escape wants hard motor drive backed by inhibition of competing
        // circuits.
        TargetBehavior::Avoidance => 0.7 * mean(s.command_motor) + 0.3 * mean(s.inhibitory),
        // Exploration wants the whole genome balanced around the midpoint.
        TargetBehavior::Foraging => 1.0 - 2.0 * (mean(weights) - 0.5).abs(),
        // A sharp turn wants asymmetric drive across the motor slice.
        TargetBehavior::OmegaTurn => {
            let cm = s.command_motor;
            if cm.len() < 2 {
                return 0.0;
            }
            let half = cm.len() / 2;
            (2.0 * (mean(&cm[..half]) - mean(&cm[half..])).abs()).clamp(0.0, 1.0)
        }
    }
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}
