//! Qualitative feedback, grades, and badges derived from validation counts.
//!
//! Wording here is presentation-level; the trigger conditions are the tested
//! contract.

use crate::connectome::Pathway;
use neurite_data::Connection;

/// Letter grade for an overall score.
#[must_use]
pub fn grade(overall_score: u32) -> &'static str {
    match overall_score {
        95..=u32::MAX => "A+",
        85..=94 => "A",
        70..=84 => "B",
        55..=69 => "C",
        40..=54 => "D",
        _ => "F",
    }
}

/// How many missing edges a suggestion note lists at most.
const SUGGESTION_LIMIT: usize = 3;
/// Missing-edge count above which no suggestion is offered.
const SUGGESTION_CUTOFF: usize = 5;

/// Deterministic learner-facing notes from the validation counts.
#[must_use]
pub fn notes(
    correct: &[Connection],
    missing: &[Connection],
    extra: &[Connection],
    pathway: Option<&'static Pathway>,
) -> Vec<String> {
    let mut notes = Vec::new();

    if !correct.is_empty() {
        notes.push(format!(
            "{} of your connections match the real connectome. Nice wiring!",
            correct.len()
        ));
    }

    if !missing.is_empty() && missing.len() <= SUGGESTION_CUTOFF {
        let examples: Vec<String> = missing
            .iter()
            .take(SUGGESTION_LIMIT)
            .map(|c| format!("{}\u{2192}{}", c.from, c.to))
            .collect();
        notes.push(format!(
            "The real worm also wires {}. Try adding those.",
            examples.join(", ")
        ));
    }

    if !extra.is_empty() {
        notes.push(format!(
            "{} connection(s) do not exist in the real worm. Extra wiring can \
             short-circuit the behavior.",
            extra.len()
        ));
    }

    if let Some(pathway) = pathway {
        notes.push(format!(
            "Your circuit realizes the {} pathway: {}.",
            pathway.name, pathway.description
        ));
    }

    notes
}

/// Counts a badge decision is made from.
#[derive(Clone, Copy, Debug)]
pub struct BadgeInput {
    pub overall_score: u32,
    pub accuracy_score: f32,
    pub completeness_score: f32,
    pub correct_count: usize,
    pub neuron_count: usize,
    pub pathway_detected: bool,
    pub biologically_plausible: bool,
}

/// Badges earned by one validated circuit, in a fixed order.
#[must_use]
pub fn badges(input: BadgeInput) -> Vec<String> {
    let mut badges = Vec::new();
    if input.overall_score == 100 {
        badges.push("Perfect Circuit".to_string());
    }
    if input.accuracy_score >= 90.0 {
        badges.push("Sharpshooter".to_string());
    }
    if input.completeness_score >= 90.0 {
        badges.push("Completionist".to_string());
    }
    if input.pathway_detected {
        badges.push("Pathway Pioneer".to_string());
    }
    if input.correct_count >= 10 {
        badges.push("Master Electrician".to_string());
    }
    if input.neuron_count >= 10 {
        badges.push("Network Architect".to_string());
    }
    if input.biologically_plausible && input.overall_score >= 70 {
        badges.push("Biologically Plausible".to_string());
    }
    badges
}
