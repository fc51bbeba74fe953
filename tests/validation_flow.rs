use neurite_lib::model::circuit::{Circuit, Connection, NeuronKind, SynapseKind};
use neurite_lib::model::connectome;
use neurite_lib::model::validate::ReferenceValidator;

fn reference_edge(from: &str, to: &str) -> Connection {
    connectome::reference()
        .connections()
        .iter()
        .find(|c| c.from == from && c.to == to)
        .unwrap_or_else(|| panic!("{from}->{to} should be a reference edge"))
        .clone()
}

/// Places every neuron of the anterior touch pathway and draws every
/// reference edge buildable between them.
fn full_anterior_touch_circuit() -> Circuit {
    let mut circuit = Circuit::new();
    let reference = connectome::reference();
    let members = [
        "ALML", "ALMR", "AVM", "AVDL", "AVDR", "AVAL", "AVAR", "DA1", "DA2", "VA1", "VA2",
    ];
    for id in members {
        let kind = reference.kind_of(id).expect("curated neuron");
        circuit.add_neuron(id, kind);
    }
    for conn in reference.connections() {
        if members.contains(&conn.from.as_str()) && members.contains(&conn.to.as_str()) {
            circuit.upsert_connection(conn.clone());
        }
    }
    circuit
}

#[test]
fn test_no_connections_scores_zero_everywhere() {
    let mut circuit = Circuit::new();
    circuit.add_neuron("ASEL", NeuronKind::Sensory);
    circuit.add_neuron("AIYL", NeuronKind::Interneuron);

    let result = ReferenceValidator::new().validate(&circuit);
    assert_eq!(result.accuracy_score, 0.0);
    // ASEL->AIYL is buildable but never drawn.
    assert_eq!(result.completeness_score, 0.0);
    assert_eq!(result.pathway_score, 0.0);
    assert!(result.missing_connections.len() > 0);
}

#[test]
fn test_empty_circuit_never_crashes() {
    let result = ReferenceValidator::new().validate(&Circuit::new());
    assert_eq!(result.overall_score, 0);
    assert_eq!(result.grade, "F");
    assert!(result.feedback.is_empty());
    assert!(result.biologically_plausible);
}

#[test]
fn test_adding_reference_edges_never_lowers_accuracy() {
    let validator = ReferenceValidator::new();
    let mut circuit = Circuit::new();
    let reference = connectome::reference();
    for id in ["ALML", "AVDL", "AVAL", "DA1"] {
        circuit.add_neuron(id, reference.kind_of(id).expect("curated neuron"));
    }
    // One wrong edge to start from a non-trivial denominator.
    circuit.upsert_connection(Connection::new("DA1", "ALML", 0.9, SynapseKind::Chemical));

    let mut previous = validator.validate(&circuit).accuracy_score;
    for (from, to) in [("ALML", "AVDL"), ("AVDL", "AVAL"), ("AVAL", "DA1")] {
        circuit.upsert_connection(reference_edge(from, to));
        let accuracy = validator.validate(&circuit).accuracy_score;
        assert!(
            accuracy >= previous,
            "accuracy dropped from {previous} to {accuracy} after adding {from}->{to}"
        );
        previous = accuracy;
    }
}

#[test]
fn test_full_pathway_circuit_is_perfect() {
    let result = ReferenceValidator::new().validate(&full_anterior_touch_circuit());

    assert_eq!(result.accuracy_score, 100.0);
    assert_eq!(result.completeness_score, 100.0);
    assert_eq!(result.pathway_score, 100.0);
    assert_eq!(result.overall_score, 100);
    assert_eq!(result.grade, "A+");
    assert_eq!(
        result.detected_pathway.as_deref(),
        Some("Anterior Touch Avoidance")
    );
    assert!(result.biologically_plausible);
    // Perfect score, accuracy, completeness, pathway, >=10 correct,
    // >=10 neurons, and plausibility badges all fire.
    assert_eq!(result.badges.len(), 7);
}

#[test]
fn test_pathway_score_from_type_transitions_alone() {
    // Invented ids still earn wiring-direction points; only accuracy and
    // completeness need the reference table.
    let mut circuit = Circuit::new();
    circuit.add_neuron("S1", NeuronKind::Sensory);
    circuit.add_neuron("C1", NeuronKind::Command);
    circuit.add_neuron("M1", NeuronKind::Motor);
    circuit.add_neuron("M2", NeuronKind::Motor);
    circuit.upsert_connection(Connection::new("S1", "C1", 0.8, SynapseKind::Chemical));
    circuit.upsert_connection(Connection::new("C1", "M1", 0.8, SynapseKind::Chemical));
    circuit.upsert_connection(Connection::new("C1", "M2", 0.8, SynapseKind::Chemical));
    circuit.upsert_connection(Connection::new("S1", "M1", 0.8, SynapseKind::Chemical));

    let result = ReferenceValidator::new().validate(&circuit);
    // 1 + 1 + 1 + 0 points, times 25.
    assert_eq!(result.pathway_score, 75.0);
    assert_eq!(result.accuracy_score, 0.0);
    assert!(result.detected_pathway.is_none());
}

#[test]
fn test_dangling_connections_are_silently_excluded() {
    let validator = ReferenceValidator::new();
    let mut circuit = full_anterior_touch_circuit();
    let clean = validator.validate(&circuit);

    circuit.upsert_connection(Connection::new("ALML", "GHOST", 0.9, SynapseKind::Chemical));
    circuit.upsert_connection(Connection::new("PHANTOM", "DA1", 0.9, SynapseKind::Chemical));
    let with_dangling = validator.validate(&circuit);

    assert_eq!(with_dangling.accuracy_score, clean.accuracy_score);
    assert_eq!(with_dangling.overall_score, clean.overall_score);
    assert_eq!(
        with_dangling.extra_connections.len(),
        clean.extra_connections.len()
    );
}

#[test]
fn test_plausibility_boundary_at_twice_the_correct_count() {
    let validator = ReferenceValidator::new();
    let mut circuit = Circuit::new();
    let reference = connectome::reference();
    for id in ["ALML", "AVDL"] {
        circuit.add_neuron(id, reference.kind_of(id).expect("curated neuron"));
    }
    circuit.upsert_connection(reference_edge("ALML", "AVDL"));
    circuit.upsert_connection(Connection::new("AVDL", "ALML", 0.5, SynapseKind::Chemical));
    circuit.add_neuron("X1", NeuronKind::Interneuron);
    circuit.upsert_connection(Connection::new("ALML", "X1", 0.5, SynapseKind::Chemical));

    // One correct edge, two extras: exactly at the plausibility boundary.
    let result = validator.validate(&circuit);
    assert_eq!(result.correct_connections.len(), 1);
    assert_eq!(result.extra_connections.len(), 2);
    assert!(result.biologically_plausible);

    circuit.upsert_connection(Connection::new("X1", "ALML", 0.5, SynapseKind::Chemical));
    let result = validator.validate(&circuit);
    assert!(!result.biologically_plausible);
}

#[test]
fn test_feedback_triggers() {
    let validator = ReferenceValidator::new();

    // Correct wiring and a detected pathway produce a positive note and a
    // pathway note.
    let result = validator.validate(&full_anterior_touch_circuit());
    assert!(result
        .feedback
        .iter()
        .any(|note| note.contains("match the real connectome")));
    assert!(result
        .feedback
        .iter()
        .any(|note| note.contains("Anterior Touch Avoidance")));

    // A small number of missing edges produces a suggestion naming them.
    let mut circuit = Circuit::new();
    let reference = connectome::reference();
    for id in ["ASEL", "AIYL"] {
        circuit.add_neuron(id, reference.kind_of(id).expect("curated neuron"));
    }
    let result = validator.validate(&circuit);
    assert!(result
        .feedback
        .iter()
        .any(|note| note.contains("ASEL\u{2192}AIYL")));
}
