//! Engine-level tests driving hand-written template sets end to end.


use pretty_assertions::assert_eq;
use rstest::rstest;
use witcalc_core::{Felt, FieldError, ONE, ZERO};

use self::fixtures::*;
use crate::{EvalError, Inputs, evaluate};

fn felts(values: &[u64]) -> Vec<Felt> {
    values.iter().map(|&value| Felt::new(value)).collect()
}

// WITNESS COMPUTATION
// ================================================================================================

#[test]
fn bit_decomposition_of_five() {
    let inputs = Inputs::new().with("in", felts(&[5]));
    let witness = evaluate(&BitsCircuit, &BITS_CIRCUIT, &inputs).unwrap();

    assert_eq!(witness.len(), BITS_CIRCUIT.witness_size());
    assert_eq!(witness[0], ONE);

    // bits live at the root's locals 0..8, LSB first
    let bits: Vec<Felt> = (0..8).map(|k| witness[1 + k]).collect();
    assert_eq!(bits, felts(&[1, 0, 1, 0, 0, 0, 0, 0]));

    // the weighted sum reconstructs the input
    let mut acc = ZERO;
    let mut e2 = ONE;
    for bit in bits {
        acc = acc + bit * e2;
        e2 = e2 + e2;
    }
    assert_eq!(acc, Felt::new(5));
}

#[rstest]
#[case(3, 5, 1)]
#[case(5, 3, 0)]
#[case(5, 5, 0)]
fn comparator_output(#[case] a: u64, #[case] b: u64, #[case] expected: u64) {
    let inputs = Inputs::new().with("a", felts(&[a])).with("b", felts(&[b]));
    let witness = evaluate(&CmpCircuit, &CMP_CIRCUIT, &inputs).unwrap();
    assert_eq!(witness[1], Felt::new(expected));
}

#[test]
fn evaluation_is_deterministic() {
    let inputs = Inputs::new().with("a", felts(&[3])).with("b", felts(&[5]));
    let first = evaluate(&CmpCircuit, &CMP_CIRCUIT, &inputs).unwrap();
    let second = evaluate(&CmpCircuit, &CMP_CIRCUIT, &inputs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn each_component_runs_exactly_once() {
    let set = CountingCmp::default();
    let inputs = Inputs::new().with("a", felts(&[3])).with("b", felts(&[5]));
    evaluate(&set, &CMP_CIRCUIT, &inputs).unwrap();

    let runs = set.runs.borrow();
    assert_eq!(runs.len(), CMP_CIRCUIT.total_components);
    assert!(runs.values().all(|&count| count == 1));
}

#[test]
fn zero_input_circuit_runs_immediately() {
    let witness = evaluate(&DiagCircuit, &CONST_CIRCUIT, &Inputs::new()).unwrap();
    assert_eq!(witness[1], Felt::new(42));
}

// FAILURE REPORTING
// ================================================================================================

#[test]
fn constraint_failure_reports_the_ancestry_trace() {
    let inputs = Inputs::new().with("in", felts(&[3]));
    let err = evaluate(&DiagCircuit, &FAIL_CIRCUIT, &inputs).unwrap_err();
    match err {
        EvalError::ConstraintViolation { at, path, lhs, rhs } => {
            assert_eq!(path.to_string(), "main.checker");
            assert_eq!(path.template_name(), "Checker");
            assert_eq!(at.line(), 11);
            assert_eq!(lhs, Felt::new(3));
            assert_eq!(rhs, Felt::new(7));
        },
        other => panic!("expected a constraint violation, got {other:?}"),
    }
}

#[test]
fn satisfied_constraint_produces_a_witness() {
    let inputs = Inputs::new().with("in", felts(&[7]));
    let witness = evaluate(&DiagCircuit, &FAIL_CIRCUIT, &inputs).unwrap();
    assert_eq!(witness[1], Felt::new(7));
    assert_eq!(witness[2], Felt::new(7));
}

#[test]
fn double_supply_is_an_input_overflow() {
    // the checker accepts 7, so the second supply is what fails
    let inputs = Inputs::new().with("in", felts(&[7]));
    let err = evaluate(&DiagCircuit, &OVERFLOW_CIRCUIT, &inputs).unwrap_err();
    match err {
        EvalError::InputOverflow { path } => assert_eq!(path.to_string(), "main.checker"),
        other => panic!("expected an input overflow, got {other:?}"),
    }
}

#[test]
fn division_by_zero_aborts() {
    let inputs = Inputs::new().with("in", felts(&[0]));
    let err = evaluate(&DiagCircuit, &DIV_CIRCUIT, &inputs).unwrap_err();
    assert!(matches!(err, EvalError::Field(FieldError::DivisionByZero)));

    let inputs = Inputs::new().with("in", felts(&[4]));
    let witness = evaluate(&DiagCircuit, &DIV_CIRCUIT, &inputs).unwrap();
    assert_eq!(witness[1] * Felt::new(4), ONE);
}

// INPUT VALIDATION
// ================================================================================================

#[test]
fn missing_input_is_reported_as_incomplete() {
    let inputs = Inputs::new().with("a", felts(&[3]));
    let err = evaluate(&CmpCircuit, &CMP_CIRCUIT, &inputs).unwrap_err();
    match err {
        EvalError::IncompleteInput { path, pending } => {
            assert_eq!(path.to_string(), "main");
            assert_eq!(pending, 1);
        },
        other => panic!("expected incomplete input, got {other:?}"),
    }
}

#[test]
fn unknown_input_is_rejected() {
    let inputs = Inputs::new().with("bogus", felts(&[1]));
    let err = evaluate(&BitsCircuit, &BITS_CIRCUIT, &inputs).unwrap_err();
    assert!(matches!(err, EvalError::UnknownInput { name } if name == "bogus"));
}

#[test]
fn wrong_input_length_is_rejected() {
    let inputs = Inputs::new().with("in", felts(&[1, 2]));
    let err = evaluate(&BitsCircuit, &BITS_CIRCUIT, &inputs).unwrap_err();
    assert!(matches!(
        err,
        EvalError::InputLengthMismatch { expected: 1, actual: 2, .. }
    ));
}
