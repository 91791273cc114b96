//! End-to-end evaluation of the grid4 circuit.

use pretty_assertions::assert_eq;
use rstest::rstest;
use witcalc_circuits::grid4::{GRID4_CIRCUIT, Grid4Templates, SUBGROUP_CIRCUIT};
use witcalc_processor::{EvalError, Felt, Inputs, ONE, ZERO, evaluate};

fn felts(values: &[u64]) -> Vec<Felt> {
    values.iter().map(|&value| Felt::new(value)).collect()
}

const SOLUTION: [u64; 16] = [
    1, 2, 3, 4, //
    3, 4, 1, 2, //
    2, 1, 4, 3, //
    4, 3, 2, 1,
];

const PUZZLE: [u64; 16] = [
    1, 0, 0, 4, //
    0, 4, 1, 0, //
    2, 0, 0, 3, //
    0, 3, 2, 0,
];

fn grid_inputs(puzzle: &[u64], solution: &[u64]) -> Inputs {
    Inputs::new()
        .with("puzzle", felts(puzzle))
        .with("solution", felts(solution))
}

// FULL GRID
// ================================================================================================

#[test]
fn valid_solution_produces_a_complete_witness() {
    let inputs = grid_inputs(&PUZZLE, &SOLUTION);
    let witness = evaluate(&Grid4Templates, &GRID4_CIRCUIT, &inputs).unwrap();

    assert_eq!(witness.len(), GRID4_CIRCUIT.witness_size());
    assert_eq!(witness[0], ONE);
    // the root's solution inputs sit at locals 16..32, i.e. absolute 17..33
    for (cell, &value) in SOLUTION.iter().enumerate() {
        assert_eq!(witness[1 + 16 + cell], Felt::new(value));
    }
}

#[test]
fn evaluation_is_deterministic() {
    let inputs = grid_inputs(&PUZZLE, &SOLUTION);
    let first = evaluate(&Grid4Templates, &GRID4_CIRCUIT, &inputs).unwrap();
    let second = evaluate(&Grid4Templates, &GRID4_CIRCUIT, &inputs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn duplicate_in_a_row_aborts_at_the_colliding_pair() {
    let mut solution = SOLUTION;
    solution[1] = 1; // row 0 becomes [1, 1, 3, 4]
    let err = evaluate(&Grid4Templates, &GRID4_CIRCUIT, &grid_inputs(&PUZZLE, &solution))
        .unwrap_err();
    match err {
        EvalError::ConstraintViolation { path, .. } => {
            assert_eq!(path.to_string(), "main.rowVerifiers[0].zeroCheckers[0][1]");
            assert_eq!(path.template_name(), "IsEqual");
        },
        other => panic!("expected a constraint violation, got {other:?}"),
    }
}

#[test]
fn out_of_range_cell_aborts_in_the_number_verifier() {
    let mut solution = SOLUTION;
    solution[4] = 9;
    let err = evaluate(&Grid4Templates, &GRID4_CIRCUIT, &grid_inputs(&PUZZLE, &solution))
        .unwrap_err();
    match err {
        EvalError::ConstraintViolation { path, .. } => {
            assert_eq!(path.to_string(), "main.numbersVerifier.numberVerifiers[4]");
            assert_eq!(path.template_name(), "NumberVerifier");
        },
        other => panic!("expected a constraint violation, got {other:?}"),
    }
}

#[test]
fn solution_must_extend_the_puzzle() {
    let mut puzzle = PUZZLE;
    puzzle[0] = 2; // solution[0] is 1
    let err = evaluate(&Grid4Templates, &GRID4_CIRCUIT, &grid_inputs(&puzzle, &SOLUTION))
        .unwrap_err();
    match err {
        EvalError::ConstraintViolation { path, .. } => {
            assert_eq!(path.to_string(), "main.isEquals[0][0]");
        },
        other => panic!("expected a constraint violation, got {other:?}"),
    }
}

#[test]
fn missing_solution_never_returns_a_partial_witness() {
    let inputs = Inputs::new().with("puzzle", felts(&PUZZLE));
    let err = evaluate(&Grid4Templates, &GRID4_CIRCUIT, &inputs).unwrap_err();
    match err {
        EvalError::IncompleteInput { path, pending } => {
            assert_eq!(path.to_string(), "main");
            assert_eq!(pending, 16);
        },
        other => panic!("expected incomplete input, got {other:?}"),
    }
}

// SUBGROUP INSTANCE
// ================================================================================================

#[test]
fn distinct_subgroup_passes() {
    let inputs = Inputs::new().with("in", felts(&[1, 2, 3, 4]));
    let witness = evaluate(&Grid4Templates, &SUBGROUP_CIRCUIT, &inputs).unwrap();
    // the verifier's output is its local 0, i.e. absolute 1
    assert_eq!(witness[1], ONE);
}

#[rstest]
#[case(&[1, 2, 2, 4], "main.zeroCheckers[1][2]")]
#[case(&[4, 1, 3, 4], "main.zeroCheckers[0][3]")]
fn subgroup_duplicate_identifies_the_exact_position(
    #[case] values: &[u64],
    #[case] expected_path: &str,
) {
    let inputs = Inputs::new().with("in", felts(values));
    let err = evaluate(&Grid4Templates, &SUBGROUP_CIRCUIT, &inputs).unwrap_err();
    match err {
        EvalError::ConstraintViolation { at, path, lhs, rhs } => {
            assert_eq!(path.to_string(), expected_path);
            assert_eq!(path.template_name(), "IsEqual");
            assert_eq!(at.line(), 92);
            assert_eq!(lhs, ONE);
            assert_eq!(rhs, ZERO);
        },
        other => panic!("expected a constraint violation, got {other:?}"),
    }
}
