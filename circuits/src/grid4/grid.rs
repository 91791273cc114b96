//! `Grid` — the main template of the 4×4 puzzle verifier.
//!
//! Wires the solution cells into the number verifier and the 12 subgroup
//! verifiers (rows, columns, 2×2 boxes), then ties the solution back to the
//! puzzle: a solution cell must equal the puzzle cell unless the puzzle cell
//! is 0 (empty).

use witcalc_processor::{
    ComponentId, CreateCall, EvalContext, EvalError, InstanceLabel, SourceRef, TemplateSet,
    supply_input,
};

use super::{C_ONE, SRC, grid_number_verifier, is_equal, is_zero, subgroup_verifier};

pub(super) const NAME: &str = "Grid";

const SIDE: usize = 4;
const BOX: usize = 2;
const CELLS: usize = SIDE * SIDE;
const DIMS_SIDE: &[usize] = &[SIDE];
const DIMS_GRID: &[usize] = &[SIDE, SIDE];

pub(super) const PUZZLE: usize = 0;
pub(super) const SOLUTION: usize = CELLS;

// child slots, in creation order
const SLOT_NUMBERS: usize = 0;
const SLOT_ROWS: usize = 1;
const SLOT_COLUMNS: usize = SLOT_ROWS + SIDE;
const SLOT_BOXES: usize = SLOT_COLUMNS + SIDE;
const SLOT_EQUALS: usize = SLOT_BOXES + SIDE;
const SLOT_ZEROS: usize = SLOT_EQUALS + CELLS;

const OWN_SIGNALS: usize = 2 * CELLS;
pub(super) const SIGNALS: usize = OWN_SIGNALS
    + grid_number_verifier::SIGNALS
    + 3 * SIDE * subgroup_verifier::SIGNALS
    + CELLS * is_equal::SIGNALS
    + CELLS * is_zero::SIGNALS;
pub(super) const COMPONENTS: usize = 1
    + grid_number_verifier::COMPONENTS
    + 3 * SIDE * subgroup_verifier::COMPONENTS
    + CELLS * is_equal::COMPONENTS
    + CELLS * is_zero::COMPONENTS;
const INPUTS: u32 = (2 * CELLS) as u32;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::GRID, NAME, INPUTS, SLOT_ZEROS + CELLS)
}

pub(super) fn run<T>(templates: &T, cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let base = cx.signal_start(id);

    let mut child = id.offset(1);
    let mut block = base + OWN_SIGNALS;
    grid_number_verifier::create(cx, CreateCall {
        id: child,
        signal_start: block,
        parent: Some(id),
        label: InstanceLabel::scalar("numbersVerifier"),
    });
    child = child.offset(grid_number_verifier::COMPONENTS as u32);
    block += grid_number_verifier::SIGNALS;
    for row in 0..SIDE {
        subgroup_verifier::create(cx, CreateCall {
            id: child,
            signal_start: block,
            parent: Some(id),
            label: InstanceLabel::indexed("rowVerifiers", DIMS_SIDE, row),
        });
        child = child.offset(subgroup_verifier::COMPONENTS as u32);
        block += subgroup_verifier::SIGNALS;
    }
    for column in 0..SIDE {
        subgroup_verifier::create(cx, CreateCall {
            id: child,
            signal_start: block,
            parent: Some(id),
            label: InstanceLabel::indexed("columnVerifiers", DIMS_SIDE, column),
        });
        child = child.offset(subgroup_verifier::COMPONENTS as u32);
        block += subgroup_verifier::SIGNALS;
    }
    for boxed in 0..SIDE {
        subgroup_verifier::create(cx, CreateCall {
            id: child,
            signal_start: block,
            parent: Some(id),
            label: InstanceLabel::indexed("boxVerifiers", DIMS_SIDE, boxed),
        });
        child = child.offset(subgroup_verifier::COMPONENTS as u32);
        block += subgroup_verifier::SIGNALS;
    }
    for cell in 0..CELLS {
        is_equal::create(cx, CreateCall {
            id: child,
            signal_start: block,
            parent: Some(id),
            label: InstanceLabel::indexed("isEquals", DIMS_GRID, cell),
        });
        child = child.offset(is_equal::COMPONENTS as u32);
        block += is_equal::SIGNALS;
    }
    for cell in 0..CELLS {
        is_zero::create(cx, CreateCall {
            id: child,
            signal_start: block,
            parent: Some(id),
            label: InstanceLabel::indexed("isZeros", DIMS_GRID, cell),
        });
        child = child.offset(is_zero::COMPONENTS as u32);
        block += is_zero::SIGNALS;
    }

    let one = cx.constant(C_ONE);

    // every solution cell is a number in 1..=4
    let numbers = cx.child(id, SLOT_NUMBERS);
    for cell in 0..CELLS {
        let value = cx.signal(base + SOLUTION + cell)?;
        supply_input(cx, templates, numbers, grid_number_verifier::IN + cell, value)?;
    }
    let ok = cx.child_signal(id, SLOT_NUMBERS, grid_number_verifier::OUT)?;
    cx.enforce(numbers, ok, one, SourceRef::new(SRC, 16))?;

    // no duplicates within a row
    for row in 0..SIDE {
        let verifier = cx.child(id, SLOT_ROWS + row);
        for column in 0..SIDE {
            let value = cx.signal(base + SOLUTION + row * SIDE + column)?;
            supply_input(cx, templates, verifier, subgroup_verifier::IN + column, value)?;
        }
        let ok = cx.child_signal(id, SLOT_ROWS + row, subgroup_verifier::OUT)?;
        cx.enforce(verifier, ok, one, SourceRef::new(SRC, 26))?;
    }

    // no duplicates within a column
    for column in 0..SIDE {
        let verifier = cx.child(id, SLOT_COLUMNS + column);
        for row in 0..SIDE {
            let value = cx.signal(base + SOLUTION + row * SIDE + column)?;
            supply_input(cx, templates, verifier, subgroup_verifier::IN + row, value)?;
        }
        let ok = cx.child_signal(id, SLOT_COLUMNS + column, subgroup_verifier::OUT)?;
        cx.enforce(verifier, ok, one, SourceRef::new(SRC, 36))?;
    }

    // no duplicates within a 2x2 box
    for box_row in 0..BOX {
        for box_column in 0..BOX {
            let index = box_row * BOX + box_column;
            let verifier = cx.child(id, SLOT_BOXES + index);
            for p in 0..BOX {
                for q in 0..BOX {
                    let row = box_row * BOX + p;
                    let column = box_column * BOX + q;
                    let value = cx.signal(base + SOLUTION + row * SIDE + column)?;
                    supply_input(
                        cx,
                        templates,
                        verifier,
                        subgroup_verifier::IN + p * BOX + q,
                        value,
                    )?;
                }
            }
            let ok = cx.child_signal(id, SLOT_BOXES + index, subgroup_verifier::OUT)?;
            cx.enforce(verifier, ok, one, SourceRef::new(SRC, 60))?;
        }
    }

    // the solution extends the puzzle: cells agree wherever the puzzle is set
    for cell in 0..CELLS {
        let solution = cx.signal(base + SOLUTION + cell)?;
        let puzzle = cx.signal(base + PUZZLE + cell)?;
        let eq_gate = cx.child(id, SLOT_EQUALS + cell);
        supply_input(cx, templates, eq_gate, is_equal::IN_A, solution)?;
        supply_input(cx, templates, eq_gate, is_equal::IN_B, puzzle)?;
        let zero_gate = cx.child(id, SLOT_ZEROS + cell);
        supply_input(cx, templates, zero_gate, is_zero::IN, puzzle)?;

        let agrees = cx.child_signal(id, SLOT_EQUALS + cell, is_equal::OUT)?;
        let empty = cx.child_signal(id, SLOT_ZEROS + cell, is_zero::OUT)?;
        cx.enforce(eq_gate, agrees, one - empty, SourceRef::new(SRC, 77))?;
    }

    Ok(())
}
