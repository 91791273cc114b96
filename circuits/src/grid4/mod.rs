//! The `grid4` circuit: a 4×4 number-placement puzzle verifier.
//!
//! Inputs are a 16-cell `puzzle` (0 marks an empty cell) and a 16-cell
//! `solution`. The circuit checks that every solution cell is a number in
//! 1..=4, that no row, column, or 2×2 box contains a duplicate, and that the
//! solution agrees with the puzzle wherever the puzzle cell is set.
//!
//! Layout follows the engine's conventions: each template's block holds its
//! outputs, then its inputs, then its intermediates, then the child blocks in
//! creation order; child ids follow the parent's id in the same order. Both
//! are pure functions of template shape, accumulated through the per-template
//! `SIGNALS` and `COMPONENTS` constants.

use witcalc_processor::{
    CircuitDescriptor, ComponentId, CreateCall, EvalContext, EvalError, InputDecl, TemplateId,
    TemplateSet,
};

mod greater_eq_than;
mod grid;
mod grid_number_verifier;
mod is_equal;
mod is_zero;
mod less_eq_than;
mod less_than;
mod num2bits;
mod number_verifier;
mod subgroup_verifier;

/// Circuit description file the template bodies were generated from.
pub(crate) const SRC: &str = "grid4.cir";

// TEMPLATE IDS
// ================================================================================================

pub const IS_ZERO: TemplateId = TemplateId::new(0);
pub const IS_EQUAL: TemplateId = TemplateId::new(1);
pub const NUM2BITS: TemplateId = TemplateId::new(2);
pub const LESS_THAN: TemplateId = TemplateId::new(3);
pub const LESS_EQ_THAN: TemplateId = TemplateId::new(4);
pub const GREATER_EQ_THAN: TemplateId = TemplateId::new(5);
pub const NUMBER_VERIFIER: TemplateId = TemplateId::new(6);
pub const GRID_NUMBER_VERIFIER: TemplateId = TemplateId::new(7);
pub const SUBGROUP_VERIFIER: TemplateId = TemplateId::new(8);
pub const GRID: TemplateId = TemplateId::new(9);

// CONSTANTS POOL
// ================================================================================================

/// Field literals referenced by the template bodies, in pool order.
pub const CONSTANTS: &[u64] = &[0, 1, 4, 256];

pub(crate) const C_ZERO: usize = 0;
pub(crate) const C_ONE: usize = 1;
pub(crate) const C_MAX_NUMBER: usize = 2;
pub(crate) const C_COMPARE_SHIFT: usize = 3;

// INSTANCE DESCRIPTORS
// ================================================================================================

/// The full 4×4 grid circuit.
pub const GRID4_CIRCUIT: CircuitDescriptor = CircuitDescriptor {
    main: GRID,
    total_signals: 1 + grid::SIGNALS,
    total_components: grid::COMPONENTS,
    inputs: &[
        InputDecl { name: "puzzle", offset: grid::PUZZLE, len: 16 },
        InputDecl { name: "solution", offset: grid::SOLUTION, len: 16 },
    ],
    constants: CONSTANTS,
};

/// One subgroup verifier as its own instance: four cells that must be
/// pairwise distinct numbers.
pub const SUBGROUP_CIRCUIT: CircuitDescriptor = CircuitDescriptor {
    main: SUBGROUP_VERIFIER,
    total_signals: 1 + subgroup_verifier::SIGNALS,
    total_components: subgroup_verifier::COMPONENTS,
    inputs: &[InputDecl { name: "in", offset: subgroup_verifier::IN, len: 4 }],
    constants: CONSTANTS,
};

// TEMPLATE SET
// ================================================================================================

/// Dispatch table of the grid4 circuit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Grid4Templates;

impl TemplateSet for Grid4Templates {
    fn create(
        &self,
        template: TemplateId,
        cx: &mut EvalContext,
        call: CreateCall,
    ) -> Result<ComponentId, EvalError> {
        match template {
            IS_ZERO => Ok(is_zero::create(cx, call)),
            IS_EQUAL => Ok(is_equal::create(cx, call)),
            NUM2BITS => Ok(num2bits::create(cx, call)),
            LESS_THAN => Ok(less_than::create(cx, call)),
            LESS_EQ_THAN => Ok(less_eq_than::create(cx, call)),
            GREATER_EQ_THAN => Ok(greater_eq_than::create(cx, call)),
            NUMBER_VERIFIER => Ok(number_verifier::create(cx, call)),
            GRID_NUMBER_VERIFIER => Ok(grid_number_verifier::create(cx, call)),
            SUBGROUP_VERIFIER => Ok(subgroup_verifier::create(cx, call)),
            GRID => Ok(grid::create(cx, call)),
            other => Err(EvalError::UnknownTemplate(other)),
        }
    }

    fn run(
        &self,
        template: TemplateId,
        component: ComponentId,
        cx: &mut EvalContext,
    ) -> Result<(), EvalError> {
        match template {
            IS_ZERO => is_zero::run(cx, component),
            IS_EQUAL => is_equal::run(self, cx, component),
            NUM2BITS => num2bits::run(cx, component),
            LESS_THAN => less_than::run(self, cx, component),
            LESS_EQ_THAN => less_eq_than::run(self, cx, component),
            GREATER_EQ_THAN => greater_eq_than::run(self, cx, component),
            NUMBER_VERIFIER => number_verifier::run(self, cx, component),
            GRID_NUMBER_VERIFIER => grid_number_verifier::run(self, cx, component),
            SUBGROUP_VERIFIER => subgroup_verifier::run(self, cx, component),
            GRID => grid::run(self, cx, component),
            other => Err(EvalError::UnknownTemplate(other)),
        }
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants_accumulate_to_the_instance_totals() {
        assert_eq!(is_zero::SIGNALS, 3);
        assert_eq!(is_equal::SIGNALS, 6);
        assert_eq!(num2bits::SIGNALS, 10);
        assert_eq!(less_than::SIGNALS, 13);
        assert_eq!(number_verifier::SIGNALS, 34);
        assert_eq!(grid_number_verifier::SIGNALS, 561);
        assert_eq!(subgroup_verifier::SIGNALS, 41);

        assert_eq!(GRID4_CIRCUIT.total_signals, 1230);
        assert_eq!(GRID4_CIRCUIT.total_components, 318);
        assert_eq!(GRID4_CIRCUIT.main_input_count(), 32);

        assert_eq!(SUBGROUP_CIRCUIT.total_signals, 42);
        assert_eq!(SUBGROUP_CIRCUIT.total_components, 13);
        assert_eq!(SUBGROUP_CIRCUIT.main_input_count(), 4);
    }
}
