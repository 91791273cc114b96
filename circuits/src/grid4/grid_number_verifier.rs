//! `GridNumberVerifier` — checks that all 16 solution cells are grid numbers.
//!
//! One `NumberVerifier` per cell, each asserted the moment it fires.

use witcalc_processor::{
    ComponentId, CreateCall, EvalContext, EvalError, InstanceLabel, SourceRef, TemplateSet,
    supply_input,
};

use super::{C_ONE, SRC, number_verifier};

pub(super) const NAME: &str = "GridNumberVerifier";

const CELLS: usize = 16;
const DIMS: &[usize] = &[CELLS];

pub(super) const OUT: usize = 0;
pub(super) const IN: usize = 1;

const OWN_SIGNALS: usize = 1 + CELLS;
pub(super) const SIGNALS: usize = OWN_SIGNALS + CELLS * number_verifier::SIGNALS;
pub(super) const COMPONENTS: usize = 1 + CELLS * number_verifier::COMPONENTS;
const INPUTS: u32 = CELLS as u32;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::GRID_NUMBER_VERIFIER, NAME, INPUTS, CELLS)
}

pub(super) fn run<T>(templates: &T, cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let base = cx.signal_start(id);
    let mut child = id.offset(1);
    let mut block = base + OWN_SIGNALS;
    for cell in 0..CELLS {
        number_verifier::create(cx, CreateCall {
            id: child,
            signal_start: block,
            parent: Some(id),
            label: InstanceLabel::indexed("numberVerifiers", DIMS, cell),
        });
        child = child.offset(number_verifier::COMPONENTS as u32);
        block += number_verifier::SIGNALS;
    }

    let one = cx.constant(C_ONE);
    for cell in 0..CELLS {
        let value = cx.signal(base + IN + cell)?;
        let verifier = cx.child(id, cell);
        supply_input(cx, templates, verifier, number_verifier::IN, value)?;
        let ok = cx.child_signal(id, cell, number_verifier::OUT)?;
        cx.enforce(verifier, ok, one, SourceRef::new(SRC, 151))?;
    }
    cx.set_signal(base + OUT, one)
}
