//! `IsZero` — outputs 1 when the input is zero, 0 otherwise.
//!
//! Uses the inverse-witness trick: `inv` is the field inverse of the input
//! (or 0 for a zero input) and `out = -in * inv + 1`, with `in * out == 0`
//! asserted.

use witcalc_processor::{ComponentId, CreateCall, EvalContext, EvalError, SourceRef, field};

use super::{C_ONE, C_ZERO, SRC};

pub(super) const NAME: &str = "IsZero";

pub(super) const OUT: usize = 0;
pub(super) const IN: usize = 1;
const INV: usize = 2;

const OWN_SIGNALS: usize = 3;
pub(super) const SIGNALS: usize = OWN_SIGNALS;
pub(super) const COMPONENTS: usize = 1;
const INPUTS: u32 = 1;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::IS_ZERO, NAME, INPUTS, 0)
}

pub(super) fn run(cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError> {
    let base = cx.signal_start(id);
    let zero = cx.constant(C_ZERO);
    let one = cx.constant(C_ONE);

    let input = cx.signal(base + IN)?;
    let inv = if field::is_true(input) { field::div(one, input)? } else { zero };
    cx.set_signal(base + INV, inv)?;

    let out = -input * inv + one;
    cx.set_signal(base + OUT, out)?;
    cx.enforce(id, input * out, zero, SourceRef::new(SRC, 106))
}
