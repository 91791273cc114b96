//! `Num2Bits(9)` — little-endian bit decomposition of a 9-bit value.
//!
//! Each bit is extracted from the canonical representative, asserted to be
//! binary, and the weighted sum of all bits is asserted to reconstruct the
//! input.

use witcalc_processor::{ComponentId, CreateCall, EvalContext, EvalError, Felt, SourceRef, field};

use super::{C_ONE, C_ZERO, SRC};

pub(super) const NAME: &str = "Num2Bits";

/// Width of the decomposition; one more bit than the comparator operand
/// width, so the borrow of `a + 2^8 - b` lands in the top bit.
pub(super) const BITS: usize = 9;

pub(super) const OUT: usize = 0;
pub(super) const IN: usize = BITS;

const OWN_SIGNALS: usize = BITS + 1;
pub(super) const SIGNALS: usize = OWN_SIGNALS;
pub(super) const COMPONENTS: usize = 1;
const INPUTS: u32 = 1;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::NUM2BITS, NAME, INPUTS, 0)
}

pub(super) fn run(cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError> {
    let base = cx.signal_start(id);
    let zero = cx.constant(C_ZERO);
    let one = cx.constant(C_ONE);

    let input = cx.signal(base + IN)?;
    let mut lc = zero;
    let mut e2 = one;
    for k in 0..BITS {
        let bit = field::band(field::shr(input, Felt::new(k as u64))?, one);
        cx.set_signal(base + OUT + k, bit)?;
        cx.enforce(id, bit * (bit - one), zero, SourceRef::new(SRC, 120))?;
        lc = lc + bit * e2;
        e2 = e2 + e2;
    }
    cx.enforce(id, lc, input, SourceRef::new(SRC, 125))
}
