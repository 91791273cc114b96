//! `LessThan(8)` — outputs 1 when `a < b`, for 8-bit operands.
//!
//! Decomposes `a + 2^8 - b` into 9 bits; the top bit is clear exactly when
//! the subtraction borrowed, i.e. when `a < b`.

use witcalc_processor::{
    ComponentId, CreateCall, EvalContext, EvalError, InstanceLabel, TemplateSet, supply_input,
};

use super::{C_COMPARE_SHIFT, C_ONE, num2bits};

pub(super) const NAME: &str = "LessThan";

pub(super) const OUT: usize = 0;
pub(super) const IN_A: usize = 1;
pub(super) const IN_B: usize = 2;

const OWN_SIGNALS: usize = 3;
pub(super) const SIGNALS: usize = OWN_SIGNALS + num2bits::SIGNALS;
pub(super) const COMPONENTS: usize = 1 + num2bits::COMPONENTS;
const INPUTS: u32 = 2;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::LESS_THAN, NAME, INPUTS, 1)
}

pub(super) fn run<T>(templates: &T, cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let base = cx.signal_start(id);
    let n2b = num2bits::create(cx, CreateCall {
        id: id.offset(1),
        signal_start: base + OWN_SIGNALS,
        parent: Some(id),
        label: InstanceLabel::scalar("n2b"),
    });

    let shifted = cx.signal(base + IN_A)? + cx.constant(C_COMPARE_SHIFT) - cx.signal(base + IN_B)?;
    supply_input(cx, templates, n2b, num2bits::IN, shifted)?;

    let top_bit = cx.child_signal(id, 0, num2bits::OUT + num2bits::BITS - 1)?;
    let out = cx.constant(C_ONE) - top_bit;
    cx.set_signal(base + OUT, out)
}
