//! `GreaterEqThan(8)` — outputs 1 when `a >= b`, as `b < a + 1`.

use witcalc_processor::{
    ComponentId, CreateCall, EvalContext, EvalError, InstanceLabel, TemplateSet, supply_input,
};

use super::{C_ONE, less_than};

pub(super) const NAME: &str = "GreaterEqThan";

pub(super) const OUT: usize = 0;
pub(super) const IN_A: usize = 1;
pub(super) const IN_B: usize = 2;

const OWN_SIGNALS: usize = 3;
pub(super) const SIGNALS: usize = OWN_SIGNALS + less_than::SIGNALS;
pub(super) const COMPONENTS: usize = 1 + less_than::COMPONENTS;
const INPUTS: u32 = 2;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::GREATER_EQ_THAN, NAME, INPUTS, 1)
}

pub(super) fn run<T>(templates: &T, cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let base = cx.signal_start(id);
    let lt = less_than::create(cx, CreateCall {
        id: id.offset(1),
        signal_start: base + OWN_SIGNALS,
        parent: Some(id),
        label: InstanceLabel::scalar("lt"),
    });

    let b = cx.signal(base + IN_B)?;
    let bumped = cx.signal(base + IN_A)? + cx.constant(C_ONE);
    supply_input(cx, templates, lt, less_than::IN_A, b)?;
    supply_input(cx, templates, lt, less_than::IN_B, bumped)?;

    let out = cx.child_signal(id, 0, less_than::OUT)?;
    cx.set_signal(base + OUT, out)
}
