//! `LessEqThan(8)` — outputs 1 when `a <= b`, as `a < b + 1`.

use witcalc_processor::{
    ComponentId, CreateCall, EvalContext, EvalError, InstanceLabel, TemplateSet, supply_input,
};

use super::{C_ONE, less_than};

pub(super) const NAME: &str = "LessEqThan";

pub(super) const OUT: usize = 0;
pub(super) const IN_A: usize = 1;
pub(super) const IN_B: usize = 2;

const OWN_SIGNALS: usize = 3;
pub(super) const SIGNALS: usize = OWN_SIGNALS + less_than::SIGNALS;
pub(super) const COMPONENTS: usize = 1 + less_than::COMPONENTS;
const INPUTS: u32 = 2;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::LESS_EQ_THAN, NAME, INPUTS, 1)
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

    let a = cx.signal(base + IN_A)?;
    let bumped = cx.signal(base + IN_B)? + cx.constant(C_ONE);
    supply_input(cx, templates, lt, less_than::IN_A, a)?;
    supply_input(cx, templates, lt, less_than::IN_B, bumped)?;

    let out = cx.child_signal(id, 0, less_than::OUT)?;
    cx.set_signal(base + OUT, out)
}
