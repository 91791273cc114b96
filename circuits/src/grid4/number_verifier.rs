//! `NumberVerifier` — outputs 1 when the input is a grid number, i.e. lies in
//! `1..=4`. Callers assert the output; this template only computes it.

use witcalc_processor::{
    ComponentId, CreateCall, EvalContext, EvalError, InstanceLabel, TemplateSet, supply_input,
};

use super::{C_MAX_NUMBER, C_ONE, greater_eq_than, less_eq_than};

pub(super) const NAME: &str = "NumberVerifier";

pub(super) const OUT: usize = 0;
pub(super) const IN: usize = 1;

const OWN_SIGNALS: usize = 2;
pub(super) const SIGNALS: usize =
    OWN_SIGNALS + greater_eq_than::SIGNALS + less_eq_than::SIGNALS;
pub(super) const COMPONENTS: usize =
    1 + greater_eq_than::COMPONENTS + less_eq_than::COMPONENTS;
const INPUTS: u32 = 1;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::NUMBER_VERIFIER, NAME, INPUTS, 2)
}

pub(super) fn run<T>(templates: &T, cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let base = cx.signal_start(id);
    let geq = greater_eq_than::create(cx, CreateCall {
        id: id.offset(1),
        signal_start: base + OWN_SIGNALS,
        parent: Some(id),
        label: InstanceLabel::scalar("greq1"),
    });
    let leq = less_eq_than::create(cx, CreateCall {
        id: id.offset(1 + greater_eq_than::COMPONENTS as u32),
        signal_start: base + OWN_SIGNALS + greater_eq_than::SIGNALS,
        parent: Some(id),
        label: InstanceLabel::scalar("leqN"),
    });

    let number = cx.signal(base + IN)?;
    let one = cx.constant(C_ONE);
    let max = cx.constant(C_MAX_NUMBER);
    supply_input(cx, templates, geq, greater_eq_than::IN_A, number)?;
    supply_input(cx, templates, geq, greater_eq_than::IN_B, one)?;
    supply_input(cx, templates, leq, less_eq_than::IN_A, number)?;
    supply_input(cx, templates, leq, less_eq_than::IN_B, max)?;

    let out =
        cx.child_signal(id, 0, greater_eq_than::OUT)? * cx.child_signal(id, 1, less_eq_than::OUT)?;
    cx.set_signal(base + OUT, out)
}
