//! `IsEqual` — outputs 1 when its two inputs are equal, via an `IsZero` over
//! their difference.

use witcalc_processor::{
    ComponentId, CreateCall, EvalContext, EvalError, InstanceLabel, TemplateSet, supply_input,
};

use super::is_zero;

pub(super) const NAME: &str = "IsEqual";

pub(super) const OUT: usize = 0;
pub(super) const IN_A: usize = 1;
pub(super) const IN_B: usize = 2;

const OWN_SIGNALS: usize = 3;
pub(super) const SIGNALS: usize = OWN_SIGNALS + is_zero::SIGNALS;
pub(super) const COMPONENTS: usize = 1 + is_zero::COMPONENTS;
const INPUTS: u32 = 2;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::IS_EQUAL, NAME, INPUTS, 1)
}

pub(super) fn run<T>(templates: &T, cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let base = cx.signal_start(id);
    let isz = is_zero::create(cx, CreateCall {
        id: id.offset(1),
        signal_start: base + OWN_SIGNALS,
        parent: Some(id),
        label: InstanceLabel::scalar("isz"),
    });

    let delta = cx.signal(base + IN_B)? - cx.signal(base + IN_A)?;
    supply_input(cx, templates, isz, is_zero::IN, delta)?;

    let out = cx.child_signal(id, 0, is_zero::OUT)?;
    cx.set_signal(base + OUT, out)
}
