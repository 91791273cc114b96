//! The input-triggered execution protocol.
//!
//! There is no explicit scheduler state and no precomputed execution order.
//! Template bodies wire values into their children through [`supply_input`];
//! the write decrements the child's pending-input counter and, exactly on the
//! 1 -> 0 transition, the child's `run` is invoked synchronously — before the
//! caller proceeds. Because generated wiring only ever forwards values that
//! are already committed, this eager, depth-first cascade realizes a valid
//! topological order of the circuit's dependency graph; the engine discovers
//! the order through the counter events instead of computing it.

use tracing::trace;
use witcalc_core::{ComponentId, Felt};

use crate::{
    context::EvalContext, errors::EvalError, registry::InputProgress, template::TemplateSet,
};

// INPUT-TRIGGERED CASCADE
// ================================================================================================

/// Supplies one input signal to `target`, firing its `run` if this was the
/// last outstanding input.
///
/// `local_signal` is the signal's offset within the target's own range; the
/// caller's generated layout knows where each declared input lives.
///
/// # Errors
/// Returns [`EvalError::InputOverflow`] if the target's counter had already
/// reached zero — a second write after readiness is a wiring bug, never valid
/// data — and propagates any failure of the triggered cascade.
pub fn supply_input<T>(
    cx: &mut EvalContext,
    templates: &T,
    target: ComponentId,
    local_signal: usize,
    value: Felt,
) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let index = cx.signal_start(target) + local_signal;
    cx.set_signal(index, value)?;
    match cx.registry_mut().consume_input(target) {
        InputProgress::Pending => Ok(()),
        InputProgress::Ready => run_component(cx, templates, target),
        InputProgress::Overflow => Err(EvalError::InputOverflow {
            path: cx.path_of(target),
        }),
    }
}

/// Runs a component whose pending-input counter has reached zero.
pub(crate) fn run_component<T>(
    cx: &mut EvalContext,
    templates: &T,
    component: ComponentId,
) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let record = cx.registry().component(component);
    let template = record.template();
    trace!(component = %component, template = record.template_name(), "inputs complete, running");
    templates.run(template, component, cx)
}
