use witcalc_core::{ComponentId, InstanceLabel, TemplateId};

use crate::{context::EvalContext, errors::EvalError};

// CREATE CALL
// ================================================================================================

/// Arguments of a template `create` invocation.
///
/// The id and signal range are precomputed by the caller's generated layout;
/// `create` only fills the reserved slot. The root is created by the
/// orchestrator with `id` 0 and `signal_start` 1 (slot 0 is the reserved
/// constant-one signal).
#[derive(Clone, Copy, Debug)]
pub struct CreateCall {
    pub id: ComponentId,
    pub signal_start: usize,
    pub parent: Option<ComponentId>,
    pub label: InstanceLabel,
}

// TEMPLATE SET
// ================================================================================================

/// Dispatch surface of one generated circuit: maps a template id to its
/// `create` and `run` operations.
///
/// Generated bodies instantiate their children through the concrete sibling
/// `create` functions; dynamic dispatch is only needed where the template is
/// not statically known — creating the root, and firing `run` when the
/// scheduler observes a pending-input counter reach zero.
pub trait TemplateSet {
    /// Installs a component of the given template at the position described
    /// by `call`.
    ///
    /// # Errors
    /// Returns [`EvalError::UnknownTemplate`] if the id is not part of this
    /// set; installation itself never fails.
    fn create(
        &self,
        template: TemplateId,
        cx: &mut EvalContext,
        call: CreateCall,
    ) -> Result<ComponentId, EvalError>;

    /// Executes the template body for a ready component.
    ///
    /// Invoked exactly once per component, by the scheduler, the instant the
    /// component's last declared input arrives.
    ///
    /// # Errors
    /// Returns the first constraint violation or field failure encountered by
    /// the body or any of the descendants it cascades into.
    fn run(
        &self,
        template: TemplateId,
        component: ComponentId,
        cx: &mut EvalContext,
    ) -> Result<(), EvalError>;
}
