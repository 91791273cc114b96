//! Witness evaluation engine for hierarchical arithmetic circuits.
//!
//! A circuit arrives as a *template set* (generated `create`/`run` bodies
//! dispatched by template id) plus a [`CircuitDescriptor`] describing its
//! static shape. [`evaluate`] allocates the flat [`SignalStore`], instantiates
//! the root component, and supplies the named top-level inputs; every input
//! write decrements the target component's pending counter and the moment a
//! counter reaches zero the component's `run` fires synchronously, writing its
//! own outputs and thereby cascading into its descendants. The engine never
//! computes an execution order: the per-template wiring respects the circuit's
//! data dependencies, so the counter-reaching-zero events discover a valid
//! topological order on their own.
//!
//! Evaluation is all-or-nothing: either every declared constraint holds and
//! the fully populated store is returned as the [`Witness`], or the first
//! violation aborts the cascade with an [`EvalError`] carrying the failing
//! component's ancestry trace.

mod context;
mod diagnostics;
mod errors;
mod evaluator;
mod registry;
mod scheduler;
mod store;
mod template;

#[cfg(test)]
mod tests;

// RE-EXPORTS
// ================================================================================================

pub use witcalc_core::{
    CircuitDescriptor, ComponentId, Felt, FieldError, InputDecl, InstanceLabel, ONE, SourceRef,
    TemplateId, ZERO, field,
};

pub use context::EvalContext;
pub use diagnostics::ComponentPath;
pub use errors::EvalError;
pub use evaluator::{Inputs, Witness, evaluate};
pub use registry::{Component, ComponentRegistry, InputProgress};
pub use scheduler::supply_input;
pub use store::{ConstantsPool, SignalStore};
pub use template::{CreateCall, TemplateSet};
