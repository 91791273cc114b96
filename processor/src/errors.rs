use miette::Diagnostic;
use thiserror::Error;
use witcalc_core::{Felt, FieldError, SourceRef, TemplateId};

use crate::diagnostics::ComponentPath;

// EVALUATION ERROR
// ================================================================================================

/// Fatal failures of a witness evaluation.
///
/// Every variant aborts the whole evaluation. Context-free failures detected
/// inside field operations ([`FieldError`]) are lifted into this type at the
/// engine boundary; failures that originate in the engine itself carry the
/// failing component's ancestry trace directly.
#[derive(Debug, Error, Diagnostic)]
pub enum EvalError {
    /// An asserted field equality did not hold under the computed witness.
    #[error("constraint not satisfied in `{path}` at {at} ({lhs} != {rhs})")]
    #[diagnostic(help(
        "the supplied inputs do not satisfy the circuit; the component path identifies the violated relation"
    ))]
    ConstraintViolation {
        at: SourceRef,
        path: ComponentPath,
        lhs: Felt,
        rhs: Felt,
    },

    /// A field operation failed inside a template body.
    #[error("field operation failed during witness computation")]
    Field(#[from] FieldError),

    /// A component received an input write after its counter already reached
    /// zero. This is a circuit-generation bug, not an input-data error.
    #[error("component `{path}` received an input after all of its declared inputs were supplied")]
    InputOverflow { path: ComponentPath },

    /// A signal access fell outside the instance's allocated range.
    #[error("signal index {index} is out of range for an instance with {len} signals")]
    SignalOutOfRange { index: usize, len: usize },

    /// Dispatch was requested for a template id the set does not define.
    #[error("template id {0} is not part of this template set")]
    UnknownTemplate(TemplateId),

    /// A supplied input name is not declared by the circuit.
    #[error("`{name}` is not a declared input signal of this circuit")]
    UnknownInput { name: String },

    /// A supplied input array does not match its declared length.
    #[error("input signal `{name}` expects {expected} values but {actual} were supplied")]
    InputLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Evaluation ended with a component still waiting for inputs; a partial
    /// witness is never returned.
    #[error("evaluation ended with component `{path}` still waiting for {pending} input signal(s)")]
    #[diagnostic(help(
        "every declared input must be supplied before the component can run; check the top-level input assignments"
    ))]
    IncompleteInput { path: ComponentPath, pending: u32 },
}
