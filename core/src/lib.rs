#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod field;

mod descriptor;
mod ids;
mod naming;
mod source;

// RE-EXPORTS
// ================================================================================================

pub use descriptor::{CircuitDescriptor, InputDecl};
pub use field::{Felt, FieldError, ONE, ZERO};
pub use ids::{ComponentId, TemplateId};
pub use naming::InstanceLabel;
pub use source::SourceRef;
