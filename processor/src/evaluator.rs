use std::collections::BTreeMap;

use tracing::{debug, instrument};
use witcalc_core::{CircuitDescriptor, ComponentId, Felt, InstanceLabel};

use crate::{
    context::EvalContext,
    errors::EvalError,
    scheduler,
    template::{CreateCall, TemplateSet},
};

// INPUTS
// ================================================================================================

/// Named top-level input assignments for one evaluation.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    values: BTreeMap<String, Vec<Felt>>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, values: Vec<Felt>) -> Self {
        self.insert(name, values);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, values: Vec<Felt>) {
        self.values.insert(name.into(), values);
    }

    pub fn get(&self, name: &str) -> Option<&[Felt]> {
        self.values.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Felt])> {
        self.values.iter().map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

// WITNESS
// ================================================================================================

/// The complete, consistent assignment of values to every signal of an
/// instance, produced by a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    values: Vec<Felt>,
}

impl Witness {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Felt> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Felt] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Felt> {
        self.values
    }
}

impl core::ops::Index<usize> for Witness {
    type Output = Felt;

    fn index(&self, index: usize) -> &Felt {
        &self.values[index]
    }
}

// EVALUATION
// ================================================================================================

/// Computes the witness of a circuit instance.
///
/// Allocates the stores described by `descriptor`, installs the root
/// component, and supplies every provided top-level input; each supply
/// cascades per the scheduling protocol (see
/// [`supply_input`](crate::supply_input)), so the whole circuit has run by
/// the time the last
/// root input is written. A root without declared inputs is run directly
/// after creation.
///
/// # Errors
/// - input names not declared by the circuit, or declared lengths not
///   matched, are rejected before any work happens;
/// - the first constraint violation, field failure, or protocol violation
///   aborts the cascade and is returned as-is;
/// - if any component is still waiting for inputs once the cascade settles —
///   including the root itself when top-level inputs were missing — the
///   evaluation fails with [`EvalError::IncompleteInput`] rather than
///   returning a partially populated witness.
#[instrument(skip_all, fields(
    signals = descriptor.total_signals,
    components = descriptor.total_components,
))]
pub fn evaluate<T: TemplateSet>(
    templates: &T,
    descriptor: &CircuitDescriptor,
    inputs: &Inputs,
) -> Result<Witness, EvalError> {
    for (name, values) in inputs.iter() {
        match descriptor.input(name) {
            None => {
                return Err(EvalError::UnknownInput { name: name.into() });
            },
            Some(decl) if decl.len != values.len() => {
                return Err(EvalError::InputLengthMismatch {
                    name: name.into(),
                    expected: decl.len,
                    actual: values.len(),
                });
            },
            Some(_) => {},
        }
    }

    let mut cx = EvalContext::new(descriptor);
    let root = templates.create(descriptor.main, &mut cx, CreateCall {
        id: ComponentId::ROOT,
        signal_start: 1,
        parent: None,
        label: InstanceLabel::scalar("main"),
    })?;

    if cx.registry().is_ready(root) {
        scheduler::run_component(&mut cx, templates, root)?;
    } else {
        for decl in descriptor.inputs {
            // an absent declaration surfaces as IncompleteInput below
            let Some(values) = inputs.get(decl.name) else {
                continue;
            };
            for (i, &value) in values.iter().enumerate() {
                scheduler::supply_input(&mut cx, templates, root, decl.offset + i, value)?;
            }
        }
    }

    if let Some((component, pending)) = cx.registry().first_pending() {
        return Err(EvalError::IncompleteInput {
            path: cx.path_of(component),
            pending,
        });
    }

    debug!("witness complete");
    Ok(Witness { values: cx.into_witness() })
}
