use witcalc_core::{CircuitDescriptor, ComponentId, Felt, SourceRef, TemplateId};

use crate::{
    diagnostics::ComponentPath,
    errors::EvalError,
    registry::ComponentRegistry,
    store::{ConstantsPool, SignalStore},
    template::CreateCall,
};

// EVALUATION CONTEXT
// ================================================================================================

/// Shared state of one evaluation: the signal store, the constants pool, and
/// the component registry.
///
/// One context is created per [`evaluate`](crate::evaluate) call and threaded
/// by mutable reference through every `create` and `run` of the cascade.
/// Evaluation is strictly single-threaded; the context is only ever touched
/// by the active call path.
#[derive(Debug)]
pub struct EvalContext {
    signals: SignalStore,
    constants: ConstantsPool,
    registry: ComponentRegistry,
}

impl EvalContext {
    /// Sizes all stores from the instance descriptor.
    pub fn new(descriptor: &CircuitDescriptor) -> Self {
        Self {
            signals: SignalStore::new(descriptor.total_signals),
            constants: ConstantsPool::load(descriptor.constants),
            registry: ComponentRegistry::new(descriptor.total_components),
        }
    }

    // STATE ACCESSORS
    // --------------------------------------------------------------------------------------------

    pub fn signals(&self) -> &SignalStore {
        &self.signals
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    // BODY-FACING OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Reads the signal at an absolute index.
    ///
    /// # Errors
    /// Returns [`EvalError::SignalOutOfRange`] for indices outside the
    /// instance.
    pub fn signal(&self, index: usize) -> Result<Felt, EvalError> {
        self.signals.read(index)
    }

    /// Writes the signal at an absolute index.
    ///
    /// # Errors
    /// Returns [`EvalError::SignalOutOfRange`] for indices outside the
    /// instance.
    pub fn set_signal(&mut self, index: usize, value: Felt) -> Result<(), EvalError> {
        self.signals.write(index, value)
    }

    /// Returns the constant at `index` of the pool.
    pub fn constant(&self, index: usize) -> Felt {
        self.constants.get(index)
    }

    /// Installs a component record; see [`ComponentRegistry::install`].
    pub fn install(
        &mut self,
        call: CreateCall,
        template: TemplateId,
        template_name: &'static str,
        input_count: u32,
        child_capacity: usize,
    ) -> ComponentId {
        self.registry.install(call, template, template_name, input_count, child_capacity)
    }

    /// Base offset of a component's signal range.
    pub fn signal_start(&self, id: ComponentId) -> usize {
        self.registry.component(id).signal_start()
    }

    /// The child installed at `slot` (creation order) of a component.
    pub fn child(&self, id: ComponentId, slot: usize) -> ComponentId {
        self.registry.child(id, slot)
    }

    /// Reads a local signal of the child at `slot`, typically one of its
    /// outputs.
    ///
    /// # Errors
    /// Returns [`EvalError::SignalOutOfRange`] for indices outside the
    /// instance.
    pub fn child_signal(
        &self,
        of: ComponentId,
        slot: usize,
        local: usize,
    ) -> Result<Felt, EvalError> {
        let child = self.child(of, slot);
        self.signal(self.signal_start(child) + local)
    }

    /// Checks a declared equality constraint attributed to `component`.
    ///
    /// # Errors
    /// Returns [`EvalError::ConstraintViolation`] carrying the component's
    /// ancestry trace and the pass-through source reference if the equality
    /// does not hold.
    pub fn enforce(
        &self,
        component: ComponentId,
        lhs: Felt,
        rhs: Felt,
        at: SourceRef,
    ) -> Result<(), EvalError> {
        if lhs == rhs {
            return Ok(());
        }
        Err(EvalError::ConstraintViolation {
            at,
            path: self.path_of(component),
            lhs,
            rhs,
        })
    }

    /// Builds the ancestry trace of a component; only called when a
    /// diagnostic is actually being produced.
    pub fn path_of(&self, component: ComponentId) -> ComponentPath {
        ComponentPath::walk(&self.registry, component)
    }

    pub(crate) fn into_witness(self) -> Vec<Felt> {
        self.signals.into_values()
    }
}
