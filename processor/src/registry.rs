use witcalc_core::{ComponentId, InstanceLabel, TemplateId};

use crate::template::CreateCall;

// COMPONENT
// ================================================================================================

/// One instantiated template: its dispatch id, signal range, pending-input
/// counter, and position in the instantiation tree.
///
/// A record is installed exactly once by its parent's body (or by the
/// orchestrator, for the root), becomes ready the instant its counter reaches
/// zero, runs exactly once in that state, and is inert afterwards. `parent`
/// is a non-owning back-reference used only for diagnostics traversal;
/// `children` are owned exclusively by this record, in creation order.
#[derive(Debug)]
pub struct Component {
    template: TemplateId,
    template_name: &'static str,
    label: InstanceLabel,
    signal_start: usize,
    parent: Option<ComponentId>,
    inputs_pending: u32,
    children: Vec<ComponentId>,
}

impl Component {
    pub fn template(&self) -> TemplateId {
        self.template
    }

    /// Template display name, for diagnostics only.
    pub fn template_name(&self) -> &'static str {
        self.template_name
    }

    /// Instance display name, rendered lazily (see [`InstanceLabel`]).
    pub fn label(&self) -> InstanceLabel {
        self.label
    }

    /// Base offset of this component's signal range in the signal store.
    pub fn signal_start(&self) -> usize {
        self.signal_start
    }

    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    /// Number of declared inputs not yet supplied.
    pub fn pending(&self) -> u32 {
        self.inputs_pending
    }

    pub fn is_ready(&self) -> bool {
        self.inputs_pending == 0
    }

    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }
}

// INPUT PROGRESS
// ================================================================================================

/// Result of accounting for one arriving input signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProgress {
    /// More declared inputs are still outstanding.
    Pending,
    /// The arriving input was the last outstanding one; the component must
    /// run now.
    Ready,
    /// The component had already received all of its declared inputs.
    Overflow,
}

// COMPONENT REGISTRY
// ================================================================================================

/// Arena of component records addressed by pre-assigned ids.
///
/// Ids and signal ranges are a pure function of template shape, computed by
/// the circuit generator; records are installed at their precomputed slot
/// rather than appended. The registry is torn down only when the whole
/// evaluation ends.
#[derive(Debug)]
pub struct ComponentRegistry {
    slots: Vec<Option<Component>>,
}

impl ComponentRegistry {
    /// Reserves `total_components` empty slots.
    pub fn new(total_components: usize) -> Self {
        Self {
            slots: core::iter::repeat_with(|| None).take(total_components).collect(),
        }
    }

    /// Installs a record at its pre-assigned id and links it into its
    /// parent's children in creation order. Allocation never fails.
    ///
    /// # Panics
    /// Panics if the id lies outside the instance or the slot is already
    /// occupied; both indicate a generator bug, not runtime data.
    pub fn install(
        &mut self,
        call: CreateCall,
        template: TemplateId,
        template_name: &'static str,
        input_count: u32,
        child_capacity: usize,
    ) -> ComponentId {
        let id = call.id;
        let slot = &mut self.slots[id.as_usize()];
        assert!(slot.is_none(), "component {id} installed twice");
        *slot = Some(Component {
            template,
            template_name,
            label: call.label,
            signal_start: call.signal_start,
            parent: call.parent,
            inputs_pending: input_count,
            children: Vec::with_capacity(child_capacity),
        });
        if let Some(parent) = call.parent {
            self.record_mut(parent).children.push(id);
        }
        id
    }

    /// Returns the record for an installed component.
    ///
    /// # Panics
    /// Panics if no record was installed at `id`.
    pub fn component(&self, id: ComponentId) -> &Component {
        self.record(id)
    }

    /// Decrements the pending-input counter of a component.
    ///
    /// Reports [`InputProgress::Ready`] exactly on the 1 -> 0 transition and
    /// [`InputProgress::Overflow`] when the counter was already zero; the
    /// caller turns the latter into a fatal error.
    pub fn consume_input(&mut self, id: ComponentId) -> InputProgress {
        let record = self.record_mut(id);
        match record.inputs_pending {
            0 => InputProgress::Overflow,
            1 => {
                record.inputs_pending = 0;
                InputProgress::Ready
            },
            _ => {
                record.inputs_pending -= 1;
                InputProgress::Pending
            },
        }
    }

    pub fn is_ready(&self, id: ComponentId) -> bool {
        self.record(id).is_ready()
    }

    /// The child installed at `slot` (creation order) of a component.
    pub fn child(&self, id: ComponentId, slot: usize) -> ComponentId {
        self.record(id).children[slot]
    }

    pub fn children_of(&self, id: ComponentId) -> &[ComponentId] {
        self.record(id).children()
    }

    /// First installed component still waiting for inputs, if any, with its
    /// outstanding count. Used for the end-of-evaluation completeness sweep.
    pub fn first_pending(&self) -> Option<(ComponentId, u32)> {
        self.slots.iter().enumerate().find_map(|(index, slot)| {
            slot.as_ref().and_then(|record| {
                (record.inputs_pending > 0)
                    .then(|| (ComponentId::new(index as u32), record.inputs_pending))
            })
        })
    }

    fn record(&self, id: ComponentId) -> &Component {
        self.slots[id.as_usize()].as_ref().expect("component not installed")
    }

    fn record_mut(&mut self, id: ComponentId) -> &mut Component {
        self.slots[id.as_usize()].as_mut().expect("component not installed")
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use witcalc_core::InstanceLabel;

    use super::*;

    fn call(id: u32, parent: Option<u32>, label: InstanceLabel) -> CreateCall {
        CreateCall {
            id: ComponentId::new(id),
            signal_start: 1,
            parent: parent.map(ComponentId::new),
            label,
        }
    }

    #[test]
    fn install_links_children_in_creation_order() {
        let mut registry = ComponentRegistry::new(3);
        let root = registry.install(
            call(0, None, InstanceLabel::scalar("main")),
            TemplateId::new(0),
            "Main",
            0,
            2,
        );
        registry.install(
            call(2, Some(0), InstanceLabel::scalar("late")),
            TemplateId::new(1),
            "Leaf",
            1,
            0,
        );
        registry.install(
            call(1, Some(0), InstanceLabel::scalar("early")),
            TemplateId::new(1),
            "Leaf",
            1,
            0,
        );
        assert_eq!(
            registry.children_of(root),
            &[ComponentId::new(2), ComponentId::new(1)]
        );
        assert_eq!(registry.child(root, 0), ComponentId::new(2));
    }

    #[test]
    fn counter_reports_ready_exactly_on_the_last_input() {
        let mut registry = ComponentRegistry::new(1);
        let id = registry.install(
            call(0, None, InstanceLabel::scalar("main")),
            TemplateId::new(0),
            "Main",
            2,
            0,
        );
        assert!(!registry.is_ready(id));
        assert_eq!(registry.consume_input(id), InputProgress::Pending);
        assert_eq!(registry.consume_input(id), InputProgress::Ready);
        assert!(registry.is_ready(id));
        assert_eq!(registry.consume_input(id), InputProgress::Overflow);
    }

    #[test]
    fn pending_sweep_finds_starved_components() {
        let mut registry = ComponentRegistry::new(2);
        registry.install(
            call(0, None, InstanceLabel::scalar("main")),
            TemplateId::new(0),
            "Main",
            0,
            1,
        );
        registry.install(
            call(1, Some(0), InstanceLabel::scalar("starved")),
            TemplateId::new(1),
            "Leaf",
            3,
            0,
        );
        assert_eq!(registry.first_pending(), Some((ComponentId::new(1), 3)));
    }
}
