use core::fmt;

use witcalc_core::ComponentId;

use crate::registry::ComponentRegistry;

// COMPONENT PATH
// ================================================================================================

/// Ancestry trace of a component: the rendered instance labels from the root
/// down to the component itself, plus the leaf's template display name.
///
/// Built only when a diagnostic is actually produced, by walking the
/// non-owning `parent` links; nothing is formatted on the evaluation hot
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPath {
    segments: Vec<String>,
    template_name: &'static str,
}

impl ComponentPath {
    pub(crate) fn walk(registry: &ComponentRegistry, component: ComponentId) -> Self {
        let mut segments = Vec::new();
        let mut cursor = Some(component);
        while let Some(id) = cursor {
            let record = registry.component(id);
            segments.push(record.label().to_string());
            cursor = record.parent();
        }
        segments.reverse();
        Self {
            segments,
            template_name: registry.component(component).template_name(),
        }
    }

    /// Path segments in root-to-leaf order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Rendered label of the component the trace points at.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Template display name of the component the trace points at.
    pub fn template_name(&self) -> &'static str {
        self.template_name
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
