//! Cross-model reference collection.
//!
//! Each model records the other models its properties reference directly.
//! Only one level is collected; there is no transitive closure and no cycle
//! detection, so mutually referencing models are fine. The result is a hint
//! for renderers that emit imports or order documents.

use discogen_ir::Property;
use indexmap::IndexSet;

/// Result of collecting one model's references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    /// Known models referenced by a property, in first-seen order.
    pub required: IndexSet<String>,
    /// `(property, model)` pairs naming a model that is not defined.
    pub unresolved: Vec<(String, String)>,
}

/// Collects the models referenced by a model's properties.
pub struct DependencyCollector<'a> {
    is_known: &'a dyn Fn(&str) -> bool,
}

impl<'a> DependencyCollector<'a> {
    /// Create a collector that accepts references for which `is_known` holds.
    pub fn new(is_known: &'a dyn Fn(&str) -> bool) -> Self {
        Self { is_known }
    }

    /// Collect the direct references of `model` from its properties.
    ///
    /// A property counts when it is not primitive and names a model,
    /// either directly or as the element of a container. Self references
    /// are skipped.
    pub fn collect(&self, model: &str, properties: &[Property]) -> Dependencies {
        let mut deps = Dependencies::default();

        for property in properties.iter().filter(|p| !p.is_primitive_type) {
            let Some(referenced) = property.complex_type.as_deref() else {
                continue;
            };
            if referenced == model {
                continue;
            }
            if (self.is_known)(referenced) {
                deps.required.insert(referenced.to_string());
            } else {
                deps.unresolved
                    .push((property.base_name.clone(), referenced.to_string()));
            }
        }

        deps
    }
}
