//! The enriched model graph.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Model, Operation};

/// Output of one generation run: every model keyed by name, plus every
/// operation, all fully enriched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnrichedModelGraph {
    /// Models in declared order.
    pub models: IndexMap<String, Model>,
    /// Operations in declared order (path, then method).
    pub operations: Vec<Operation>,
}

impl EnrichedModelGraph {
    /// Look up a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Look up an operation by its id.
    pub fn operation(&self, operation_id: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.operation_id == operation_id)
    }

    /// Group operations by resource name, in first-seen order.
    pub fn operations_by_resource(&self) -> IndexMap<&str, Vec<&Operation>> {
        let mut groups: IndexMap<&str, Vec<&Operation>> = IndexMap::new();
        for op in &self.operations {
            groups.entry(op.resource.as_str()).or_default().push(op);
        }
        groups
    }
}
