//! File manifest planning.

use discogen_core::{FileManifest, PlannedFile};
use discogen_ir::EnrichedModelGraph;

/// Plan one document per model, in graph order, followed by the api document.
///
/// A model document requires the documents of the models it references,
/// listed by their relative file references.
pub fn plan_files(graph: &EnrichedModelGraph, api_filename: &str) -> FileManifest {
    let mut manifest = FileManifest::new();

    for model in graph.models.values() {
        let requires = model
            .required_models
            .iter()
            .filter_map(|name| graph.model(name))
            .map(|required| required.filename.clone())
            .collect();
        manifest.push(PlannedFile::model(&model.name, requires));
    }

    manifest.push(PlannedFile::api(api_filename));
    tracing::debug!(files = manifest.len(), "planned files");
    manifest
}

#[cfg(test)]
mod tests {
    use discogen_core::FileKind;
    use discogen_ir::Model;
    use indexmap::IndexSet;

    use super::*;

    fn model(name: &str, filename: &str, requires: &[&str]) -> Model {
        Model {
            name: name.to_string(),
            description: None,
            properties: Vec::new(),
            filename: filename.to_string(),
            required_models: requires.iter().map(|s| s.to_string()).collect::<IndexSet<_>>(),
        }
    }

    #[test]
    fn test_plan_files() {
        let mut graph = EnrichedModelGraph::default();
        graph.models.insert(
            "PurchaseOrder".to_string(),
            model("PurchaseOrder", "./purchase_order.json", &["Product"]),
        );
        graph
            .models
            .insert("Product".to_string(), model("Product", "./product.json", &[]));

        let manifest = plan_files(&graph, "api.json");

        let paths: Vec<_> = manifest.files().iter().map(|f| f.path()).collect();
        assert_eq!(paths, ["purchase_order.json", "product.json", "api.json"]);
        assert_eq!(manifest.files()[0].requires(), ["./product.json"]);
        assert!(manifest.files()[1].requires().is_empty());
        assert_eq!(manifest.api().map(|f| f.kind()), Some(FileKind::Api));
    }

    #[test]
    fn test_plan_empty_graph() {
        let manifest = plan_files(&EnrichedModelGraph::default(), "discovery.json");

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.api().map(|f| f.path()), Some("discovery.json"));
    }
}
