use discogen_description::Schema;
use discogen_ir::{Model, Property};

use super::Enricher;
use crate::dependencies::DependencyCollector;

impl Enricher<'_> {
    /// Enrich a model definition and collect the models it requires.
    ///
    /// Properties are enriched from the definition's own property map,
    /// keyed by their source names, so the format of each property comes
    /// from the schema it was declared with.
    pub fn model(&mut self, name: &str, schema: &Schema) -> Model {
        tracing::trace!(model = name, properties = schema.properties.len(), "enriching model");

        let properties: Vec<Property> = schema
            .properties
            .iter()
            .map(|(prop_name, prop_schema)| {
                let location = format!("definitions.{}.properties.{}", name, prop_name);
                self.property(prop_name, prop_schema, schema.is_required(prop_name), &location)
            })
            .collect();

        let description = self.description;
        let is_known = |model: &str| description.has_model(model);
        let deps = DependencyCollector::new(&is_known).collect(name, &properties);

        for (property, model) in &deps.unresolved {
            let location = format!("definitions.{}.properties.{}", name, property);
            self.warn_undefined_model(model, &location);
        }

        Model {
            name: name.to_string(),
            description: schema.description.clone(),
            properties,
            filename: self.naming.relative_file_path(name),
            required_models: deps.required,
        }
    }
}
