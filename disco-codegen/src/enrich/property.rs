use discogen_description::Schema;
use discogen_ir::Property;

use super::Enricher;
use crate::TypeDescriptor;

impl Enricher<'_> {
    /// Enrich one property from its source schema.
    ///
    /// Format and read-only flag are read from the schema the property was
    /// declared with. `filename` is always set from the declared type, even
    /// for primitives; consumers only follow it for non-primitive properties.
    /// Container properties get an enriched element property in `items`.
    pub fn property(
        &mut self,
        name: &str,
        schema: &Schema,
        required: bool,
        location: &str,
    ) -> Property {
        let variable_name = self.variable_name(name, location);
        self.build_property(name, &variable_name, schema, required, location)
    }

    /// Element properties share the container's names, so the name is
    /// normalized once by the caller.
    fn build_property(
        &self,
        name: &str,
        variable_name: &str,
        schema: &Schema,
        required: bool,
        location: &str,
    ) -> Property {
        let descriptor = TypeDescriptor::from_schema(schema);
        let info = self.resolver.resolve(&descriptor);

        let element = match descriptor {
            TypeDescriptor::Array(_) => schema.items.as_deref(),
            TypeDescriptor::Map(_) => schema.map_values(),
            _ => None,
        };
        let items = element.map(|inner| {
            Box::new(self.build_property(name, variable_name, inner, false, location))
        });

        if schema.format.is_none() {
            tracing::trace!(property = name, location, "no declared format");
        }

        Property {
            base_name: name.to_string(),
            name: variable_name.to_string(),
            datatype: info.canonical.clone(),
            is_container: info.is_container(),
            is_primitive_type: info.is_primitive,
            complex_type: info.complex_type,
            format: schema.format.clone(),
            is_read_only: schema.read_only,
            filename: self.naming.relative_file_path(descriptor.declared_type()),
            required,
            description: schema.description.clone(),
            items,
        }
    }
}
