use discogen_description::{BodyParameter, Parameter as ParameterDef, SerializableParameter};
use discogen_ir::{Parameter, ParameterLocation};

use super::Enricher;
use crate::TypeDescriptor;

/// Declared type assumed for a serializable parameter without one.
const DEFAULT_PARAMETER_TYPE: &str = "string";

impl Enricher<'_> {
    /// Enrich one operation parameter.
    pub fn parameter(&mut self, param: &ParameterDef, operation_location: &str) -> Parameter {
        let location = format!("{}.parameters.{}", operation_location, param.name());
        match param {
            ParameterDef::Path(p) => self.serializable(p, ParameterLocation::Path, &location),
            ParameterDef::Query(p) => self.serializable(p, ParameterLocation::Query, &location),
            ParameterDef::Header(p) => self.serializable(p, ParameterLocation::Header, &location),
            ParameterDef::FormData(p) => {
                self.serializable(p, ParameterLocation::FormData, &location)
            }
            ParameterDef::Body(p) => self.body(p, &location),
        }
    }

    /// A parameter with an explicit type: `format` is copied as declared and
    /// `is_primitive_type` is resolved, unless the type is an "array" or
    /// "object" without items, in which case it stays unset.
    fn serializable(
        &mut self,
        param: &SerializableParameter,
        location: ParameterLocation,
        path: &str,
    ) -> Parameter {
        let info = TypeDescriptor::from_parameter(param).map(|d| self.resolver.resolve(&d));
        if info.is_none() {
            tracing::debug!(parameter = %param.name, "parameter type left unresolved");
        }

        let declared = param.ty.as_deref().unwrap_or(DEFAULT_PARAMETER_TYPE);
        let is_container = match &info {
            Some(info) => info.is_container(),
            None => matches!(declared, "array" | "object"),
        };

        Parameter {
            base_name: param.name.clone(),
            name: self.variable_name(&param.name, path),
            location,
            data_type: info
                .as_ref()
                .map_or_else(|| declared.to_string(), |i| i.canonical.clone()),
            is_container,
            format: param.format.clone(),
            is_primitive_type: info.as_ref().map(|i| i.is_primitive),
            required: param.required,
            description: param.description.clone(),
            collection_format: param.collection_format.clone(),
        }
    }

    /// A parameter carrying a full schema. Only an array schema yields a
    /// known primitive flag; every other shape leaves it unset.
    fn body(&mut self, param: &BodyParameter, path: &str) -> Parameter {
        let descriptor = TypeDescriptor::from_schema(&param.schema);
        let info = self.resolver.resolve(&descriptor);
        self.check_reference(&info, path);

        Parameter {
            base_name: param.name.clone(),
            name: self.variable_name(&param.name, path),
            location: ParameterLocation::Body,
            data_type: info.canonical.clone(),
            is_container: info.is_container(),
            format: None,
            is_primitive_type: descriptor.is_array().then_some(info.is_primitive),
            required: param.required,
            description: param.description.clone(),
            collection_format: None,
        }
    }
}
