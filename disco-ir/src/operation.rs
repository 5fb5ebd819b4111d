//! Enriched operations and parameters.

use serde::Serialize;

use crate::{ParameterLocation, TypeInfo};

/// One API endpoint bound to a path and HTTP method.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Explicit operation id, or one generated from path and method.
    pub operation_id: String,
    /// Uppercase HTTP method (e.g., "GET").
    pub http_method: String,
    pub path: String,
    /// Resource (tag) this operation is grouped under (e.g., "user-account").
    pub resource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameters in declared order, path-level parameters first.
    pub parameters: Vec<Parameter>,
    /// Type of the success response, if it has a schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeInfo>,
    /// Format of the success response schema (e.g., "int64").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_format: Option<String>,
}

impl Operation {
    /// Find a parameter by its source name.
    pub fn parameter(&self, base_name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.base_name == base_name)
    }

    /// Parameters carried at the given location.
    pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(move |p| p.location == location)
    }
}

/// One input of an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Name as written in the source description.
    pub base_name: String,
    /// Normalized variable name.
    pub name: String,
    pub location: ParameterLocation,
    /// Canonical type when resolved, otherwise the declared type.
    pub data_type: String,
    pub is_container: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Unset when the type could not be resolved; renderers then fall back
    /// to a heuristic on `data_type`. Unset is not the same as `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primitive_type: Option<bool>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_parameter(name: &str, location: ParameterLocation) -> Parameter {
        Parameter {
            base_name: name.into(),
            name: name.into(),
            location,
            data_type: "string".into(),
            is_container: false,
            format: None,
            is_primitive_type: None,
            required: false,
            description: None,
            collection_format: None,
        }
    }

    #[test]
    fn test_parameters_in() {
        let op = Operation {
            operation_id: "ordersGet".into(),
            http_method: "GET".into(),
            path: "/orders".into(),
            resource: "orders".into(),
            summary: None,
            description: None,
            parameters: vec![
                make_parameter("limit", ParameterLocation::Query),
                make_parameter("trace", ParameterLocation::Header),
                make_parameter("offset", ParameterLocation::Query),
            ],
            return_type: None,
            return_format: None,
        };

        let query: Vec<_> = op
            .parameters_in(ParameterLocation::Query)
            .map(|p| p.base_name.as_str())
            .collect();
        assert_eq!(query, ["limit", "offset"]);
        assert!(op.parameter("trace").is_some());
    }

    #[test]
    fn test_unset_primitive_flag_is_omitted() {
        let mut param = make_parameter("ids", ParameterLocation::Query);
        let json = serde_json::to_value(&param).unwrap();
        assert!(json.get("isPrimitiveType").is_none());

        param.is_primitive_type = Some(false);
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["isPrimitiveType"], false);
        assert_eq!(json["location"], "query");
    }
}
