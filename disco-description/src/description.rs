use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Error, MaybeRef, PARAMETERS_PREFIX, Parameter, PathItem, RESPONSES_PREFIX, Response, Result,
    Schema,
};

/// Root of an API description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescription {
    /// Format version (e.g., "2.0")
    pub swagger: Option<String>,

    pub info: Option<Info>,

    pub base_path: Option<String>,

    /// Named models in declared order
    #[serde(default)]
    pub definitions: IndexMap<String, Schema>,

    /// Operations grouped by path, in declared order
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Parameters shared through `#/parameters/{name}` references
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    /// Responses shared through `#/responses/{name}` references
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// Descriptive metadata of an API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl FromStr for ApiDescription {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "api.json")
    }
}

impl ApiDescription {
    /// Parse a description from JSON text with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Look up a model definition by name
    pub fn model(&self, name: &str) -> Option<&Schema> {
        self.definitions.get(name)
    }

    /// Check if a model with the given name is defined
    pub fn has_model(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Resolve a parameter that may be a `#/parameters/...` reference
    pub fn resolve_parameter<'a>(
        &'a self,
        param: &'a MaybeRef<Parameter>,
    ) -> Option<&'a Parameter> {
        param.resolve(PARAMETERS_PREFIX, &self.parameters)
    }

    /// Resolve a response that may be a `#/responses/...` reference
    pub fn resolve_response<'a>(
        &'a self,
        response: &'a MaybeRef<Response>,
    ) -> Option<&'a Response> {
        response.resolve(RESPONSES_PREFIX, &self.responses)
    }

    /// Total number of operations across all paths
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_description() {
        let description = ApiDescription::from_str(
            r##"{
                "swagger": "2.0",
                "info": {"title": "Store", "version": "1.0.0"},
                "definitions": {
                    "Order": {"properties": {"id": {"type": "integer"}}},
                    "Product": {"properties": {"supplier": {"$ref": "#/definitions/Order"}}}
                },
                "paths": {
                    "/orders": {"get": {}, "post": {}},
                    "/orders/{id}": {"get": {}}
                }
            }"##,
        )
        .expect("description should parse");

        assert_eq!(description.swagger.as_deref(), Some("2.0"));
        assert!(description.has_model("Order"));
        assert!(!description.has_model("Customer"));
        assert_eq!(description.operation_count(), 3);
        let names: Vec<_> = description.definitions.keys().map(String::as_str).collect();
        assert_eq!(names, ["Order", "Product"]);
    }

    #[test]
    fn test_empty_description() {
        let description = ApiDescription::from_str("{}").expect("empty object should parse");
        assert!(description.definitions.is_empty());
        assert_eq!(description.operation_count(), 0);
    }

    #[test]
    fn test_parse_error() {
        let err = ApiDescription::from_str_with_filename("{\"paths\": 42}", "store.json")
            .expect_err("paths must be an object");
        assert!(matches!(*err, Error::Parse { .. }));
        assert_eq!(err.to_string(), "failed to parse API description");
    }
}
