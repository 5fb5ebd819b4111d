use indexmap::IndexMap;
use serde::Deserialize;

/// Prefix of a local model reference (e.g., "#/definitions/Pet").
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// A schema object: a model definition, a property, or an item descriptor.
///
/// The same shape is used at every nesting level. Which fields are
/// meaningful depends on `ty`: `items` for arrays, `additional_properties`
/// for maps, `properties` for inline and top-level objects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Reference to a named model
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Declared type token (e.g., "integer", "array")
    #[serde(rename = "type")]
    pub ty: Option<String>,

    /// Declared format (e.g., "int64", "date-time")
    pub format: Option<String>,

    /// Element schema for arrays
    pub items: Option<Box<Schema>>,

    /// Value schema for maps
    pub additional_properties: Option<AdditionalProperties>,

    /// Read-only flag; `None` when the description does not say
    pub read_only: Option<bool>,

    pub description: Option<String>,

    /// Named properties in declared order
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,

    /// Names of required properties
    #[serde(default)]
    pub required: Vec<String>,
}

/// The `additionalProperties` keyword, which may be a flag or a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

impl Schema {
    /// The referenced model name, if this schema is a `$ref`.
    ///
    /// Both `#/definitions/Pet` and a bare `Pet` name the model `Pet`.
    pub fn referenced_model(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .map(|r| r.strip_prefix(DEFINITIONS_PREFIX).unwrap_or(r))
    }

    /// The value schema of a map, if one is declared.
    pub fn map_values(&self) -> Option<&Schema> {
        match &self.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => Some(schema),
            _ => None,
        }
    }

    /// Check whether a property name is listed as required.
    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_model() {
        let schema: Schema = serde_json::from_str(r##"{"$ref": "#/definitions/Pet"}"##).unwrap();
        assert_eq!(schema.referenced_model(), Some("Pet"));

        let bare: Schema = serde_json::from_str(r#"{"$ref": "Pet"}"#).unwrap();
        assert_eq!(bare.referenced_model(), Some("Pet"));

        assert_eq!(Schema::default().referenced_model(), None);
    }

    #[test]
    fn test_properties_keep_declared_order() {
        let schema: Schema = serde_json::from_str(
            r#"{
                "type": "object",
                "required": ["zeta"],
                "properties": {
                    "zeta": {"type": "string"},
                    "alpha": {"type": "integer", "format": "int64", "readOnly": true}
                }
            }"#,
        )
        .unwrap();

        let names: Vec<_> = schema.properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert_eq!(schema.properties["alpha"].read_only, Some(true));
        assert_eq!(schema.properties["zeta"].read_only, None);
        assert!(schema.is_required("zeta"));
        assert!(!schema.is_required("alpha"));
    }

    #[test]
    fn test_additional_properties_forms() {
        let flag: Schema =
            serde_json::from_str(r#"{"type": "object", "additionalProperties": true}"#).unwrap();
        assert!(flag.map_values().is_none());

        let map: Schema = serde_json::from_str(
            r#"{"type": "object", "additionalProperties": {"type": "string"}}"#,
        )
        .unwrap();
        assert_eq!(
            map.map_values().and_then(|s| s.ty.as_deref()),
            Some("string")
        );
    }
}
