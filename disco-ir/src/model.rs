//! Enriched models and properties.

use indexmap::IndexSet;
use serde::Serialize;

/// A named schema object, ready to be emitted as its own document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model name as declared.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Properties in declared order.
    pub properties: Vec<Property>,
    /// Relative path of this model's document (e.g., "./user_account.json").
    pub filename: String,
    /// Other models referenced directly by a property, one level deep.
    ///
    /// Never contains the model's own name.
    pub required_models: IndexSet<String>,
}

impl Model {
    /// Find a property by its source name.
    pub fn property(&self, base_name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.base_name == base_name)
    }

    /// Returns true if this model references `other` directly.
    pub fn requires(&self, other: &str) -> bool {
        self.required_models.contains(other)
    }
}

/// One field of a model, or the element type of a container property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Name as written in the source description.
    pub base_name: String,
    /// Normalized variable name (e.g., "first_name").
    pub name: String,
    /// Canonical type in the target dialect.
    pub datatype: String,
    /// Innermost referenced model, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<String>,
    pub is_primitive_type: bool,
    pub is_container: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Unset when the source does not say, which is not the same as `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
    /// Relative file reference of the property's declared type.
    ///
    /// Always populated; only meaningful when the property is not primitive.
    pub filename: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Element property of an array or map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,
}
