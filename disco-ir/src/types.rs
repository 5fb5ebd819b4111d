//! Core type definitions.

use serde::Serialize;

/// A resolved type in the target dialect.
///
/// Produced by the type resolver from a source type descriptor. Arrays and
/// maps carry their element type in `items`; `complex_type` names the
/// model found at the innermost level, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    /// Target dialect type token (e.g., "string", "array", "Pet").
    pub canonical: String,
    /// Scalar, or a container whose element type is primitive.
    pub is_primitive: bool,
    /// Innermost referenced model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<String>,
    /// Element type of an array or map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<TypeInfo>>,
}

impl TypeInfo {
    /// A scalar type.
    pub fn primitive(canonical: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            is_primitive: true,
            complex_type: None,
            items: None,
        }
    }

    /// A reference to a named model.
    pub fn reference(model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            canonical: model.clone(),
            is_primitive: false,
            complex_type: Some(model),
            items: None,
        }
    }

    /// An array or map whose primitiveness follows its element type.
    pub fn container(canonical: impl Into<String>, items: TypeInfo) -> Self {
        Self {
            canonical: canonical.into(),
            is_primitive: items.is_primitive,
            complex_type: items.complex_type.clone(),
            items: Some(Box::new(items)),
        }
    }

    /// Returns true for arrays and maps.
    pub fn is_container(&self) -> bool {
        self.items.is_some()
    }
}

/// Where a parameter is carried in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    FormData,
    Body,
}

impl ParameterLocation {
    /// Get the location keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Body => "body",
        }
    }

    /// Returns true for every location except the request body.
    pub fn is_serializable(&self) -> bool {
        !matches!(self, ParameterLocation::Body)
    }
}
