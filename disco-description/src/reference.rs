use indexmap::IndexMap;
use serde::Deserialize;

/// Prefix of a reference to a shared parameter (e.g., "#/parameters/limit").
pub const PARAMETERS_PREFIX: &str = "#/parameters/";
/// Prefix of a reference to a shared response (e.g., "#/responses/NotFound").
pub const RESPONSES_PREFIX: &str = "#/responses/";

/// Either a `$ref` to a shared object or the object written inline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MaybeRef<T> {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(T),
}

impl<T> MaybeRef<T> {
    /// The inline object, if this is not a reference.
    pub fn inline(&self) -> Option<&T> {
        match self {
            MaybeRef::Inline(item) => Some(item),
            MaybeRef::Ref { .. } => None,
        }
    }

    /// The reference as written, if this is one.
    pub fn reference(&self) -> Option<&str> {
        match self {
            MaybeRef::Ref { reference } => Some(reference),
            MaybeRef::Inline(_) => None,
        }
    }

    /// Look a reference up among the shared objects registered under `prefix`.
    ///
    /// Inline objects resolve to themselves. A reference with another prefix,
    /// or naming an object that is not registered, resolves to `None`.
    pub fn resolve<'a>(&'a self, prefix: &str, shared: &'a IndexMap<String, T>) -> Option<&'a T> {
        match self {
            MaybeRef::Inline(item) => Some(item),
            MaybeRef::Ref { reference } => reference
                .strip_prefix(prefix)
                .and_then(|name| shared.get(name)),
        }
    }
}

impl<T> From<T> for MaybeRef<T> {
    fn from(item: T) -> Self {
        MaybeRef::Inline(item)
    }
}
