//! Type mapping between source schema types and target dialect types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lookup table from source type tokens to target dialect type tokens.
///
/// Tokens that are not in the table pass through unchanged when mapped
/// with [`TypeMappingTable::map`]. The table is built once before a
/// generation run and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMappingTable {
    entries: BTreeMap<String, String>,
}

impl TypeMappingTable {
    /// Create an empty table (every token passes through).
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The discovery document dialect table.
    ///
    /// The dialect represents 64-bit integers and dates as strings, and every
    /// floating type as a generic number.
    pub fn discovery() -> Self {
        Self::empty()
            .with("long", "string")
            .with("float", "number")
            .with("double", "number")
            .with("date", "string")
            .with("date-time", "string")
            .with("map", "object")
    }

    /// Add or replace an entry, builder style.
    pub fn with(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(source, target);
        self
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(source.into(), target.into());
    }

    /// Merge every entry of `other` into this table, replacing duplicates.
    pub fn extend(&mut self, other: TypeMappingTable) {
        self.entries.extend(other.entries);
    }

    /// Look up a token, returning `None` when it has no entry.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Check whether a token has an entry.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Map a token to its target type, passing unknown tokens through.
    pub fn map<'a>(&'a self, token: &'a str) -> &'a str {
        self.get(token).unwrap_or(token)
    }

    /// Iterate entries in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeMappingTable {
    fn default() -> Self {
        Self::discovery()
    }
}

/// Fold a declared `(type, format)` pair into the token the mapping table is keyed by.
///
/// Mirrors how schema loaders name their primitive properties: an
/// `integer` with format `int64` is a `long`, a `number` with format
/// `double` is a `double`, and so on. Any other pair keeps its type token.
pub fn source_type_token<'a>(ty: &'a str, format: Option<&str>) -> &'a str {
    match (ty, format) {
        ("integer", Some("int64")) => "long",
        ("integer", Some("int32")) => "integer",
        ("number", Some("float")) => "float",
        ("number", Some("double")) => "double",
        ("string", Some("date")) => "date",
        ("string", Some("date-time")) => "date-time",
        _ => ty,
    }
}
