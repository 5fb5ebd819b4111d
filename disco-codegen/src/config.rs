//! Generator configuration.
//!
//! A [`GeneratorConfig`] is built once before a run and handed to the
//! pipeline by value. Nothing in the pipeline reads configuration from
//! anywhere else.

use discogen_core::TypeMappingTable;
use eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::NamingConvention;

/// Default name of the aggregate api document.
pub const DEFAULT_API_FILENAME: &str = "api.json";

/// Configuration consumed by one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Source-to-target type mapping.
    pub type_mapping: TypeMappingTable,
    /// Words escaped when used as variable names.
    pub reserved_words: Vec<String>,
    /// File name of the aggregate api document.
    pub api_filename: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            type_mapping: TypeMappingTable::discovery(),
            reserved_words: Vec::new(),
            api_filename: DEFAULT_API_FILENAME.to_string(),
        }
    }
}

/// Overrides as written in a TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    api_filename: Option<String>,
    reserved_words: Vec<String>,
    type_mapping: Option<TypeMappingTable>,
}

impl GeneratorConfig {
    /// Parse overrides from TOML and apply them over the defaults.
    ///
    /// ```toml
    /// api_filename = "discovery.json"
    /// reserved_words = ["type"]
    ///
    /// [type_mapping]
    /// uuid = "string"
    /// ```
    ///
    /// `[type_mapping]` entries are merged into the default table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).wrap_err("failed to parse generator configuration")?;

        let mut config = Self::default();
        if let Some(api_filename) = raw.api_filename {
            config.api_filename = api_filename;
        }
        if let Some(type_mapping) = raw.type_mapping {
            config.type_mapping.extend(type_mapping);
        }
        config.reserved_words = raw.reserved_words;
        Ok(config)
    }

    /// Replace the type mapping table.
    pub fn with_type_mapping(mut self, type_mapping: TypeMappingTable) -> Self {
        self.type_mapping = type_mapping;
        self
    }

    /// Replace the reserved words.
    pub fn with_reserved_words(
        mut self,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.reserved_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the api document file name.
    pub fn with_api_filename(mut self, api_filename: impl Into<String>) -> Self {
        self.api_filename = api_filename.into();
        self
    }

    /// The naming convention described by this configuration.
    pub fn naming(&self) -> NamingConvention {
        NamingConvention::new(self.reserved_words.iter().cloned())
    }
}
