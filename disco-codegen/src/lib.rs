//! Model enrichment and type resolution for the discogen generator.
//!
//! This crate turns a loosely typed [`ApiDescription`] into an
//! [`EnrichedModelGraph`] and a [`FileManifest`]: names are normalized,
//! property and parameter types are resolved against a
//! [`TypeMappingTable`], and each model learns which other models it
//! references so that one document per model can be emitted.
//!
//! # Module Organization
//!
//! - [`config`] - Generator configuration (type mapping, reserved words, file names)
//! - [`naming`] - Naming convention with reserved-word escaping
//! - [`resolve`] - Type descriptors and the type resolver
//! - [`enrich`] - Per-entity enrichment (models, properties, operations, parameters)
//! - [`dependencies`] - Cross-model reference collection
//! - [`plan`] - File manifest planning
//! - [`pipeline`] - Phase runner, diagnostics and plugins
//!
//! [`ApiDescription`]: discogen_description::ApiDescription
//! [`EnrichedModelGraph`]: discogen_ir::EnrichedModelGraph
//! [`FileManifest`]: discogen_core::FileManifest
//! [`TypeMappingTable`]: discogen_core::TypeMappingTable

pub mod config;
pub mod dependencies;
pub mod enrich;
mod generation;
pub mod naming;
pub mod pipeline;
pub mod plan;
pub mod resolve;

pub use config::GeneratorConfig;
pub use generation::{Generation, generate};
pub use naming::NamingConvention;
pub use resolve::{TypeDescriptor, TypeResolver};
