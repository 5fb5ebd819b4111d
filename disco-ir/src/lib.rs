//! Enriched model graph types for the discogen generator.
//!
//! This crate holds the output of the enrichment pipeline: models with
//! their resolved properties and file references, and operations with
//! their resolved parameters. Renderers only read these values.
//!
//! # Architecture
//!
//! ```text
//! JSON → discogen-description → discogen-codegen (enrichment) → discogen-ir → renderer
//! ```
//!
//! Optional fields are serialized only when set, so a renderer can treat
//! an absent key as "omit from output".

mod graph;
mod model;
mod operation;
mod types;

pub use graph::EnrichedModelGraph;
pub use model::{Model, Property};
pub use operation::{Operation, Parameter};
pub use types::{ParameterLocation, TypeInfo};
