// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! API description model for the discogen generator.
//!
//! The types here follow the Swagger 2.0 JSON layout closely enough to be
//! deserialized straight from a document: named `definitions` become
//! models and `paths` become operations. Loading the text from disk or the
//! network is the caller's business; this crate only turns text into
//! typed values.

mod description;
mod error;
mod operation;
mod reference;
mod schema;

pub use description::{ApiDescription, Info};
pub use error::{Error, Result};
pub use operation::{
    BodyParameter, HttpMethod, MergedParameters, Operation, Parameter, PathItem, Response,
    SerializableParameter,
};
pub use reference::{MaybeRef, PARAMETERS_PREFIX, RESPONSES_PREFIX};
pub use schema::{AdditionalProperties, DEFINITIONS_PREFIX, Schema};
