//! Enrichment pipeline.
//!
//! A [`Pipeline`] walks an API description once, in fixed phases:
//!
//! - `models` - enrich every model and collect its required models
//! - `operations` - enrich every operation with its parameters
//! - `plan` - plan the documents to emit
//!
//! User phases run after the built-in ones, and [`Plugin`]s are called
//! before and after every phase. Nothing found along the way aborts the
//! run; findings are collected as [`Diagnostic`]s on the
//! [`CompilationContext`].
//!
//! # Example
//!
//! ```ignore
//! use discogen_codegen::{GeneratorConfig, pipeline::Pipeline};
//!
//! let ctx = Pipeline::new().run(description, GeneratorConfig::default())?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
