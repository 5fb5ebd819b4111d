//! Core utilities and types for the discogen generator.
//!
//! This crate provides the leaf building blocks shared by every other
//! discogen crate: the source-to-target type mapping table, the naming
//! transforms used for resource, variable and file names, and the file
//! manifest describing which documents a generation run produces.

mod file;
mod type_mapper;
mod utils;

// File planning
pub use file::{FileKind, FileManifest, PlannedFile};
// Type mapping
pub use type_mapper::{TypeMappingTable, source_type_token};
// String utilities
pub use utils::{
    MODEL_FILE_EXTENSION, capitalize, sanitize_name, split_case_boundaries, to_file_name,
    to_relative_file_path, to_resource_name, to_variable_name,
};
