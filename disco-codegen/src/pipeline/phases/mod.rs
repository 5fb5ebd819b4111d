//! Built-in pipeline phases.
//!
//! - [`ModelsPhase`] - enriches models and collects their required models
//! - [`OperationsPhase`] - enriches operations and their parameters
//! - [`PlanPhase`] - plans the documents to emit

mod models;
mod operations;
mod plan;

pub use models::ModelsPhase;
pub use operations::OperationsPhase;
pub use plan::PlanPhase;
