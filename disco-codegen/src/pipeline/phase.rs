//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One pass over the compilation context.
///
/// A phase reads what earlier phases left on the context and adds its own
/// result: `ModelsPhase` starts the graph, `OperationsPhase` fills in its
/// operations and `PlanPhase` turns it into a file manifest.
pub trait Phase: Send + Sync {
    /// Name reported in diagnostics, plugin hooks and log events.
    fn name(&self) -> &'static str;

    /// One-line summary for log events.
    fn description(&self) -> &'static str;

    /// Run this phase.
    ///
    /// # Errors
    ///
    /// Returns an error only when the phase cannot run at all, e.g. because
    /// the graph it extends was never built. Problems in the description
    /// itself are diagnostics.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
