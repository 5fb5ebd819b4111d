//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// Observer called around every phase, built-in or user supplied.
///
/// Both hooks default to doing nothing. [`SnapshotPlugin`] only
/// implements `on_after_phase`.
///
/// [`SnapshotPlugin`]: super::SnapshotPlugin
pub trait Plugin: Send + Sync {
    /// Name reported in log events.
    fn name(&self) -> &'static str;

    /// Called before `phase` runs. An error aborts the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after `phase` completed. An error aborts the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
