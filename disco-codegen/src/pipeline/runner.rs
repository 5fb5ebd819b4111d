//! Pipeline orchestrator.

use discogen_description::ApiDescription;
use eyre::Result;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{ModelsPhase, OperationsPhase, PlanPhase},
};
use crate::GeneratorConfig;

/// Runs the built-in phases (models, operations, plan), then any user
/// phases, calling plugin hooks around each.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(SnapshotPlugin::new())
///     .phase(MyRenderPhase)
///     .run(description, config)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline over a description.
    ///
    /// # Errors
    ///
    /// Returns an error if a phase or plugin fails.
    pub fn run(
        &self,
        description: ApiDescription,
        config: GeneratorConfig,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(description, config);

        let builtin_phases: [&dyn Phase; 3] = [&ModelsPhase, &OperationsPhase, &PlanPhase];

        for phase in builtin_phases
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
        {
            self.run_phase(phase, &mut ctx)?;
        }

        tracing::debug!(
            models = ctx.graph.as_ref().map_or(0, |g| g.models.len()),
            diagnostics = ctx.diagnostics.len(),
            "pipeline finished"
        );
        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            tracing::trace!(plugin = plugin.name(), phase = phase_name, "before phase");
            plugin.on_before_phase(phase_name, ctx)?;
        }

        tracing::debug!(phase = phase_name, "{}", phase.description());
        phase.run(ctx)?;

        for plugin in &self.plugins {
            tracing::trace!(plugin = plugin.name(), phase = phase_name, "after phase");
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
