//! Plan phase - plans the documents to emit.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    plan::plan_files,
};

/// Phase that builds the file manifest from the model graph.
///
/// Must run after `ModelsPhase`.
pub struct PlanPhase;

impl Phase for PlanPhase {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn description(&self) -> &'static str {
        "Plan one document per model plus the api document"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let graph = ctx.graph.as_ref().ok_or_else(|| {
            eyre::eyre!("model graph not set - plan must run after the models phase")
        })?;

        ctx.files = Some(plan_files(graph, &ctx.config.api_filename));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use discogen_description::ApiDescription;

    use super::*;
    use crate::GeneratorConfig;

    #[test]
    fn test_plan_phase_requires_graph() {
        let mut ctx =
            CompilationContext::new(ApiDescription::default(), GeneratorConfig::default());

        assert!(PlanPhase.run(&mut ctx).is_err());
        assert!(ctx.files.is_none());
    }
}
