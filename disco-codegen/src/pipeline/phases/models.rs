//! Models phase - enriches every model definition.

use discogen_ir::EnrichedModelGraph;
use eyre::Result;
use indexmap::IndexMap;

use crate::{
    enrich::Enricher,
    pipeline::{CompilationContext, Phase},
};

/// Phase that enriches every model and starts the model graph.
///
/// Models are visited in declared order. Each one is built with its
/// `required_models` already collected, so no model is touched again
/// after this phase.
pub struct ModelsPhase;

impl Phase for ModelsPhase {
    fn name(&self) -> &'static str {
        "models"
    }

    fn description(&self) -> &'static str {
        "Enrich models and collect their required models"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut enricher = Enricher::new(self.name(), &ctx.description, &ctx.config);

        let models: IndexMap<_, _> = ctx
            .description
            .definitions
            .iter()
            .map(|(name, schema)| (name.clone(), enricher.model(name, schema)))
            .collect();

        let diagnostics = enricher.finish();
        ctx.diagnostics.extend(diagnostics);
        ctx.graph = Some(EnrichedModelGraph {
            models,
            operations: Vec::new(),
        });
        Ok(())
    }
}
