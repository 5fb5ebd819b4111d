//! Operations phase - enriches every operation.

use discogen_ir::Operation;
use eyre::Result;

use crate::{
    enrich::Enricher,
    pipeline::{CompilationContext, Phase},
};

/// Phase that enriches every operation and adds it to the model graph.
///
/// Must run after `ModelsPhase`. Operations are visited path by path in
/// declared order, and by method within a path.
pub struct OperationsPhase;

impl Phase for OperationsPhase {
    fn name(&self) -> &'static str {
        "operations"
    }

    fn description(&self) -> &'static str {
        "Enrich operations and their parameters"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.graph_mut(self.name())?;

        let mut enricher = Enricher::new(self.name(), &ctx.description, &ctx.config);
        let operations: Vec<Operation> = ctx
            .description
            .paths
            .iter()
            .flat_map(|(path, item)| {
                item.operations()
                    .map(move |(method, op)| (path, method, op, item))
            })
            .map(|(path, method, op, item)| enricher.operation(path, method, op, &item.parameters))
            .collect();

        let diagnostics = enricher.finish();
        ctx.diagnostics.extend(diagnostics);
        ctx.graph_mut(self.name())?.operations = operations;
        Ok(())
    }
}
