use discogen_core::FileManifest;
use discogen_description::ApiDescription;
use discogen_ir::EnrichedModelGraph;
use eyre::Result;

use crate::{
    GeneratorConfig,
    pipeline::{Diagnostic, Pipeline},
};

/// Everything one generation run produces.
#[derive(Debug)]
pub struct Generation {
    pub graph: EnrichedModelGraph,
    pub files: FileManifest,
    pub diagnostics: Vec<Diagnostic>,
}

impl Generation {
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

/// Enrich a description with the built-in phases.
///
/// # Errors
///
/// Returns an error if a phase fails. Unresolved references and escaped
/// names do not fail the run; they are reported in
/// [`Generation::diagnostics`].
pub fn generate(description: ApiDescription, config: &GeneratorConfig) -> Result<Generation> {
    let mut ctx = Pipeline::new().run(description, config.clone())?;

    Ok(Generation {
        graph: ctx.take_graph()?,
        files: ctx.take_files()?,
        diagnostics: std::mem::take(&mut ctx.diagnostics),
    })
}
