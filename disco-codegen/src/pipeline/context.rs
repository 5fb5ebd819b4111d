//! Compilation context passed through pipeline phases.

use discogen_core::FileManifest;
use discogen_description::ApiDescription;
use discogen_ir::EnrichedModelGraph;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::GeneratorConfig;

/// State of one generation run as it moves through the phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The description being enriched.
    pub description: ApiDescription,
    /// Configuration of this run.
    pub config: GeneratorConfig,
    /// The enriched graph (models after `models`, operations after `operations`).
    pub graph: Option<EnrichedModelGraph>,
    /// The planned documents (populated by `plan`).
    pub files: Option<FileManifest>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(description: ApiDescription, config: GeneratorConfig) -> Self {
        Self {
            description,
            config,
            graph: None,
            files: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The graph, or an error naming the phase that needs it.
    pub fn graph_mut(&mut self, phase: &str) -> Result<&mut EnrichedModelGraph> {
        self.graph
            .as_mut()
            .ok_or_else(|| eyre!("model graph not set - {} must run after the models phase", phase))
    }

    /// Take the graph out of the context.
    pub fn take_graph(&mut self) -> Result<EnrichedModelGraph> {
        self.graph
            .take()
            .ok_or_else(|| eyre!("model graph not set - did the models phase run?"))
    }

    /// Take the file manifest out of the context.
    pub fn take_files(&mut self) -> Result<FileManifest> {
        self.files
            .take()
            .ok_or_else(|| eyre!("file manifest not set - did the plan phase run?"))
    }
}
