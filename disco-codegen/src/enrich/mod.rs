//! Per-entity enrichment.
//!
//! The [`Enricher`] builds every enriched entity exactly once, straight
//! from its source definition, and never touches it again. Findings that
//! do not stop generation (dangling model references, escaped names) are
//! recorded as diagnostics and handed back by [`Enricher::finish`].

mod model;
mod operation;
mod parameter;
mod property;

use discogen_description::ApiDescription;
use discogen_ir::TypeInfo;

pub use operation::{generate_operation_id, success_response};

use crate::{
    GeneratorConfig, NamingConvention, TypeResolver,
    pipeline::Diagnostic,
};

/// Builds enriched models, properties, operations and parameters.
pub struct Enricher<'a> {
    description: &'a ApiDescription,
    resolver: TypeResolver<'a>,
    naming: NamingConvention,
    phase: &'static str,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Enricher<'a> {
    /// Create an enricher whose diagnostics are attributed to `phase`.
    pub fn new(
        phase: &'static str,
        description: &'a ApiDescription,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            description,
            resolver: TypeResolver::new(&config.type_mapping),
            naming: config.naming(),
            phase,
            diagnostics: Vec::new(),
        }
    }

    /// Consume the enricher, returning the diagnostics it recorded.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Normalize a variable name, noting when it had to be escaped.
    fn variable_name(&mut self, name: &str, location: &str) -> String {
        if self.naming.needs_escape(name) {
            let message = format!("'{}' is a reserved word and was escaped", name);
            self.diagnostics.push(Diagnostic::info(self.phase, message).at(location));
        }
        self.naming.variable_name(name)
    }

    /// Warn when a resolved type names a model the description does not define.
    fn check_reference(&mut self, info: &TypeInfo, location: &str) {
        if let Some(model) = info.complex_type.as_deref()
            && !self.description.has_model(model)
        {
            self.warn_undefined_model(model, location);
        }
    }

    fn warn_unresolved_reference(&mut self, reference: &str, location: &str) {
        tracing::debug!(reference, location, "unresolved reference");
        self.diagnostics.push(
            Diagnostic::warning(self.phase, format!("unresolved reference '{}'", reference))
                .at(location),
        );
    }

    fn warn_undefined_model(&mut self, model: &str, location: &str) {
        tracing::debug!(model, location, "reference to undefined model");
        self.diagnostics.push(
            Diagnostic::warning(self.phase, format!("reference to undefined model '{}'", model))
                .at(location),
        );
    }
}
