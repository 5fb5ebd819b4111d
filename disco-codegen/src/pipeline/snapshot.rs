//! Pipeline snapshot plugin for debugging.
//!
//! Captures the serialized pipeline state after each phase so the
//! progression from description to enriched graph can be inspected.

use std::sync::{Arc, PoisonError, RwLock};

use discogen_core::FileManifest;
use discogen_ir::EnrichedModelGraph;
use eyre::Result;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// The pipeline state right after a phase completed.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    /// Available after the "models" phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<EnrichedModelGraph>,

    /// Available after the "plan" phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<FileManifest>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that records a [`PhaseSnapshot`] after every phase.
///
/// Clones share the same recording, so a clone can be handed to the
/// pipeline while the original is kept for reading.
///
/// # Example
///
/// ```ignore
/// let snapshots = SnapshotPlugin::new();
/// let ctx = Pipeline::new().plugin(snapshots.clone()).run(description, config)?;
///
/// println!("{}", snapshots.to_json()?);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotPlugin {
    snapshots: Arc<RwLock<Vec<PhaseSnapshot>>>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Render all collected snapshots as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshots())?)
    }

    fn capture(&self, phase: &str, ctx: &CompilationContext) {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            graph: ctx.graph.clone(),
            files: ctx.files.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        self.capture(phase, ctx);
        Ok(())
    }
}
