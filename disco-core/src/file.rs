use serde::Serialize;

use crate::utils::{MODEL_FILE_EXTENSION, to_file_name};

/// What a planned document contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// One model schema
    Model,
    /// The aggregate document listing every operation
    Api,
}

/// A document a generation run will produce.
///
/// Paths are relative to the output directory chosen by the writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    path: String,
    kind: FileKind,
    source: String,
    requires: Vec<String>,
}

impl PlannedFile {
    /// Plan the document for a model (e.g., "UserAccount" -> "user_account.json")
    pub fn model(name: impl Into<String>, requires: Vec<String>) -> Self {
        let name = name.into();
        Self {
            path: format!("{}{}", to_file_name(&name), MODEL_FILE_EXTENSION),
            kind: FileKind::Model,
            source: name,
            requires,
        }
    }

    /// Plan the aggregate api document
    pub fn api(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: FileKind::Api,
            source: "api".to_string(),
            requires: Vec::new(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Name of the entity the document is rendered from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Relative references this document points into
    pub fn requires(&self) -> &[String] {
        &self.requires
    }
}

/// Ordered list of documents a generation run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileManifest {
    files: Vec<PlannedFile>,
}

impl FileManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a planned file
    pub fn push(&mut self, file: PlannedFile) {
        self.files.push(file);
    }

    /// All planned files in emission order
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Find a planned file by path
    pub fn get(&self, path: &str) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Planned model documents
    pub fn models(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|f| f.kind == FileKind::Model)
    }

    /// The aggregate api document, if planned
    pub fn api(&self) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.kind == FileKind::Api)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
