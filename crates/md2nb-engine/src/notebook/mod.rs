use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target notebook schema (nbformat 4.4).
const NBFORMAT: u32 = 4;
const NBFORMAT_MINOR: u32 = 4;

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("Failed to encode notebook as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A Jupyter notebook document: ordered cells plus the descriptive metadata
/// and format version fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

/// One discrete unit of notebook content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    pub id: String,
    pub metadata: CellMetadata,
    pub source: Vec<String>,
    /// Never populated here; cells are constructed, not executed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<i64>,
    /// Present (and empty) for code cells, omitted for markdown cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
    Code,
}

/// Reserved per-cell metadata; always serializes as an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellMetadata {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: Kernelspec,
    pub language_info: LanguageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kernelspec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub file_extension: String,
    pub mimetype: String,
    pub name: String,
}

impl Default for Kernelspec {
    fn default() -> Self {
        Self {
            display_name: "Go".to_string(),
            language: "go".to_string(),
            name: "gophernotes".to_string(),
        }
    }
}

impl Default for LanguageInfo {
    fn default() -> Self {
        Self {
            file_extension: ".go".to_string(),
            mimetype: "text/x-go".to_string(),
            name: "go".to_string(),
        }
    }
}

impl Notebook {
    /// Create an empty notebook with the default (gophernotes) metadata.
    pub fn new() -> Self {
        Self::with_metadata(NotebookMetadata::default())
    }

    /// Create an empty notebook with caller-supplied kernel metadata.
    pub fn with_metadata(metadata: NotebookMetadata) -> Self {
        Self {
            cells: Vec::new(),
            metadata,
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Append a markdown cell.
    pub fn add_markdown_cell(&mut self, id: &str, content: &str) {
        self.cells.push(Cell {
            cell_type: CellType::Markdown,
            id: id.to_string(),
            metadata: CellMetadata::default(),
            source: split_lines(content),
            execution_count: None,
            outputs: None,
        });
    }

    /// Append a code cell. `outputs` is present but empty; the cell has
    /// never been executed.
    pub fn add_code_cell(&mut self, id: &str, content: &str) {
        self.cells.push(Cell {
            cell_type: CellType::Code,
            id: id.to_string(),
            metadata: CellMetadata::default(),
            source: split_lines(content),
            execution_count: None,
            outputs: Some(Vec::new()),
        });
    }

    /// Encode the notebook as indented JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, SerializeError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

/// Split cell content into notebook source lines. Every line keeps its
/// trailing newline except the last, which keeps one only if the content
/// ended in a newline.
fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for ch in content.chars() {
        current.push(ch);
        if ch == '\n' {
            lines.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
