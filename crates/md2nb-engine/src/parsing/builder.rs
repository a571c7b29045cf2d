use crate::notebook::Notebook;

use super::classify::{CellMarker, FenceSig, LineClass};

/// Which cell region the builder is currently inside.
#[derive(Debug, Clone, Copy)]
enum CellState {
    Outside,
    Markdown,
    Code { in_fence: bool },
}

/// Accumulates classified lines into notebook cells.
///
/// One builder is created per parse run; it owns the cell id counter, the
/// content accumulator, and the notebook under construction. There is no
/// state shared between runs.
pub struct CellBuilder {
    state: CellState,
    content: String,
    next_id: usize,
    notebook: Notebook,
}

impl CellBuilder {
    pub fn new(notebook: Notebook) -> Self {
        Self {
            state: CellState::Outside,
            content: String::new(),
            next_id: 0,
            notebook,
        }
    }

    pub fn push(&mut self, line: &LineClass) {
        if let Some(marker) = line.marker {
            self.flush();
            self.state = match marker {
                CellMarker::MarkdownOpen => CellState::Markdown,
                CellMarker::CodeOpen => CellState::Code { in_fence: false },
                CellMarker::MarkdownClose | CellMarker::CodeClose => CellState::Outside,
            };
            return;
        }

        // Fence lines are stripped inside code cell regions only; the same
        // text inside a markdown region stays literal content.
        if let CellState::Code { in_fence } = self.state {
            match line.fence {
                Some(FenceSig::Open) => {
                    self.state = CellState::Code { in_fence: true };
                    return;
                }
                Some(FenceSig::Close) if in_fence => {
                    self.state = CellState::Code { in_fence: false };
                    return;
                }
                _ => {}
            }
        }

        match self.state {
            // Content outside any cell region is dropped.
            CellState::Outside => {}
            _ => {
                if !self.content.is_empty() {
                    self.content.push('\n');
                }
                self.content.push_str(line.text);
            }
        }
    }

    pub fn finish(mut self) -> Notebook {
        // EOF flush
        self.flush();
        self.notebook
    }

    /// Save rule: emit the accumulated content as a cell, unless we are
    /// outside a cell region or the content trims to empty (in which case
    /// the id counter does not advance either).
    fn flush(&mut self) {
        let content = std::mem::take(&mut self.content);
        if content.trim().is_empty() {
            return;
        }

        match self.state {
            CellState::Outside => {}
            CellState::Markdown => {
                let id = self.alloc_id();
                self.notebook.add_markdown_cell(&id, &content);
            }
            CellState::Code { .. } => {
                let id = self.alloc_id();
                self.notebook.add_code_cell(&id, &content);
            }
        }
    }

    /// Ids are `cell-<N>`, zero-based, shared across both cell types.
    fn alloc_id(&mut self) -> String {
        let id = format!("cell-{}", self.next_id);
        self.next_id += 1;
        id
    }
}
