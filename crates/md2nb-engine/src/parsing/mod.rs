pub mod builder;
pub mod classify;

use std::io::BufRead;

use crate::notebook::Notebook;
use builder::CellBuilder;
use classify::classify;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read input line: {0}")]
    Read(#[from] std::io::Error),
}

/// Parse an annotated markdown stream into a notebook with the default
/// kernel metadata.
pub fn parse<R: BufRead>(reader: R) -> Result<Notebook, ParseError> {
    parse_into(reader, Notebook::new())
}

/// Parse an annotated markdown stream, appending cells to a
/// caller-constructed notebook (used when kernel metadata comes from
/// configuration).
///
/// Parsing is all-or-nothing: a read failure mid-scan discards everything
/// accumulated so far and surfaces the error.
pub fn parse_into<R: BufRead>(reader: R, notebook: Notebook) -> Result<Notebook, ParseError> {
    let mut cells = CellBuilder::new(notebook);

    for line in reader.lines() {
        let line = line?;
        cells.push(&classify(&line));
    }

    Ok(cells.finish())
}
