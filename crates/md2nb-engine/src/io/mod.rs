use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::notebook::{Notebook, NotebookMetadata, SerializeError};
use crate::parsing::{self, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to open input file {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("Failed to serialize notebook: {0}")]
    Serialize(#[from] SerializeError),
    #[error("Failed to write output file {path}: {source}")]
    OutputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convert an annotated markdown file into a notebook file, returning the
/// number of cells written.
pub fn convert(input_path: &Path, output_path: &Path) -> Result<usize, ConvertError> {
    convert_with_metadata(input_path, output_path, NotebookMetadata::default())
}

/// Convert with caller-supplied kernel metadata.
///
/// A failure in any phase aborts the whole conversion: nothing is written,
/// and a previously-existing output file is left untouched unless the write
/// phase itself was reached.
pub fn convert_with_metadata(
    input_path: &Path,
    output_path: &Path,
    metadata: NotebookMetadata,
) -> Result<usize, ConvertError> {
    let input = File::open(input_path).map_err(|source| ConvertError::InputUnavailable {
        path: input_path.to_path_buf(),
        source,
    })?;

    let notebook = parsing::parse_into(BufReader::new(input), Notebook::with_metadata(metadata))
        .map_err(|source| ConvertError::Parse {
            path: input_path.to_path_buf(),
            source,
        })?;

    let json = notebook.to_json()?;

    std::fs::write(output_path, json).map_err(|source| ConvertError::OutputUnavailable {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(notebook.cells.len())
}
