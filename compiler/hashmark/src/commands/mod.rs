//! Command implementations for the hashmark CLI.

mod edit;

use std::path::Path;

use crate::error::CliError;

pub use edit::{
    edit_content, edit_file, edit_reader, render_diff, run_edit, EditConfig, EditResult,
    EditSummary, LineRange, LineRangeError,
};

/// Read a file to a string, attaching the path to any error.
pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
