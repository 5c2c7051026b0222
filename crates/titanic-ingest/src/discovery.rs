//! Input path checks and mode detection.

use std::ffi::OsStr;
use std::path::Path;

use titanic_model::Mode;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Checks that `path` references an existing regular file.
pub fn validate_input_path(path: &Path) -> Result<&Path> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(IngestError::InvalidInputPath {
            path: path.to_path_buf(),
        })
    }
}

/// Picks the conversion mode from the input file stem.
///
/// `train.csv` (stem `train`) is training; every other name is inference.
/// A path without a readable stem falls back to inference.
pub fn detect_mode(path: &Path) -> Mode {
    let mode = path
        .file_stem()
        .and_then(OsStr::to_str)
        .map_or(Mode::Inference, Mode::from_file_stem);
    debug!(path = %path.display(), %mode, "detected conversion mode");
    mode
}
