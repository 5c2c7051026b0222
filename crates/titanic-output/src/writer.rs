//! Feature file writer.
//!
//! Rows go to a temporary file in the output directory. [`FeatureFileWriter::finish`]
//! flushes it and renames it over the output path; dropping the writer
//! instead (on any error path) closes and removes the temporary file, so an
//! aborted run never leaves a partial feature file behind.
//!
//! The temporary file takes the permissions of an existing output, or those a
//! freshly created file would get (`0o666` minus the umask on Unix).

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use titanic_model::FeatureVector;
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::format::render_vector;

/// Extension given to feature files.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Replaces the extension of `input` with [`OUTPUT_EXTENSION`].
///
/// `data/train.csv` becomes `data/train.txt`; a name without an extension
/// gains one.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

#[derive(Debug)]
pub struct FeatureFileWriter {
    target: PathBuf,
    writer: BufWriter<NamedTempFile>,
    rows: usize,
}

impl FeatureFileWriter {
    /// Starts a feature file that will end up at `target`.
    pub fn create(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = create_temp(dir, target).map_err(|source| OutputError::Create {
            path: target.to_path_buf(),
            source,
        })?;
        debug!(
            target = %target.display(),
            temp = %temp.path().display(),
            "opened temporary feature file"
        );
        Ok(Self {
            target: target.to_path_buf(),
            writer: BufWriter::new(temp),
            rows: 0,
        })
    }

    /// Appends one feature line.
    pub fn write_vector(&mut self, features: &FeatureVector) -> Result<()> {
        writeln!(self.writer, "{}", render_vector(features)).map_err(|source| {
            OutputError::Write {
                path: self.target.clone(),
                source,
            }
        })?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Flushes and moves the file into place, returning the row count.
    pub fn finish(self) -> Result<usize> {
        let Self {
            target,
            writer,
            rows,
        } = self;
        let temp = writer.into_inner().map_err(|error| OutputError::Write {
            path: target.clone(),
            source: error.into_error(),
        })?;
        temp.persist(&target).map_err(|error| OutputError::Persist {
            path: target.clone(),
            source: error.error,
        })?;
        debug!(target = %target.display(), rows, "persisted feature file");
        Ok(rows)
    }
}

fn create_temp(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    match fs::metadata(target) {
        Ok(metadata) => {
            let temp = NamedTempFile::new_in(dir)?;
            temp.as_file().set_permissions(metadata.permissions())?;
            Ok(temp)
        }
        Err(_) => create_fresh_temp(dir),
    }
}

#[cfg(unix)]
fn create_fresh_temp(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // Passed to open(2), so the process umask still applies.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_fresh_temp(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
