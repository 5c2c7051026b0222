//! Line-oriented reading of the passenger file.
//!
//! The first line is a header and is discarded without inspection. Every
//! following line is a data row, including blank ones, so a stray empty line
//! surfaces as a parse error rather than being skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use titanic_model::{Mode, PassengerRecord};
use tracing::trace;

use crate::error::{IngestError, Result};
use crate::parser::parse_line;

/// A raw data line with its 1-based line number in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLine {
    pub number: usize,
    pub text: String,
}

/// A parsed record together with the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub line: usize,
    pub record: PassengerRecord,
}

/// Iterator over the data lines of a passenger file, header excluded.
#[derive(Debug)]
pub struct DataLines<R> {
    path: PathBuf,
    lines: Lines<R>,
    number: usize,
}

impl<R> DataLines<R> {
    /// Source path used in error messages.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: BufRead> Iterator for DataLines<R> {
    type Item = Result<DataLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.number += 1;
            let text = match line {
                Ok(text) => text,
                Err(source) => {
                    return Some(Err(IngestError::FileRead {
                        path: self.path.clone(),
                        source,
                    }));
                }
            };
            if self.number == 1 {
                trace!(path = %self.path.display(), "skipping header line");
                continue;
            }
            return Some(Ok(DataLine {
                number: self.number,
                text,
            }));
        }
    }
}

/// Opens `path` and returns its data lines.
pub fn open_data_lines(path: &Path) -> Result<DataLines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(data_lines(BufReader::new(file), path))
}

/// Wraps an already open reader; `path` is only used to label errors.
pub fn data_lines<R: BufRead>(reader: R, path: &Path) -> DataLines<R> {
    DataLines {
        path: path.to_path_buf(),
        lines: reader.lines(),
        number: 0,
    }
}

/// Parses every data line under `mode`, stopping the caller at the first error
/// it chooses to propagate.
pub fn parse_rows<R: BufRead>(
    lines: DataLines<R>,
    mode: Mode,
) -> impl Iterator<Item = Result<ParsedRow>> {
    let path = lines.path().to_path_buf();
    lines.map(move |line| {
        let line = line?;
        parse_line(&line.text, mode)
            .map(|record| ParsedRow {
                line: line.number,
                record,
            })
            .map_err(|source| IngestError::Parse {
                path: path.clone(),
                line: line.number,
                source,
            })
    })
}
