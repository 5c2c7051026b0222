//! Conversion pipeline with explicit stages.
//!
//! 1. **Ingest**: validate the input path, detect the mode, open the data lines
//! 2. **Parse**: split each line into a passenger record
//! 3. **Encode**: map the record to its seven features
//! 4. **Output**: append the rendered line to the feature file
//!
//! The first failing row aborts the run. In that case the temporary output is
//! discarded and nothing is written at the output path.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{Level, debug, info, info_span, trace};

use titanic_ingest::{DataLines, detect_mode, open_data_lines, parse_rows, validate_input_path};
use titanic_model::{FeatureVector, Mode};
use titanic_output::{FeatureFileWriter, output_path_for, render_vector};
use titanic_transform::encode;

use crate::logging::redact_value;

/// Options for a single conversion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Parse and encode every row but write nothing.
    pub dry_run: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: Mode,
    pub rows: usize,
    /// False for dry runs.
    pub written: bool,
    pub duration: Duration,
}

/// Converts `input` into its feature file.
pub fn run_conversion(input: &Path, options: ConvertOptions) -> Result<ConversionResult> {
    let start = Instant::now();
    let input = validate_input_path(input)?;
    let mode = detect_mode(input);
    let output = output_path_for(input);
    let span = info_span!("convert", input = %input.display(), %mode);
    let _guard = span.enter();

    let lines = open_data_lines(input)?;
    let rows = if options.dry_run {
        debug!("dry run, output will not be written");
        convert_rows(lines, mode, |_| Ok(()))?
    } else {
        let mut writer = FeatureFileWriter::create(&output)?;
        convert_rows(lines, mode, |features| {
            writer.write_vector(features)?;
            Ok(())
        })?;
        writer
            .finish()
            .with_context(|| format!("write features: {}", output.display()))?
    };

    let duration = start.elapsed();
    info!(
        rows,
        output = %output.display(),
        duration_ms = duration.as_millis(),
        "conversion complete"
    );
    Ok(ConversionResult {
        input: input.to_path_buf(),
        output,
        mode,
        rows,
        written: !options.dry_run,
        duration,
    })
}

/// Parses and encodes every data line, handing each vector to `sink` in
/// input order. Returns the number of rows converted.
pub fn convert_rows<R, F>(lines: DataLines<R>, mode: Mode, mut sink: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(&FeatureVector) -> Result<()>,
{
    let path = lines.path().to_path_buf();
    let mut count = 0usize;
    for row in parse_rows(lines, mode) {
        let row = row?;
        let features = encode(&row.record, mode)
            .with_context(|| format!("{}:{}: encode record", path.display(), row.line))?;
        if tracing::enabled!(Level::TRACE) {
            let rendered = render_vector(&features);
            trace!(line = row.line, features = redact_value(&rendered), "encoded row");
        }
        sink(&features)?;
        count += 1;
    }
    Ok(count)
}
