//! Feature file output.
//!
//! - [`format_float`] / [`render_vector`]: text form of one output line
//! - [`output_path_for`]: `<input>.txt` next to the input
//! - [`FeatureFileWriter`]: writes rows to a temporary file and moves it into
//!   place once every row succeeded

pub mod error;
pub mod format;
pub mod writer;

pub use error::{OutputError, Result};
pub use format::{format_float, render_vector};
pub use writer::{FeatureFileWriter, OUTPUT_EXTENSION, output_path_for};
