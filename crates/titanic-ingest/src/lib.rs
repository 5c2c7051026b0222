pub mod discovery;
pub mod error;
pub mod parser;
pub mod reader;

pub use discovery::{detect_mode, validate_input_path};
pub use error::{IngestError, Result};
pub use parser::parse_line;
pub use reader::{DataLine, DataLines, ParsedRow, data_lines, open_data_lines, parse_rows};
