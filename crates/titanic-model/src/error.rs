use thiserror::Error;

use crate::mode::Mode;

/// Errors raised while splitting a raw line into a passenger record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A positional offset does not exist in the split line.
    #[error("field offset {offset} out of range for a line with {field_count} fields")]
    FieldOutOfRange { offset: isize, field_count: usize },

    /// An integer-typed field does not parse as an integer.
    #[error("field '{field}' is not an integer: '{value}'")]
    InvalidInteger { field: &'static str, value: String },
}

/// Errors raised while encoding a record into features.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A numeric string field does not parse as a float.
    #[error("field '{field}' is not a number: '{value}'")]
    InvalidFloat { field: &'static str, value: String },

    /// The record was parsed under a different mode than the encoder runs in.
    #[error("record parsed as {record} cannot be encoded as {requested}")]
    ModeMismatch { record: Mode, requested: Mode },
}
