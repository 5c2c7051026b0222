//! CLI library components for the passenger feature converter.

pub mod logging;
pub mod pipeline;
