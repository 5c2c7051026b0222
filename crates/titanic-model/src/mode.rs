//! Conversion mode and the positional field contract of each mode.

use std::fmt;

/// File stem that switches a run to training mode.
pub const TRAINING_STEM: &str = "train";

/// Offsets into a comma-split training line.
///
/// Order: survived, class, sex, age, siblings/spouses, parents/children, fare.
/// Negative offsets count from the end of the line.
const TRAINING_OFFSETS: [isize; 7] = [1, 2, -8, -7, -6, -5, -3];

/// Offsets into a comma-split inference line.
///
/// Same order as training, with the passenger id in place of the label.
const INFERENCE_OFFSETS: [isize; 7] = [0, 1, -8, -7, -6, -5, -3];

/// Record schema and lead feature selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Rows carry a survival label; the lead feature is 0.0 or 1.0.
    Training,
    /// Rows carry a passenger id; the lead feature is the id.
    Inference,
}

impl Mode {
    /// Select the mode from an input file stem.
    ///
    /// Only the exact stem `train` selects training; every other stem,
    /// including `Train` or `train_2`, selects inference.
    #[must_use]
    pub fn from_file_stem(stem: &str) -> Self {
        if stem == TRAINING_STEM {
            Self::Training
        } else {
            Self::Inference
        }
    }

    /// Positional offsets for the seven selected fields.
    #[must_use]
    pub fn field_offsets(self) -> &'static [isize; 7] {
        match self {
            Self::Training => &TRAINING_OFFSETS,
            Self::Inference => &INFERENCE_OFFSETS,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Training => "training",
            Self::Inference => "inference",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
