//! Fixed-width encoded feature vector.

/// Number of values emitted per record.
pub const FEATURE_COUNT: usize = 7;

/// Encoded features of one record, in output order:
/// lead, class, sex, age, siblings/spouses, parents/children, fare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    #[must_use]
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Label or identifier, depending on mode.
    #[must_use]
    pub fn lead(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::new(values)
    }
}
