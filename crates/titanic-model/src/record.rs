use crate::mode::Mode;

/// The mode-dependent leading attribute of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    /// Training label: true when the source field is exactly `1`.
    Survived(bool),
    /// Inference identifier.
    PassengerId(i64),
}

impl Lead {
    /// Mode this lead attribute belongs to.
    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            Self::Survived(_) => Mode::Training,
            Self::PassengerId(_) => Mode::Inference,
        }
    }
}

/// One parsed passenger row.
///
/// `age` and `fare` stay as raw strings; an empty string means unknown and is
/// resolved by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerRecord {
    pub lead: Lead,
    pub class: i64,
    pub sex: String,
    pub age: String,
    pub siblings_spouses: i64,
    pub parents_children: i64,
    pub fare: String,
}

impl PassengerRecord {
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.sex == "male"
    }
}
