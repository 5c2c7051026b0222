use titanic_model::{EncodeError, FeatureVector, Mode, PassengerRecord};

use crate::normalization::{
    encode_age, encode_class, encode_fare, encode_lead, encode_parents_children, encode_sex,
    encode_siblings_spouses,
};

/// Encodes one record into its seven features.
///
/// Fails with [`EncodeError::ModeMismatch`] if the record was parsed under a
/// different mode, and with [`EncodeError::InvalidFloat`] if a non-empty age
/// or fare is not a number.
pub fn encode(record: &PassengerRecord, mode: Mode) -> Result<FeatureVector, EncodeError> {
    let record_mode = record.lead.mode();
    if record_mode != mode {
        return Err(EncodeError::ModeMismatch {
            record: record_mode,
            requested: mode,
        });
    }
    Ok(FeatureVector::new([
        encode_lead(record.lead),
        encode_class(record.class),
        encode_sex(&record.sex),
        encode_age(&record.age)?,
        encode_siblings_spouses(record.siblings_spouses),
        encode_parents_children(record.parents_children),
        encode_fare(&record.fare)?,
    ]))
}
