//! Per-attribute normalization rules.
//!
//! All ranges and bins are fixed. Integer categories use explicit case tables
//! whose last arm absorbs every other value, including out-of-range ones.

use titanic_model::{EncodeError, Lead};

/// Age that encodes to 0.0.
pub const AGE_CENTER: f64 = 30.0;
/// Years per unit of encoded age.
pub const AGE_SCALE: f64 = 60.0;
/// Fares strictly above this encode to 1.0.
pub const FARE_THRESHOLD: f64 = 55.0;

/// Label as 0.0/1.0, or the passenger id as a float.
#[allow(clippy::cast_precision_loss)]
pub fn encode_lead(lead: Lead) -> f64 {
    match lead {
        Lead::Survived(true) => 1.0,
        Lead::Survived(false) => 0.0,
        Lead::PassengerId(id) => id as f64,
    }
}

pub fn encode_class(class: i64) -> f64 {
    match class {
        1 => -1.0,
        2 => 0.0,
        _ => 1.0,
    }
}

pub fn encode_sex(sex: &str) -> f64 {
    if sex == "male" { -1.0 } else { 1.0 }
}

/// Empty age is unknown and encodes to 0.0, the same as [`AGE_CENTER`].
pub fn encode_age(age: &str) -> Result<f64, EncodeError> {
    if age.is_empty() {
        return Ok(0.0);
    }
    let years = parse_float("age", age)?;
    Ok((years - AGE_CENTER) / AGE_SCALE)
}

pub fn encode_siblings_spouses(count: i64) -> f64 {
    match count {
        0 => -1.0,
        1 => 0.0,
        _ => 1.0,
    }
}

pub fn encode_parents_children(count: i64) -> f64 {
    match count {
        0 => -1.0,
        1 => 0.0,
        2 => 0.5,
        _ => 1.0,
    }
}

/// Empty fare counts as 0.0 before thresholding.
pub fn encode_fare(fare: &str) -> Result<f64, EncodeError> {
    let amount = if fare.is_empty() {
        0.0
    } else {
        parse_float("fare", fare)?
    };
    Ok(if amount > FARE_THRESHOLD { 1.0 } else { -1.0 })
}

/// Parses a float, tolerating surrounding whitespace.
pub fn parse_float(field: &'static str, value: &str) -> Result<f64, EncodeError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| EncodeError::InvalidFloat {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_collapses_unknown_into_third() {
        assert_eq!(encode_class(1), -1.0);
        assert_eq!(encode_class(2), 0.0);
        assert_eq!(encode_class(3), 1.0);
        assert_eq!(encode_class(0), 1.0);
        assert_eq!(encode_class(-4), 1.0);
    }

    #[test]
    fn sex_distinguishes_male_only() {
        assert_eq!(encode_sex("male"), -1.0);
        assert_eq!(encode_sex("female"), 1.0);
        assert_eq!(encode_sex("Male"), 1.0);
        assert_eq!(encode_sex(""), 1.0);
    }

    #[test]
    fn age_is_centered_and_scaled() {
        assert_eq!(encode_age("").unwrap(), 0.0);
        assert_eq!(encode_age("30").unwrap(), 0.0);
        assert_eq!(encode_age("90").unwrap(), 1.0);
        assert_eq!(encode_age("0").unwrap(), -0.5);
        assert_eq!(encode_age("22").unwrap(), -0.13333333333333333);
    }

    #[test]
    fn blank_age_is_not_empty() {
        assert_eq!(
            encode_age(" ").unwrap_err(),
            EncodeError::InvalidFloat {
                field: "age",
                value: " ".to_string()
            }
        );
    }

    #[test]
    fn counts_bin_with_top_bucket_fallback() {
        assert_eq!(encode_siblings_spouses(0), -1.0);
        assert_eq!(encode_siblings_spouses(1), 0.0);
        assert_eq!(encode_siblings_spouses(2), 1.0);
        assert_eq!(encode_siblings_spouses(5), 1.0);

        assert_eq!(encode_parents_children(0), -1.0);
        assert_eq!(encode_parents_children(1), 0.0);
        assert_eq!(encode_parents_children(2), 0.5);
        assert_eq!(encode_parents_children(3), 1.0);
        assert_eq!(encode_parents_children(4), 1.0);
    }

    #[test]
    fn fare_threshold_is_strict() {
        assert_eq!(encode_fare("").unwrap(), -1.0);
        assert_eq!(encode_fare("55").unwrap(), -1.0);
        assert_eq!(encode_fare("55.0001").unwrap(), 1.0);
        assert_eq!(encode_fare("56").unwrap(), 1.0);
        assert!(encode_fare("free").is_err());
    }

    #[test]
    fn lead_encodes_label_and_id() {
        assert_eq!(encode_lead(Lead::Survived(true)), 1.0);
        assert_eq!(encode_lead(Lead::Survived(false)), 0.0);
        assert_eq!(encode_lead(Lead::PassengerId(892)), 892.0);
    }
}
