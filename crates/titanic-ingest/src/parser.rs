//! Positional record parser.
//!
//! Lines are split on every comma with no quote handling, so a quoted name
//! such as `"Doe, J"` spans two fields. The trailing attributes are addressed
//! from the end of the line for that reason; see [`Mode::field_offsets`].

use titanic_model::{Lead, Mode, ParseError, PassengerRecord};

/// Parses one data line into a record under `mode`.
pub fn parse_line(line: &str, mode: Mode) -> Result<PassengerRecord, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    let mut selected = [""; 7];
    for (slot, &offset) in selected.iter_mut().zip(mode.field_offsets()) {
        *slot = field_at(&fields, offset)?;
    }
    let [lead, class, sex, age, siblings_spouses, parents_children, fare] = selected;

    let lead = match mode {
        Mode::Training => Lead::Survived(lead == "1"),
        Mode::Inference => Lead::PassengerId(parse_int("passenger_id", lead)?),
    };

    Ok(PassengerRecord {
        lead,
        class: parse_int("class", class)?,
        sex: sex.to_string(),
        age: age.to_string(),
        siblings_spouses: parse_int("siblings_spouses", siblings_spouses)?,
        parents_children: parse_int("parents_children", parents_children)?,
        fare: fare.to_string(),
    })
}

fn field_at<'a>(fields: &[&'a str], offset: isize) -> Result<&'a str, ParseError> {
    let field_count = fields.len();
    let index = match usize::try_from(offset) {
        Ok(index) => Some(index),
        Err(_) => field_count.checked_sub(offset.unsigned_abs()),
    };
    index
        .and_then(|index| fields.get(index).copied())
        .ok_or(ParseError::FieldOutOfRange {
            offset,
            field_count,
        })
}

// Surrounding whitespace is tolerated, anything else must be a plain integer.
fn parse_int(field: &'static str, value: &str) -> Result<i64, ParseError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}
