//! Text rendering of feature values.
//!
//! Values use the shortest representation that reads back to the same `f64`.
//! Whole numbers keep a trailing `.0` (`1.0`, `892.0`). Magnitudes below
//! `1e-4` or from `1e16` upward switch to exponent form with a signed,
//! two-digit-minimum exponent (`1e-05`, `1.5e+16`).

use titanic_model::FeatureVector;

/// Renders one value.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // `{:?}` already picks the shortest round-trip digits and keeps `.0`.
    let rendered = format!("{value:?}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rendered,
    }
}

/// Renders a vector as space-separated values, without a line terminator.
pub fn render_vector(features: &FeatureVector) -> String {
    let mut line = String::new();
    for (index, value) in features.iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        line.push_str(&format_float(value));
    }
    line
}
