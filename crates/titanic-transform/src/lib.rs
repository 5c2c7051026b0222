//! Feature encoding for passenger records.
//!
//! - **encoder**: record to [`FeatureVector`](titanic_model::FeatureVector)
//! - **normalization**: the per-attribute mapping rules

pub mod encoder;
pub mod normalization;

pub use encoder::encode;
pub use normalization::{
    AGE_CENTER, AGE_SCALE, FARE_THRESHOLD, encode_age, encode_class, encode_fare, encode_lead,
    encode_parents_children, encode_sex, encode_siblings_spouses, parse_float,
};
