pub mod error;
pub mod features;
pub mod mode;
pub mod record;

pub use error::{EncodeError, ParseError};
pub use features::{FEATURE_COUNT, FeatureVector};
pub use mode::{Mode, TRAINING_STEM};
pub use record::{Lead, PassengerRecord};
