//! Domain-level structures: hand landmark samples and letter labels.

pub mod landmarks;
pub mod letters;

pub use landmarks::{FEATURE_LEN, LandmarkSet, NUM_LANDMARKS};
pub use letters::{Letter, NUM_LETTERS};
