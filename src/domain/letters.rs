//! Letter labels produced by the classifier.
//!
//! The model's score vector is positionally aligned with the alphabet: index 0 is
//! `A`, index 25 is `Z`.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of classes the model scores, one per letter of the alphabet.
pub const NUM_LETTERS: usize = 26;

/// A single letter in `A..=Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Maps a class index to its letter. Returns `None` outside `0..26`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < NUM_LETTERS).then(|| Letter(index as u8))
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}
