//! Edit-distance metrics and candidate generation for spelling correction.

pub mod alternator;
pub mod levenshtein;

pub use alternator::{Alternations, SingleEdits, edits_within_one};
pub use levenshtein::{distance, distance_within};
