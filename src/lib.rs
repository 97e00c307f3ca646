//! # Pravopis
//!
//! A trie-backed spell checker with edit-distance suggestions.
//!
//! ## Features
//!
//! - Arena-allocated trie lexicon with a versioned, checksummed snapshot
//!   format
//! - Capitalization-variant membership (`praha` accepts `Praha` and `PRAHA`)
//! - Lazy alternation generation ordered by exact edit distance
//! - Streaming, line-aware tokenization of arbitrarily large documents
//! - Check and correct passes with tab-separated reports

pub mod alphabet;
pub mod analysis;
pub mod checker;
pub mod cli;
pub mod error;
pub mod lexicon;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
