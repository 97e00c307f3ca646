//! Text analysis: tokens and the streaming word tokenizer.

pub mod token;
pub mod tokenizer;

pub use token::Token;
pub use tokenizer::{Tokens, WordTokenizer};
