//! Token type produced by tokenization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A word extracted from input text together with the line it occurred on.
///
/// The line number is 1-based and refers to the line on which the word
/// ends; a word can never span lines, since the newline character is not a
/// word character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The word text (non-empty, alphabet characters only).
    pub text: String,
    /// 1-based line number.
    pub line: u64,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, line: u64) -> Self {
        Token {
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.text)
    }
}
