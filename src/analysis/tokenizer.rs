//! Streaming word tokenizer.
//!
//! [`WordTokenizer`] turns any [`BufRead`] into a lazy sequence of
//! [`Token`]s in a single forward pass. Characters are decoded from UTF-8
//! incrementally off the reader's internal buffer, so memory use stays
//! bounded by the current word regardless of document size or line length.

use std::io::BufRead;

use crate::alphabet::Alphabet;
use crate::analysis::token::Token;
use crate::error::{PravopisError, Result};

/// Width of a UTF-8 sequence from its leading byte.
fn utf8_width(byte: u8) -> Option<usize> {
    match byte {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decodes characters one at a time from a buffered reader.
///
/// A multi-byte sequence split across two buffer fills is carried over in
/// `pending`.
struct CharReader<R: BufRead> {
    reader: R,
    pending: [u8; 4],
    pending_len: usize,
}

impl<R: BufRead> CharReader<R> {
    fn new(reader: R) -> Self {
        CharReader {
            reader,
            pending: [0; 4],
            pending_len: 0,
        }
    }

    fn decode(bytes: &[u8]) -> Result<char> {
        std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| PravopisError::analysis("input is not valid UTF-8"))
    }

    /// Read the next character, or `None` at end of stream.
    fn next_char(&mut self) -> Result<Option<char>> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                if self.pending_len > 0 {
                    return Err(PravopisError::analysis("input ends mid UTF-8 sequence"));
                }
                return Ok(None);
            }

            if self.pending_len == 0 {
                let width = utf8_width(buf[0])
                    .ok_or_else(|| PravopisError::analysis("input is not valid UTF-8"))?;
                if buf.len() >= width {
                    let ch = Self::decode(&buf[..width])?;
                    self.reader.consume(width);
                    return Ok(Some(ch));
                }
                // The sequence continues past the current buffer fill.
                let take = buf.len();
                self.pending[..take].copy_from_slice(&buf[..take]);
                self.pending_len = take;
                self.reader.consume(take);
            } else {
                let width = utf8_width(self.pending[0])
                    .ok_or_else(|| PravopisError::analysis("input is not valid UTF-8"))?;
                let take = (width - self.pending_len).min(buf.len());
                self.pending[self.pending_len..self.pending_len + take]
                    .copy_from_slice(&buf[..take]);
                self.pending_len += take;
                self.reader.consume(take);
                if self.pending_len == width {
                    let ch = Self::decode(&self.pending[..width])?;
                    self.pending_len = 0;
                    return Ok(Some(ch));
                }
            }
        }
    }
}

/// Splits a character stream into word tokens using a fixed alphabet.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    alphabet: Alphabet,
}

impl WordTokenizer {
    /// Create a tokenizer over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        WordTokenizer { alphabet }
    }

    /// The alphabet defining word characters.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Tokenize a reader into a lazy sequence of tokens.
    pub fn tokens<R: BufRead>(&self, reader: R) -> Tokens<'_, R> {
        Tokens {
            alphabet: &self.alphabet,
            chars: CharReader::new(reader),
            line: 1,
            finished: false,
        }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        WordTokenizer::new(Alphabet::default())
    }
}

/// Streaming token iterator returned by [`WordTokenizer::tokens`].
pub struct Tokens<'a, R: BufRead> {
    alphabet: &'a Alphabet,
    chars: CharReader<R>,
    line: u64,
    finished: bool,
}

impl<R: BufRead> Iterator for Tokens<'_, R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.finished {
            return None;
        }

        let mut word = String::new();
        loop {
            match self.chars.next_char() {
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                Ok(None) => {
                    self.finished = true;
                    if word.is_empty() {
                        return None;
                    }
                    return Some(Ok(Token::new(word, self.line)));
                }
                Ok(Some(ch)) if self.alphabet.contains(ch) => word.push(ch),
                Ok(Some(ch)) => {
                    // A non-word character ends the accumulated word, if
                    // any; the word keeps the line it ended on, and a
                    // newline bumps the counter afterwards.
                    if !word.is_empty() {
                        let token = Token::new(word, self.line);
                        if ch == '\n' {
                            self.line += 1;
                        }
                        return Some(Ok(token));
                    }
                    if ch == '\n' {
                        self.line += 1;
                    }
                }
            }
        }
    }
}
