//! Word-character alphabets.
//!
//! An [`Alphabet`] defines which characters count as part of a word. It is
//! used both by the tokenizer (word boundaries) and by the candidate
//! generator (the symbol universe for insertions and substitutions). The
//! alphabet is an explicit configuration value threaded through the
//! components that need it, not a process-wide global.

/// A fixed set of word characters.
///
/// Characters are kept sorted and deduplicated, so membership tests are a
/// binary search and iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from the given characters.
    ///
    /// Duplicates are removed and the characters are sorted.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Alphabet { chars }
    }

    /// The ASCII letters, both cases.
    pub fn ascii() -> Self {
        Alphabet::new(('a'..='z').chain('A'..='Z'))
    }

    /// The Czech alphabet: ASCII letters plus the accented letters, both cases.
    pub fn czech() -> Self {
        let accented = [
            'á', 'é', 'í', 'ý', 'ó', 'ú', 'ů', 'ž', 'š', 'č', 'ř', 'ď', 'ť', 'ň', 'ě',
        ];
        Alphabet::new(
            ('a'..='z')
                .chain('A'..='Z')
                .chain(accented.iter().copied())
                .chain(accented.iter().flat_map(|c| c.to_uppercase())),
        )
    }

    /// Check whether a character belongs to the alphabet.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }

    /// Iterate over the characters in sorted order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check whether the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::czech()
    }
}
