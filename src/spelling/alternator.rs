//! Candidate generation for spelling correction.
//!
//! Given a source word and an [`Alphabet`], this module enumerates the
//! strings reachable by the three elementary edits (insertion, deletion,
//! substitution), ordered by increasing true Levenshtein distance from the
//! source. The sequence is lazy across levels: a level is only materialized
//! when the consumer has exhausted the previous one, so abandoning the
//! iterator early never pays for deeper levels.
//!
//! Candidate counts grow superlinearly with the level; callers are expected
//! to keep the bound small (2–3 in practice).

use std::collections::HashSet;

use crate::alphabet::Alphabet;
use crate::spelling::levenshtein::distance_within;

/// Phases of the distance-1 edit enumeration, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditPhase {
    Insert,
    Substitute,
    Delete,
    Done,
}

/// Enumerates every single-edit variant of a word.
///
/// Phases run Insert → Substitute → Delete; Insert and Substitute sweep
/// (position, alphabet character) pairs, Delete sweeps positions.
/// Substituting a character for itself is skipped, so every emitted string
/// is at true distance exactly 1 from the source — but the raw stream may
/// emit the same string more than once (e.g. deleting either `t` of
/// `"catt"`). Use [`edits_within_one`] for the deduplicated set.
#[derive(Debug, Clone)]
pub struct SingleEdits<'a> {
    chars: Vec<char>,
    alphabet: &'a Alphabet,
    phase: EditPhase,
    position: usize,
    char_index: usize,
}

impl<'a> SingleEdits<'a> {
    /// Create the edit enumeration for `word`.
    pub fn new(word: &str, alphabet: &'a Alphabet) -> Self {
        SingleEdits {
            chars: word.chars().collect(),
            alphabet,
            phase: EditPhase::Insert,
            position: 0,
            char_index: 0,
        }
    }

    fn build(&self, edit: impl FnOnce(&mut Vec<char>)) -> String {
        let mut chars = self.chars.clone();
        edit(&mut chars);
        chars.into_iter().collect()
    }
}

impl Iterator for SingleEdits<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.phase {
                EditPhase::Insert => {
                    if self.position > self.chars.len() {
                        self.phase = EditPhase::Substitute;
                        self.position = 0;
                        self.char_index = 0;
                        continue;
                    }
                    if self.char_index >= self.alphabet.len() {
                        self.char_index = 0;
                        self.position += 1;
                        continue;
                    }
                    let ch = self.alphabet.chars()[self.char_index];
                    self.char_index += 1;
                    let position = self.position;
                    return Some(self.build(|chars| chars.insert(position, ch)));
                }
                EditPhase::Substitute => {
                    if self.position >= self.chars.len() {
                        self.phase = EditPhase::Delete;
                        self.position = 0;
                        continue;
                    }
                    if self.char_index >= self.alphabet.len() {
                        self.char_index = 0;
                        self.position += 1;
                        continue;
                    }
                    let ch = self.alphabet.chars()[self.char_index];
                    self.char_index += 1;
                    // Substituting a character for itself yields distance 0.
                    if ch == self.chars[self.position] {
                        continue;
                    }
                    let position = self.position;
                    return Some(self.build(|chars| chars[position] = ch));
                }
                EditPhase::Delete => {
                    if self.position >= self.chars.len() {
                        self.phase = EditPhase::Done;
                        continue;
                    }
                    let position = self.position;
                    self.position += 1;
                    return Some(self.build(|chars| {
                        chars.remove(position);
                    }));
                }
                EditPhase::Done => return None,
            }
        }
    }
}

/// The deduplicated distance-1 neighborhood of a word, in first-emission
/// order.
///
/// Contains no element equal to the source word and no duplicates; every
/// element is at true Levenshtein distance exactly 1.
pub fn edits_within_one<'a>(
    word: &str,
    alphabet: &'a Alphabet,
) -> impl Iterator<Item = String> + 'a {
    let mut seen = HashSet::new();
    SingleEdits::new(word, alphabet).filter(move |edit| seen.insert(edit.clone()))
}

/// Lazy sequence of all alternations of a word, ordered by increasing true
/// Levenshtein distance.
///
/// Level n is obtained by expanding every level n-1 string through
/// [`SingleEdits`] and keeping only the results whose exact distance to the
/// original word equals n. The exact-distance filter guards against edit
/// sequences that cancel out (an insert followed by a delete lands back at
/// a smaller true distance) and deduplicates each level.
///
/// Each call to [`Alternations::new`] or [`Alternations::up_to`] builds a
/// fresh, independent iterator; there is no shared cursor between calls.
#[derive(Debug, Clone)]
pub struct Alternations<'a> {
    word: String,
    alphabet: &'a Alphabet,
    max_level: Option<usize>,
    /// Level whose elements `current` is draining.
    level: usize,
    current: std::vec::IntoIter<String>,
    /// Full contents of the drained level, kept for expanding the next one.
    previous: Vec<String>,
    exhausted: bool,
}

impl<'a> Alternations<'a> {
    /// The unbounded sequence: conceptually infinite, one level at a time.
    pub fn new(word: &str, alphabet: &'a Alphabet) -> Self {
        Self::with_bound(word, alphabet, None)
    }

    /// The finite prefix up to and including level `max_distance`.
    pub fn up_to(word: &str, alphabet: &'a Alphabet, max_distance: usize) -> Self {
        Self::with_bound(word, alphabet, Some(max_distance))
    }

    fn with_bound(word: &str, alphabet: &'a Alphabet, max_level: Option<usize>) -> Self {
        Alternations {
            word: word.to_string(),
            alphabet,
            max_level,
            level: 0,
            current: Vec::new().into_iter(),
            // Level 0 is the word itself; it is expanded but never emitted.
            previous: vec![word.to_string()],
            exhausted: false,
        }
    }

    /// Materialize the next level from the previous one.
    fn advance_level(&mut self) -> bool {
        self.level += 1;
        if self.max_level.is_some_and(|max| self.level > max) {
            return false;
        }

        let mut seen = HashSet::new();
        let mut next = Vec::new();
        for source in &self.previous {
            for edit in SingleEdits::new(source, self.alphabet) {
                if distance_within(&edit, &self.word, self.level) == Some(self.level)
                    && seen.insert(edit.clone())
                {
                    next.push(edit);
                }
            }
        }

        if next.is_empty() {
            // Nothing left to expand (possible with a degenerate alphabet).
            return false;
        }
        self.previous = next.clone();
        self.current = next.into_iter();
        true
    }
}

impl Iterator for Alternations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(alternation) = self.current.next() {
                return Some(alternation);
            }
            if self.exhausted || !self.advance_level() {
                self.exhausted = true;
                return None;
            }
        }
    }
}
