//! Spell checker orchestration.
//!
//! [`SpellChecker`] ties a [`Lexicon`], an [`Alphabet`] and the streaming
//! tokenizer together: membership with capitalization variants, ordered
//! suggestion generation, and the two document passes (`check` for unknown
//! words, `correct` for unknown words with suggestions). Both passes pull
//! tokens lazily, so arbitrarily large documents are processed in constant
//! memory.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::analysis::{Token, Tokens, WordTokenizer};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::spelling::{distance, Alternations};

/// Tunable limits for suggestion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Largest edit distance explored by [`SpellChecker::suggest`].
    pub max_distance: usize,
    /// Cap on suggestions attached to a single correction.
    pub max_suggestions: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            max_distance: 2,
            max_suggestions: 6,
        }
    }
}

/// An unknown word together with its ranked replacement candidates.
///
/// Suggestions are ordered by edit distance, closest first; candidates at
/// the same distance keep the deterministic alternation order. Each entry
/// carries its exact distance from the misspelled form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub token: Token,
    pub suggestions: Vec<(String, usize)>,
}

/// A lexicon-backed spell checker over a fixed alphabet.
#[derive(Debug, Clone)]
pub struct SpellChecker<L: Lexicon> {
    lexicon: L,
    tokenizer: WordTokenizer,
    config: CheckerConfig,
}

impl<L: Lexicon> SpellChecker<L> {
    /// Create a checker with the default configuration.
    pub fn new(lexicon: L, alphabet: Alphabet) -> Self {
        Self::with_config(lexicon, alphabet, CheckerConfig::default())
    }

    pub fn with_config(lexicon: L, alphabet: Alphabet, config: CheckerConfig) -> Self {
        SpellChecker {
            lexicon,
            tokenizer: WordTokenizer::new(alphabet),
            config,
        }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.tokenizer.alphabet()
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Add a form to the lexicon, returning whether it was newly added.
    pub fn add_form(&mut self, form: &str) -> bool {
        self.lexicon.insert(form)
    }

    /// Check whether a form or one of its capitalization variants is known.
    pub fn contains(&self, form: &str) -> bool {
        self.lexicon.contains_variants(form)
    }

    /// Known forms near `word`, closest first, up to the configured
    /// distance.
    ///
    /// The sequence is lazy and deterministic: a second call over the same
    /// lexicon yields the same words in the same order.
    pub fn suggest<'a>(&'a self, word: &str) -> impl Iterator<Item = String> + 'a {
        self.suggest_within(word, self.config.max_distance)
    }

    /// Like [`suggest`](Self::suggest) with an explicit distance bound.
    ///
    /// Candidates are accepted through the same capitalization-variant
    /// cascade as running text, so a stored `praha` lets the capitalized
    /// candidate `Praha` through.
    pub fn suggest_within<'a>(
        &'a self,
        word: &str,
        max_distance: usize,
    ) -> impl Iterator<Item = String> + 'a {
        Alternations::up_to(word, self.tokenizer.alphabet(), max_distance)
            .filter(|candidate| self.lexicon.contains_variants(candidate))
    }

    /// Stream the unknown words of a document.
    ///
    /// Membership is variant-aware, so a stored `praha` also accepts
    /// `Praha` and `PRAHA` in running text.
    pub fn check<R: BufRead>(&self, reader: R) -> Check<'_, L, R> {
        Check {
            checker: self,
            tokens: self.tokenizer.tokens(reader),
        }
    }

    /// Stream the unknown words of a document with ranked suggestions.
    pub fn correct<R: BufRead>(&self, reader: R, max_distance: usize) -> Correct<'_, L, R> {
        Correct {
            unknown: self.check(reader),
            max_distance,
        }
    }

    /// Run the check pass and render it as a tab-separated report.
    pub fn write_check_report<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<()> {
        writeln!(writer, "row:\tunknown")?;
        for token in self.check(reader) {
            let token = token?;
            writeln!(writer, "{}:\t{}", token.line, token.text)?;
        }
        Ok(())
    }

    /// Run the correction pass and render it as a tab-separated report.
    pub fn write_correct_report<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        max_distance: usize,
    ) -> Result<()> {
        writeln!(writer, "row\tunknown\t->\talternations (distance)")?;
        for correction in self.correct(reader, max_distance) {
            let correction = correction?;
            let rendered = correction
                .suggestions
                .iter()
                .map(|(form, d)| format!("{form} ({d})"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                writer,
                "{}:\t{}\t->\t{}",
                correction.token.line, correction.token.text, rendered
            )?;
        }
        Ok(())
    }
}

/// Streaming iterator over unknown tokens, returned by
/// [`SpellChecker::check`].
pub struct Check<'a, L: Lexicon, R: BufRead> {
    checker: &'a SpellChecker<L>,
    tokens: Tokens<'a, R>,
}

impl<L: Lexicon, R: BufRead> Iterator for Check<'_, L, R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        loop {
            match self.tokens.next()? {
                Err(e) => return Some(Err(e)),
                Ok(token) if !self.checker.contains(&token.text) => return Some(Ok(token)),
                Ok(_) => continue,
            }
        }
    }
}

/// Streaming iterator over corrections, returned by
/// [`SpellChecker::correct`].
pub struct Correct<'a, L: Lexicon, R: BufRead> {
    unknown: Check<'a, L, R>,
    max_distance: usize,
}

impl<L: Lexicon, R: BufRead> Iterator for Correct<'_, L, R> {
    type Item = Result<Correction>;

    fn next(&mut self) -> Option<Result<Correction>> {
        let token = match self.unknown.next()? {
            Ok(token) => token,
            Err(e) => return Some(Err(e)),
        };
        let checker = self.unknown.checker;
        let suggestions = checker
            .suggest_within(&token.text, self.max_distance)
            .take(checker.config.max_suggestions)
            .map(|form| {
                let d = distance(&token.text, &form);
                (form, d)
            })
            .collect();
        Some(Ok(Correction { token, suggestions }))
    }
}
