//! Lexicons: sets of known word forms.
//!
//! The [`Lexicon`] trait captures the two capabilities the spell checker
//! needs — membership and single-word insertion — plus a provided
//! capitalization-variant lookup. [`TrieLexicon`] is the concrete
//! implementation, backed by the arena [`Trie`](trie::Trie) and persisted
//! through versioned [`snapshot`]s.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::error::{PravopisError, Result};

pub mod snapshot;
pub mod trie;

pub use trie::Trie;

/// A set of known word forms.
pub trait Lexicon {
    /// Check whether the exact form is present.
    fn contains(&self, form: &str) -> bool;

    /// Add a form, returning whether it was newly added.
    fn insert(&mut self, form: &str) -> bool;

    /// Check whether the form or one of its allowed capitalization variants
    /// is present.
    ///
    /// The variants, tried in order:
    /// 1. the form as given,
    /// 2. the form with its first character decapitalized (sentence-initial
    ///    capitalization),
    /// 3. the form fully lowercased, if it was fully uppercased,
    /// 4. the form lowercased with a capital first letter, if it was fully
    ///    uppercased.
    ///
    /// A single stored entry thus satisfies several surface capitalizations
    /// without duplicating entries. No other case folding is applied.
    fn contains_variants(&self, form: &str) -> bool {
        self.contains(form)
            || self.contains(&decapitalize_first(form))
            || self.contains(&lowercase_if_uppercase(form))
            || self.contains(&capitalized_lowercase_if_uppercase(form))
    }
}

/// Lowercase the first character of a word, leaving the rest untouched.
pub fn decapitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            first.to_lowercase().chain(chars).collect()
        }
        _ => word.to_string(),
    }
}

/// Check whether a word contains no lowercase characters.
pub fn is_all_uppercase(word: &str) -> bool {
    !word.chars().any(|c| c.is_lowercase())
}

/// Lowercase the whole word, but only if it is fully uppercased.
pub fn lowercase_if_uppercase(word: &str) -> String {
    if is_all_uppercase(word) {
        word.to_lowercase()
    } else {
        word.to_string()
    }
}

/// Lowercase the word keeping a capital first letter, but only if it is
/// fully uppercased.
pub fn capitalized_lowercase_if_uppercase(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if word.chars().count() > 1 && is_all_uppercase(word) => {
            let mut capitalized = first.to_string();
            capitalized.extend(chars.flat_map(|c| c.to_lowercase()));
            capitalized
        }
        _ => word.to_string(),
    }
}

/// A [`Lexicon`] backed by the arena trie.
#[derive(Debug, Clone, Default)]
pub struct TrieLexicon {
    trie: Trie,
}

impl TrieLexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        TrieLexicon { trie: Trie::new() }
    }

    /// Build a lexicon from any iterable of word forms.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TrieLexicon {
            trie: Trie::from_words(words),
        }
    }

    /// Wrap an already-built trie.
    pub fn from_trie(trie: Trie) -> Self {
        TrieLexicon { trie }
    }

    /// Load word forms from a text file.
    ///
    /// With `column = None` every line is one form. With `column = Some(n)`
    /// each line is tab-separated and the form is taken from the n-th
    /// (0-based) column — the layout of morphological dictionaries such as
    /// MorfFlex, where the form sits in column 2. Lines without that column
    /// are skipped. A missing or unreadable file is a fatal lexicon error.
    pub fn load_word_file<P: AsRef<Path>>(path: P, column: Option<usize>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PravopisError::lexicon(format!("cannot open word file {}: {e}", path.display()))
        })?;
        let reader = BufReader::new(file);

        let start = Instant::now();
        let mut trie = Trie::new();
        for line in reader.lines() {
            let line = line.map_err(|e| {
                PravopisError::lexicon(format!("cannot read word file {}: {e}", path.display()))
            })?;
            let form = match column {
                Some(n) => match line.split('\t').nth(n) {
                    Some(form) => form,
                    None => continue,
                },
                None => line.trim(),
            };
            if !form.is_empty() {
                trie.insert(form);
            }
        }

        info!(
            "loaded {} forms ({} trie nodes) from {} in {:.2?}",
            trie.len(),
            trie.node_count(),
            path.display(),
            start.elapsed()
        );
        Ok(TrieLexicon { trie })
    }

    /// Load the lexicon from a snapshot if one exists, otherwise build it
    /// from the word file and write the snapshot for the next run.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(
        word_file: P,
        snapshot_path: Q,
        column: Option<usize>,
    ) -> Result<Self> {
        let snapshot_path = snapshot_path.as_ref();
        if snapshot_path.is_file() {
            info!("loading lexicon snapshot {}", snapshot_path.display());
            let trie = snapshot::load(snapshot_path)?;
            return Ok(TrieLexicon { trie });
        }

        let lexicon = Self::load_word_file(word_file, column)?;
        snapshot::save(&lexicon.trie, snapshot_path)?;
        info!("wrote lexicon snapshot {}", snapshot_path.display());
        Ok(lexicon)
    }

    /// Load a lexicon from a snapshot file.
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(TrieLexicon {
            trie: snapshot::load(path)?,
        })
    }

    /// Save the lexicon to a snapshot file.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        snapshot::save(&self.trie, path)
    }

    /// Number of stored forms.
    pub fn len(&self) -> u64 {
        self.trie.len()
    }

    /// Check whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The backing trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl Lexicon for TrieLexicon {
    fn contains(&self, form: &str) -> bool {
        self.trie.contains(form)
    }

    fn insert(&mut self, form: &str) -> bool {
        self.trie.insert(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decapitalize_first() {
        assert_eq!(decapitalize_first("Praha"), "praha");
        assert_eq!(decapitalize_first("praha"), "praha");
        assert_eq!(decapitalize_first(""), "");
        assert_eq!(decapitalize_first("Ž"), "ž");
    }

    #[test]
    fn test_is_all_uppercase() {
        assert!(is_all_uppercase("PRAHA"));
        assert!(is_all_uppercase(""));
        // Digits and punctuation are neither case.
        assert!(is_all_uppercase("A1B"));
        assert!(!is_all_uppercase("Praha"));
        assert!(!is_all_uppercase("praha"));
    }

    #[test]
    fn test_lowercase_if_uppercase() {
        assert_eq!(lowercase_if_uppercase("PRAHA"), "praha");
        assert_eq!(lowercase_if_uppercase("Praha"), "Praha");
        assert_eq!(lowercase_if_uppercase("ŽLUTÝ"), "žlutý");
    }

    #[test]
    fn test_capitalized_lowercase_if_uppercase() {
        assert_eq!(capitalized_lowercase_if_uppercase("PRAHA"), "Praha");
        assert_eq!(capitalized_lowercase_if_uppercase("PrAHA"), "PrAHA");
        assert_eq!(capitalized_lowercase_if_uppercase("A"), "A");
        assert_eq!(capitalized_lowercase_if_uppercase(""), "");
    }

    #[test]
    fn test_contains_variants() {
        let mut lexicon = TrieLexicon::new();
        lexicon.insert("praha");

        assert!(lexicon.contains_variants("praha"));
        assert!(lexicon.contains_variants("Praha"));
        assert!(lexicon.contains_variants("PRAHA"));
        assert!(!lexicon.contains_variants("pRaHa"));
    }

    #[test]
    fn test_contains_variants_capitalized_entry() {
        // Only the listed variants apply, not arbitrary case folding.
        let mut lexicon = TrieLexicon::new();
        lexicon.insert("Praha");

        assert!(lexicon.contains_variants("Praha"));
        assert!(lexicon.contains_variants("PRAHA"));
        assert!(!lexicon.contains_variants("praha"));
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut lexicon = TrieLexicon::new();
        assert!(!lexicon.contains("kočka"));
        assert!(lexicon.insert("kočka"));
        assert!(lexicon.contains("kočka"));
        assert!(!lexicon.insert("kočka"));
    }

    #[test]
    fn test_load_word_file_plain() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "dog").unwrap();
        writeln!(file, "  cat  ").unwrap();
        writeln!(file).unwrap();
        file.flush().unwrap();

        let lexicon = TrieLexicon::load_word_file(file.path(), None).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("dog"));
    }

    #[test]
    fn test_load_word_file_tsv_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lemma\ttag\tkočka").unwrap();
        writeln!(file, "lemma\ttag\tkočky").unwrap();
        writeln!(file, "short line").unwrap();
        file.flush().unwrap();

        let lexicon = TrieLexicon::load_word_file(file.path(), Some(2)).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("kočka"));
        assert!(lexicon.contains("kočky"));
    }

    #[test]
    fn test_load_word_file_missing_is_fatal() {
        let err = TrieLexicon::load_word_file("/nonexistent/words.txt", None).unwrap_err();
        match err {
            PravopisError::Lexicon(_) => {}
            other => panic!("expected lexicon error, got {other}"),
        }
    }

    #[test]
    fn test_open_builds_then_reuses_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let words = dir.path().join("words.txt");
        let snapshot = dir.path().join("lexicon.snapshot");
        std::fs::write(&words, "cat\ndog\n").unwrap();

        let lexicon = TrieLexicon::open(&words, &snapshot, None).unwrap();
        assert!(lexicon.contains("cat"));
        assert!(snapshot.is_file());

        // Second open reads the snapshot; the word file is no longer needed.
        std::fs::remove_file(&words).unwrap();
        let reopened = TrieLexicon::open(&words, &snapshot, None).unwrap();
        assert!(reopened.contains("cat"));
        assert!(reopened.contains("dog"));
        assert_eq!(reopened.len(), 2);
    }
}
