//! End-to-end tests for the spell checking pipeline.

use std::io::Write;

use pravopis::alphabet::Alphabet;
use pravopis::checker::{CheckerConfig, SpellChecker};
use pravopis::error::Result;
use pravopis::lexicon::{Lexicon, TrieLexicon};
use tempfile::TempDir;

fn ascii_checker(words: &[&str]) -> SpellChecker<TrieLexicon> {
    SpellChecker::new(TrieLexicon::from_words(words), Alphabet::ascii())
}

#[test]
fn test_check_pass_end_to_end() -> Result<()> {
    let checker = ascii_checker(&["cat", "dog"]);

    let mut report = Vec::new();
    checker.write_check_report("cat dg\ncatt".as_bytes(), &mut report)?;

    assert_eq!(
        String::from_utf8(report).unwrap(),
        "row:\tunknown\n1:\tdg\n2:\tcatt\n"
    );
    Ok(())
}

#[test]
fn test_correct_pass_end_to_end() -> Result<()> {
    let checker = ascii_checker(&["cat", "dog"]);

    let mut report = Vec::new();
    checker.write_correct_report("cat dg\ncatt".as_bytes(), &mut report, 1)?;

    assert_eq!(
        String::from_utf8(report).unwrap(),
        "row\tunknown\t->\talternations (distance)\n\
         1:\tdg\t->\tdog (1)\n\
         2:\tcatt\t->\tcat (1)\n"
    );
    Ok(())
}

#[test]
fn test_word_file_to_check_report() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("words.txt");
    std::fs::write(&words, "cat\ndog\n")?;

    let lexicon = TrieLexicon::load_word_file(&words, None)?;
    let checker = SpellChecker::new(lexicon, Alphabet::ascii());

    let unknown: Vec<String> = checker
        .check("the cat sat".as_bytes())
        .map(|token| token.map(|t| t.text))
        .collect::<Result<_>>()?;
    assert_eq!(unknown, vec!["the".to_string(), "sat".to_string()]);
    Ok(())
}

#[test]
fn test_tsv_word_file_with_snapshot_cache() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("morfflex.tsv");
    let snapshot = dir.path().join("lexicon.snapshot");

    let mut file = std::fs::File::create(&words)?;
    writeln!(file, "kočka\tNNFS1-----A----\tkočka")?;
    writeln!(file, "kočka\tNNFS2-----A----\tkočky")?;
    drop(file);

    let lexicon = TrieLexicon::open(&words, &snapshot, Some(2))?;
    assert_eq!(lexicon.len(), 2);
    assert!(snapshot.is_file());

    // The snapshot now stands in for the word list.
    let cached = TrieLexicon::open(&words, &snapshot, Some(2))?;
    assert!(cached.contains("kočka"));
    assert!(cached.contains("kočky"));
    assert_eq!(cached.len(), 2);
    Ok(())
}

#[test]
fn test_snapshot_round_trip_preserves_corrections() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("lexicon.snapshot");

    let lexicon = TrieLexicon::from_words(["cat", "dog"]);
    lexicon.save_snapshot(&snapshot)?;

    let checker = SpellChecker::new(TrieLexicon::load_snapshot(&snapshot)?, Alphabet::ascii());
    let mut report = Vec::new();
    checker.write_correct_report("dg".as_bytes(), &mut report, 1)?;
    assert!(String::from_utf8(report).unwrap().contains("dog (1)"));
    Ok(())
}

#[test]
fn test_capitalization_variants_in_running_text() -> Result<()> {
    let checker = ascii_checker(&["praha"]);

    let unknown: Vec<String> = checker
        .check("praha Praha PRAHA pRaHa".as_bytes())
        .map(|token| token.map(|t| t.text))
        .collect::<Result<_>>()?;
    assert_eq!(unknown, vec!["pRaHa".to_string()]);
    Ok(())
}

#[test]
fn test_suggestions_match_capitalization_variants() -> Result<()> {
    let checker = ascii_checker(&["praha"]);

    let suggestions: Vec<String> = checker.suggest_within("Praho", 1).collect();
    assert_eq!(suggestions, vec!["Praha".to_string()]);

    // The correction report carries the variant suggestion too.
    let mut report = Vec::new();
    checker.write_correct_report("Praho".as_bytes(), &mut report, 1)?;
    assert!(String::from_utf8(report).unwrap().contains("Praha (1)"));
    Ok(())
}

#[test]
fn test_added_form_takes_effect_immediately() -> Result<()> {
    let mut checker = ascii_checker(&["cat"]);

    let before: Vec<_> = checker.check("dog".as_bytes()).collect::<Result<_>>()?;
    assert_eq!(before.len(), 1);

    assert!(checker.add_form("dog"));
    let after: Vec<_> = checker.check("dog".as_bytes()).collect::<Result<_>>()?;
    assert!(after.is_empty());
    Ok(())
}

#[test]
fn test_suggestions_are_stable_across_calls() {
    let lexicon = TrieLexicon::from_words(["cat", "cut", "cot", "coat", "chat"]);
    let checker = SpellChecker::with_config(
        lexicon,
        Alphabet::ascii(),
        CheckerConfig {
            max_distance: 2,
            max_suggestions: 6,
        },
    );

    let first: Vec<String> = checker.suggest("ct").collect();
    let second: Vec<String> = checker.suggest("ct").collect();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_large_document_streams_without_buffering() -> Result<()> {
    let checker = ascii_checker(&["word"]);

    // 10k lines, one known and one unknown word each.
    let mut document = String::new();
    for _ in 0..10_000 {
        document.push_str("word wrd\n");
    }

    let mut unknown = 0u64;
    let mut last_line = 0u64;
    for token in checker.check(document.as_bytes()) {
        let token = token?;
        assert_eq!(token.text, "wrd");
        unknown += 1;
        last_line = token.line;
    }
    assert_eq!(unknown, 10_000);
    assert_eq!(last_line, 10_000);
    Ok(())
}
