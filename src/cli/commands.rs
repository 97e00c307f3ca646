//! Command implementations for the pravopis CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::checker::SpellChecker;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{PravopisError, Result};
use crate::lexicon::TrieLexicon;
use crate::spelling::distance;

/// Execute a CLI command.
pub fn execute_command(args: PravopisArgs) -> Result<()> {
    let lexicon = load_lexicon(&args)?;
    let mut checker = SpellChecker::new(lexicon, Alphabet::czech());

    match &args.command {
        Command::Check(check_args) => check(&checker, check_args.clone(), &args),
        Command::Correct(correct_args) => correct(&checker, correct_args.clone(), &args),
        Command::Add(add_args) => add(&mut checker, add_args.clone(), &args),
        Command::Has(has_args) => has(&checker, has_args.clone(), &args),
        Command::Alter(alter_args) => alter(&checker, alter_args.clone(), &args),
        Command::Shell => shell(&mut checker, &args),
    }
}

fn load_lexicon(args: &PravopisArgs) -> Result<TrieLexicon> {
    match (&args.wordlist, &args.snapshot) {
        (Some(wordlist), Some(snapshot)) => TrieLexicon::open(wordlist, snapshot, args.column),
        (Some(wordlist), None) => TrieLexicon::load_word_file(wordlist, args.column),
        (None, Some(snapshot)) => TrieLexicon::load_snapshot(snapshot),
        (None, None) => Err(PravopisError::invalid_argument(
            "a lexicon is required: pass --wordlist and/or --snapshot",
        )),
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        PravopisError::invalid_argument(format!("cannot open {}: {e}", path.display()))
    })?;
    Ok(BufReader::new(file))
}

/// Report unknown words in a document.
fn check(
    checker: &SpellChecker<TrieLexicon>,
    cmd: CheckArgs,
    cli_args: &PravopisArgs,
) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Checking: {}", cmd.input.display());
    }

    let reader = open_input(&cmd.input)?;
    match &cmd.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            checker.write_check_report(reader, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            checker.write_check_report(reader, &mut stdout)?;
        }
    }
    Ok(())
}

/// Report unknown words with ranked suggestions.
fn correct(
    checker: &SpellChecker<TrieLexicon>,
    cmd: CorrectArgs,
    cli_args: &PravopisArgs,
) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!(
            "Correcting: {} (distance {})",
            cmd.input.display(),
            cmd.distance
        );
    }

    let reader = open_input(&cmd.input)?;
    match &cmd.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            checker.write_correct_report(reader, &mut writer, cmd.distance)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            checker.write_correct_report(reader, &mut stdout, cmd.distance)?;
        }
    }
    Ok(())
}

/// Add a form to the lexicon, rewriting the snapshot when one is configured.
fn add(
    checker: &mut SpellChecker<TrieLexicon>,
    cmd: AddArgs,
    cli_args: &PravopisArgs,
) -> Result<()> {
    let added = checker.add_form(&cmd.form);
    let persisted = match &cli_args.snapshot {
        Some(path) => {
            checker.lexicon().save_snapshot(path)?;
            true
        }
        None => false,
    };

    let message = if added {
        "Form added"
    } else {
        "Form already known"
    };
    output_result(
        message,
        &AddResult {
            form: cmd.form,
            added,
            persisted,
        },
        cli_args,
    )
}

/// Test whether a form is known, capitalization variants included.
fn has(
    checker: &SpellChecker<TrieLexicon>,
    cmd: HasArgs,
    cli_args: &PravopisArgs,
) -> Result<()> {
    let known = checker.contains(&cmd.form);
    let message = if known { "Form known" } else { "Form unknown" };
    output_result(
        message,
        &HasResult {
            form: cmd.form,
            known,
        },
        cli_args,
    )
}

/// List the closest known forms, closest first.
fn alter(
    checker: &SpellChecker<TrieLexicon>,
    cmd: AlterArgs,
    cli_args: &PravopisArgs,
) -> Result<()> {
    let alternations = closest_forms(checker, &cmd.form, cmd.count);
    output_result(
        "Alternations",
        &AlterResult {
            form: cmd.form,
            alternations,
        },
        cli_args,
    )
}

/// The first `count` known forms near `form`, lexicon-filtered and ordered
/// by edit distance.
fn closest_forms(
    checker: &SpellChecker<TrieLexicon>,
    form: &str,
    count: usize,
) -> Vec<AlternationEntry> {
    checker
        .suggest(form)
        .take(count)
        .map(|suggestion| {
            let d = distance(form, &suggestion);
            AlternationEntry {
                form: suggestion,
                distance: d,
            }
        })
        .collect()
}

/// Interactive shell over a loaded lexicon.
fn shell(checker: &mut SpellChecker<TrieLexicon>, cli_args: &PravopisArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        print_shell_help();
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "help" => print_shell_help(),
            "exit" | "quit" => break,
            other => {
                if let Err(e) = run_shell_command(checker, cli_args, other, parts) {
                    eprintln!("error: {e}");
                }
            }
        }
    }
    Ok(())
}

fn run_shell_command<'a>(
    checker: &mut SpellChecker<TrieLexicon>,
    cli_args: &PravopisArgs,
    command: &str,
    mut rest: impl Iterator<Item = &'a str>,
) -> Result<()> {
    match command {
        "add" => {
            let form = shell_arg(rest.next(), "add FORM")?;
            let added = checker.add_form(form);
            if let Some(path) = &cli_args.snapshot {
                checker.lexicon().save_snapshot(path)?;
            }
            println!("{}", if added { "added" } else { "already known" });
        }
        "has" => {
            let form = shell_arg(rest.next(), "has FORM")?;
            println!(
                "{}",
                if checker.contains(form) {
                    "known"
                } else {
                    "unknown"
                }
            );
        }
        "alter" => {
            let form = shell_arg(rest.next(), "alter FORM [COUNT]")?;
            let count = match rest.next() {
                Some(n) => n.parse().map_err(|_| {
                    PravopisError::invalid_argument(format!("invalid count: {n}"))
                })?,
                None => 5,
            };
            for entry in closest_forms(checker, form, count) {
                println!("{} ({})", entry.form, entry.distance);
            }
        }
        "check" => {
            let path = shell_arg(rest.next(), "check FILE")?;
            let reader = open_input(Path::new(path))?;
            let mut stdout = io::stdout().lock();
            checker.write_check_report(reader, &mut stdout)?;
        }
        "correct" => {
            let path = shell_arg(rest.next(), "correct FILE [DISTANCE]")?;
            let max_distance = match rest.next() {
                Some(n) => n.parse().map_err(|_| {
                    PravopisError::invalid_argument(format!("invalid distance: {n}"))
                })?,
                None => 1,
            };
            let reader = open_input(Path::new(path))?;
            let mut stdout = io::stdout().lock();
            checker.write_correct_report(reader, &mut stdout, max_distance)?;
        }
        other => {
            println!("unknown command: {other} (try help)");
        }
    }
    Ok(())
}

fn shell_arg<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str> {
    arg.ok_or_else(|| PravopisError::invalid_argument(format!("usage: {usage}")))
}

fn print_shell_help() {
    println!("commands:");
    println!("  add FORM                add a form to the lexicon");
    println!("  has FORM                test whether a form is known");
    println!("  alter FORM [COUNT]      list the closest known forms");
    println!("  check FILE              report unknown words");
    println!("  correct FILE [DISTANCE] report unknown words with suggestions");
    println!("  help                    show this help");
    println!("  exit                    leave the shell");
}
