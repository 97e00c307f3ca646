//! Command line argument parsing for the pravopis CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pravopis - a trie-backed spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "pravopis")]
#[command(about = "A trie-backed spell checker with edit-distance suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PravopisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Word list file (one form per line, or TSV with --column)
    #[arg(short = 'w', long, value_name = "WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Lexicon snapshot file (built from the word list on first use)
    #[arg(short = 's', long, value_name = "SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Zero-based column holding the word form in a TSV word list
    #[arg(short = 'c', long, value_name = "COLUMN")]
    pub column: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PravopisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report unknown words in a document
    Check(CheckArgs),

    /// Report unknown words with ranked suggestions
    Correct(CorrectArgs),

    /// Add a form to the lexicon
    Add(AddArgs),

    /// Test whether a form is known
    Has(HasArgs),

    /// List the closest known forms
    Alter(AlterArgs),

    /// Interactive shell
    Shell,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Document to check
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report destination (stdout when omitted)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Arguments for the correct command
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Document to check
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report destination (stdout when omitted)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Maximum edit distance for suggestions
    #[arg(short, long, default_value = "1")]
    pub distance: usize,
}

/// Arguments for adding a form
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Form to add
    #[arg(value_name = "FORM")]
    pub form: String,
}

/// Arguments for membership testing
#[derive(Parser, Debug, Clone)]
pub struct HasArgs {
    /// Form to look up
    #[arg(value_name = "FORM")]
    pub form: String,
}

/// Arguments for listing alternations
#[derive(Parser, Debug, Clone)]
pub struct AlterArgs {
    /// Form to alter
    #[arg(value_name = "FORM")]
    pub form: String,

    /// Number of forms to list
    #[arg(value_name = "COUNT", default_value = "5")]
    pub count: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
