//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PravopisArgs};
use crate::error::Result;

/// Result structure for the add command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddResult {
    pub form: String,
    pub added: bool,
    pub persisted: bool,
}

/// Result structure for the has command.
#[derive(Debug, Serialize, Deserialize)]
pub struct HasResult {
    pub form: String,
    pub known: bool,
}

/// Result structure for the alter command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AlterResult {
    pub form: String,
    pub alternations: Vec<AlternationEntry>,
}

/// A single generated alternation with its edit distance.
#[derive(Debug, Serialize, Deserialize)]
pub struct AlternationEntry {
    pub form: String,
    pub distance: usize,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PravopisArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PravopisArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    print_value_human(&value, 0);
    Ok(())
}

fn print_value_human(value: &serde_json::Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map {
                match val {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        println!("{pad}{key}:");
                        print_value_human(val, indent + 1);
                    }
                    _ => println!("{pad}{key}: {val}"),
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                match item {
                    serde_json::Value::Object(map) => {
                        let rendered = map
                            .iter()
                            .map(|(k, v)| format!("{k}: {v}"))
                            .collect::<Vec<_>>()
                            .join(", ");
                        println!("{pad}- {rendered}");
                    }
                    _ => println!("{pad}- {item}"),
                }
            }
        }
        _ => println!("{pad}{value}"),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PravopisArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{rendered}");
    Ok(())
}
