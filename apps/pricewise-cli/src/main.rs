//! # Pricewise CLI
//!
//! Command-line front end for the comparison engine.
//!
//! ## Usage
//! ```bash
//! # Compare a list across stores (text report)
//! pricewise compare ./weekly.json
//!
//! # Same, as JSON for another program
//! pricewise compare ./weekly.json --json
//!
//! # Split a pasted list into items
//! pricewise parse ./groceries.txt
//!
//! # Suggested stores for a location
//! pricewise stores IL "Tel Aviv"
//! ```
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  args ──► Command                                                       │
//! │              │                                                          │
//! │  CliConfig ──┤  (defaults < pricewise.toml < PRICEWISE_* env)           │
//! │              ▼                                                          │
//! │  compare: ComparisonRequest ──► compare_list ──► TextReport / JSON      │
//! │  parse:   list text ──► parse_list_text ──► items + share token         │
//! │  stores:  country, city ──► stores_for_location                         │
//! │                                                                         │
//! │  tracing ──► stderr                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod report;
mod request;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pricewise_core::comparison::compare_list;
use pricewise_core::parse::parse_list_text;
use pricewise_core::stores::{generate_share_token, stores_for_location, supported_countries};
use pricewise_core::validation::validate_list_name;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::report::TextReport;
use crate::request::ComparisonRequest;

const USAGE: &str = "\
Pricewise - compare shopping list prices across stores

Usage:
  pricewise compare <REQUEST.json> [--json]
  pricewise parse <LIST.txt> [--json]
  pricewise stores [COUNTRY] [CITY]

Options:
  --json        Print machine-readable JSON instead of text
  -h, --help    Show this help message

Configuration:
  pricewise.toml in the working directory (or the file named by
  PRICEWISE_CONFIG), overridden by PRICEWISE_* environment variables.";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Compare { path: PathBuf, json: bool },
    Parse { path: PathBuf, json: bool },
    Stores { country: Option<String>, city: Option<String> },
    Help,
}

impl Command {
    /// Parses arguments after the program name.
    fn parse(args: &[String]) -> CliResult<Self> {
        let mut json = false;
        let mut positional: Vec<&str> = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--json" => json = true,
                "--help" | "-h" => return Ok(Command::Help),
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option '{}'", flag)));
                }
                value => positional.push(value),
            }
        }

        let Some((&command, rest)) = positional.split_first() else {
            return Ok(Command::Help);
        };

        match (command, rest) {
            ("compare", [path]) => Ok(Command::Compare {
                path: PathBuf::from(*path),
                json,
            }),
            ("parse", [path]) => Ok(Command::Parse {
                path: PathBuf::from(*path),
                json,
            }),
            ("stores", rest) if rest.len() <= 2 => Ok(Command::Stores {
                country: rest.first().map(|s| s.to_string()),
                city: rest.get(1).map(|s| s.to_string()),
            }),
            ("help", []) => Ok(Command::Help),
            ("compare" | "parse" | "stores", _) => Err(CliError::Usage(format!(
                "wrong number of arguments for '{}'",
                command
            ))),
            _ => Err(CliError::Usage(format!("unknown command '{}'", command))),
        }
    }
}

/// Initializes tracing (logging) to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Otherwise the configured `log_level` (default: `info`)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let command = match Command::parse(&args) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", USAGE);
            return Err(err.into());
        }
    };

    let config = CliConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.log_level);
    info!(currency = %config.currency_code, country = %config.country, "Configuration loaded");

    match command {
        Command::Compare { path, json } => run_compare(&path, json, &config),
        Command::Parse { path, json } => run_parse(&path, json),
        Command::Stores { country, city } => {
            run_stores(country.as_deref(), city.as_deref(), &config);
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

// =============================================================================
// Commands
// =============================================================================

fn run_compare(path: &Path, json: bool, config: &CliConfig) -> anyhow::Result<()> {
    let request = ComparisonRequest::from_path(path)?;
    let items = request.comparison_items(&config.currency_code)?;
    let stores = request.target_stores(&items, config);

    info!(items = items.len(), stores = stores.len(), "Comparing list");
    let report = compare_list(&items, &stores);

    for summary in &report.store_totals {
        if summary.item_count == 0 {
            warn!(store = %summary.store_name, "No list items priced at store");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let currency = config.currency_format();
        print!("{}", TextReport::new(&report, &currency));
    }

    Ok(())
}

/// Output of `pricewise parse`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParsedList {
    name: String,
    share_token: String,
    items: Vec<String>,
}

fn run_parse(path: &Path, json: bool) -> anyhow::Result<()> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parsed_list(path, &text)?;
    info!(items = parsed.items.len(), list = %parsed.name, "Parsed list");

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{} ({} items)", parsed.name, parsed.items.len());
        for (i, item) in parsed.items.iter().enumerate() {
            println!("  {}. {}", i + 1, item);
        }
        println!("Share token: {}", parsed.share_token);
    }

    Ok(())
}

/// Names the list after the file stem and splits its text into items.
fn parsed_list(path: &Path, text: &str) -> CliResult<ParsedList> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().trim().to_string())
        .unwrap_or_default();
    validate_list_name(&name)?;

    Ok(ParsedList {
        name,
        share_token: generate_share_token(),
        items: parse_list_text(text),
    })
}

fn run_stores(country: Option<&str>, city: Option<&str>, config: &CliConfig) {
    let country = country.unwrap_or(&config.country);
    let city = city.or(config.city.as_deref());

    let known = supported_countries().any(|code| code.eq_ignore_ascii_case(country));
    if !known {
        warn!(country, "No store list for country, showing default stores");
    }

    for store in stores_for_location(country, city) {
        println!("{}", store);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
