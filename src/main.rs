use clap::Parser;
use fluent_pattern_match::{describe, describe_strict, Animal, MatchError};
use itertools::Itertools;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Describe animals by running them through a pattern match.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One JSON animal (`{"kind":"dog","name":"Berty"}`) or an array of them.
    subjects: String,
    /// Fail on animals no specific case matches instead of using the fallback.
    #[arg(long)]
    strict: bool,
    /// Print the descriptions as a JSON array.
    #[arg(long)]
    json: bool,
}

// Everything that makes the binary exit with status 1
#[derive(Debug, Error)]
enum CliError {
    // Input is not JSON at all
    #[error("Invalid JSON: {0}")]
    Json(#[source] serde_json::Error),

    // Input is JSON but not an animal
    #[error("Invalid subject: {0}")]
    Subject(#[source] serde_json::Error),

    // Strict mode and no case matched this animal
    #[error("{name}: {source}")]
    Unmatched { name: String, source: MatchError },

    #[error("Cannot encode output: {0}")]
    Encode(#[source] serde_json::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments.
    let args = Args::parse();

    match run(&args) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let animals = parse_subjects(&args.subjects)?;
    debug!(count = animals.len(), strict = args.strict, "describing animals");
    let descriptions = describe_all(&animals, args.strict)?;
    render(&descriptions, args.json)
}

/// Accepts a single object or an array of objects.
fn parse_subjects(input: &str) -> Result<Vec<Animal>, CliError> {
    match serde_json::from_str::<Value>(input).map_err(CliError::Json)? {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<serde_json::Result<_>>()
            .map_err(CliError::Subject),
        single => Ok(vec![serde_json::from_value(single).map_err(CliError::Subject)?]),
    }
}

fn describe_all(animals: &[Animal], strict: bool) -> Result<Vec<String>, CliError> {
    animals
        .iter()
        .map(|a| {
            if !strict {
                return Ok(describe(a));
            }
            describe_strict(a).map_err(|source| CliError::Unmatched {
                name: a.name().to_string(),
                source,
            })
        })
        .collect()
}

fn render(descriptions: &[String], json: bool) -> Result<String, CliError> {
    if json {
        serde_json::to_string_pretty(descriptions).map_err(CliError::Encode)
    } else {
        Ok(descriptions.iter().join("\n"))
    }
}
