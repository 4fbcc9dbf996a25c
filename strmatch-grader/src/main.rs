//! strmatch grader CLI

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use strmatch::{inspect_match, Location, MatchConfig};
use strmatch_grader::{AnswerExtractor, Config, ExactStrMatch, Metric, RelaxStrMatch, Target};

#[derive(Parser)]
#[command(name = "strmatch-grader")]
#[command(about = "Grade model responses against reference answers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize and compare a single value/target pair
    Match {
        /// Raw value, usually a model response
        #[arg(long)]
        value: String,

        /// Reference answer
        #[arg(long)]
        target: String,

        /// Match location: begin, end, any or exact
        #[arg(short, long)]
        location: Option<String>,

        /// Compare case-sensitively
        #[arg(long)]
        case_sensitive: bool,

        /// Keep leading/trailing punctuation in text mode
        #[arg(long)]
        keep_punctuation: bool,

        /// Extract and compare numbers
        #[arg(short, long)]
        numeric: bool,

        /// Significant digits for numeric comparison
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Extract the final answer and compare it numerically
    Exact {
        /// Model response
        #[arg(short, long)]
        response: String,

        /// Acceptable answer (repeat for several)
        #[arg(
            short,
            long,
            required_unless_present = "target_json",
            conflicts_with = "target_json"
        )]
        target: Vec<String>,

        /// Target as JSON: a scalar or an array of acceptable answers
        #[arg(long)]
        target_json: Option<String>,
    },

    /// Compare ignoring symbols, spaces and case
    Relax {
        /// Model response
        #[arg(short, long)]
        response: String,

        /// Acceptable answer (repeat for several)
        #[arg(
            short,
            long,
            required_unless_present = "target_json",
            conflicts_with = "target_json"
        )]
        target: Vec<String>,

        /// Target as JSON: a scalar or an array of acceptable answers
        #[arg(long)]
        target_json: Option<String>,
    },

    /// Print the final answer found in a response
    Extract {
        /// Model response
        #[arg(short, long)]
        response: String,
    },

    /// Generate sample configuration
    InitConfig {
        /// Output path for configuration file
        #[arg(short, long, default_value = "strmatch.toml")]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct ExtractOutput {
    pattern: String,
    answer: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results
    let filter = if cli.verbose {
        EnvFilter::new("strmatch_grader=debug,strmatch=trace,info")
    } else {
        EnvFilter::new("strmatch_grader=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default(),
    };

    match cli.command {
        Commands::Match {
            value,
            target,
            location,
            case_sensitive,
            keep_punctuation,
            numeric,
            precision,
        } => {
            let match_config = apply_overrides(
                config.matching,
                location.as_deref(),
                case_sensitive,
                keep_punctuation,
                numeric,
                precision,
            );
            tracing::debug!(?match_config, "Matching single pair");
            print_json(&inspect_match(&value, &target, &match_config))?;
        }

        Commands::Exact {
            response,
            target,
            target_json,
        } => {
            let metric = ExactStrMatch::from_config(&config.exact)?;
            let target = resolve_target(target, target_json.as_deref())?;
            print_json(&metric.grade(&response, &target))?;
        }

        Commands::Relax {
            response,
            target,
            target_json,
        } => {
            let target = resolve_target(target, target_json.as_deref())?;
            print_json(&RelaxStrMatch.grade(&response, &target))?;
        }

        Commands::Extract { response } => {
            let extractor = AnswerExtractor::new(&config.exact.answer_pattern)?;
            print_json(&ExtractOutput {
                pattern: extractor.pattern().to_string(),
                answer: extractor.extract(&response),
            })?;
        }

        Commands::InitConfig { output } => {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Config::default().save_toml(&output)?;
            tracing::info!("Wrote sample configuration to {}", output.display());
        }
    }

    Ok(())
}

/// Command-line flags win over the `[matching]` table
fn apply_overrides(
    mut config: MatchConfig,
    location: Option<&str>,
    case_sensitive: bool,
    keep_punctuation: bool,
    numeric: bool,
    precision: Option<usize>,
) -> MatchConfig {
    if let Some(location) = location {
        config.location = Location::from(location);
    }
    if case_sensitive {
        config.ignore_case = false;
    }
    if keep_punctuation {
        config.ignore_punctuation = false;
    }
    if numeric {
        config.numeric = true;
    }
    if let Some(precision) = precision {
        config.precision = precision;
    }
    config
}

/// A `--target-json` value wins over repeated `--target` flags
fn resolve_target(
    target: Vec<String>,
    target_json: Option<&str>,
) -> Result<Target, serde_json::Error> {
    match target_json {
        Some(raw) => Ok(Target::from_json(&serde_json::from_str(raw)?)),
        None => Ok(Target::from(target)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
