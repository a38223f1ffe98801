//! escalens command-line interface.
//!
//! Presentation layer over `escalens-core`: loads a transcript dataset,
//! runs a query through the engine, and renders the report to the terminal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use escalens_core::{analyze, hottest_turns, Dataset};

mod render;

const EXAMPLE_QUERIES: &str = "\
Example questions:
  escalens analyze --data transcripts.json \"Why do customer conversations escalate?\"
  escalens analyze --data transcripts.json \"Why do repeated service failures escalate?\"
  escalens analyze --data transcripts.json \"Why do customers ask for supervisors?\"
  escalens analyze --data transcripts.json \"Why do customers threaten legal action?\"
  escalens analyze --data transcripts.json \"Why do long delays cause escalation?\"";

#[derive(Parser)]
#[command(
    name = "escalens",
    version,
    about = "Causal analysis of escalated customer-service conversations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask why conversations escalate and see supporting evidence
    #[command(after_long_help = EXAMPLE_QUERIES)]
    Analyze {
        /// Natural-language question, e.g. "Why do customers ask for supervisors?"
        query: String,

        /// Path to the transcript dataset JSON
        #[arg(long, value_name = "FILE")]
        data: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Maximum number of evidence bundles to show in text output
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },

    /// Rank escalated transcripts by dialogue intensity
    Hotspots {
        /// Path to the transcript dataset JSON
        #[arg(long, value_name = "FILE")]
        data: PathBuf,

        /// Maximum number of transcripts to show
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn load_turns(path: &Path) -> Result<Vec<escalens_core::Turn>> {
    let turns = Dataset::load_turns(path)
        .with_context(|| format!("loading dataset {}", path.display()))?;
    tracing::info!(turns = turns.len(), "dataset loaded");
    Ok(turns)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            query,
            data,
            format,
            limit,
        } => {
            let turns = load_turns(&data)?;
            let report = analyze(&turns, &query);

            match format {
                Format::Text => render::report(&report, limit),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }

        Commands::Hotspots { data, limit, format } => {
            let turns = load_turns(&data)?;
            let hotspots = hottest_turns(&turns, limit);

            match format {
                Format::Text => render::hotspots(&hotspots),
                Format::Json => println!("{}", serde_json::to_string_pretty(&hotspots)?),
            }
        }
    }

    Ok(())
}
