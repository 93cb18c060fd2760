//! `forte`: classify pitch-class sets against Forte's catalogue.
//!
//! # Commands
//!
//! - `classify`: classify a set under TN or TnI equivalence
//! - `show`: print one record
//! - `members`: list every class of a cardinality
//! - `zmate`: resolve a Z-partner
//! - `check`: validate the bundled dataset
//!
//! Logs go to stderr so stdout stays machine-readable under `--json`.

mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use forte_config::{ForteConfig, OutputFormat};
use forte_core::Classifier;
use forte_store::ClassificationStore;
use forte_tables::BundledDataset;
use forte_types::{Cardinality, ClassKey, EquivalenceMode, PitchClassSet};

use crate::render::Renderer;

#[derive(Parser)]
#[command(name = "forte")]
#[command(version)]
#[command(about = "Classify pitch-class sets against Forte's catalogue")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a pitch-class set
    ///
    /// Pitch classes may be separated by spaces or commas:
    ///   forte classify 0 4 7
    ///   forte classify 2,6,9 --mode tn
    Classify {
        #[arg(required = true, num_args = 1..)]
        pitch_classes: Vec<String>,

        /// Equivalence relation: tn or tni. Defaults to FORTE_MODE, then the config file.
        #[arg(long)]
        mode: Option<EquivalenceMode>,
    },
    /// Show the record for a Forte name such as 3-11B or 4-Z15A
    Show { key: ClassKey },
    /// List every transposition class of a cardinality
    Members { cardinality: u8 },
    /// Resolve the Z-partner of a class
    Zmate { key: ClassKey },
    /// Validate the bundled dataset and report every finding
    Check,
}

fn init_tracing(verbose: u8, config_filter: Option<&str>) {
    let env_filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("warn")))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, config: &ForteConfig) -> Result<ExitCode> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output_format()
    };
    let classifier = Classifier::global();
    let renderer = Renderer::new(classifier, format, config.show_names());

    if config.strict()
        && !matches!(cli.command, Command::Check)
        && let Some(warning) = classifier.store().warnings().first()
    {
        return Err(warning.to_error()).context("Bundled dataset failed strict validation");
    }

    let output = match cli.command {
        Command::Classify {
            pitch_classes,
            mode,
        } => {
            let text = pitch_classes.join(" ");
            let set: PitchClassSet = text
                .parse()
                .with_context(|| format!("Invalid pitch-class set {text:?}"))?;
            let mode = mode.unwrap_or_else(|| config.mode());
            let result = classifier
                .classify(set, mode)
                .with_context(|| format!("Failed to classify {set}"))?;
            renderer.classification(&result)?
        }
        Command::Show { key } => renderer.record(key)?,
        Command::Members { cardinality } => renderer.members(Cardinality::new(cardinality)?)?,
        Command::Zmate { key } => renderer.z_mate(key)?,
        Command::Check => return check(&renderer),
    };

    print(&output)?;
    Ok(ExitCode::SUCCESS)
}

/// Rebuilds the store from the bundled tables so findings are reported even
/// when the shared store was already built.
fn check(renderer: &Renderer<'_>) -> Result<ExitCode> {
    let store = ClassificationStore::build(&BundledDataset);
    print(&renderer.check(&store)?)?;
    Ok(if store.warnings().is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = ForteConfig::load();
    let config_filter = config
        .as_ref()
        .ok()
        .and_then(Option::as_ref)
        .and_then(ForteConfig::log_filter);
    init_tracing(cli.verbose, config_filter);

    let result = config
        .context("Failed to load configuration")
        .and_then(|config| run(cli, &config.unwrap_or_default()));
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
