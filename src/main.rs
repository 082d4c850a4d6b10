//! strategy-deck command-line entry point.
//!
//! Logs go to stderr; the paths of written files are printed to stdout.

use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use strategy_deck::config::DeckConfig;
use strategy_deck::deck::DeckBuilder;
use strategy_deck::export::{ExportMetadata, export_json};
use strategy_deck::model::{AnalysisResult, FrameworkName};
use strategy_deck::wizard::{OfflineGenerator, StrategyInputs, Wizard, WizardEvent};
use strategy_deck::{Error, Result};

#[derive(Parser)]
#[command(name = "strategy-deck")]
#[command(about = "Turn a strategy analysis into a 16:9 PowerPoint deck or JSON export", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a .pptx deck from an analysis JSON file
    Deck {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Generation date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Deck configuration TOML (falls back to STRATEGY_DECK_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Re-export an analysis JSON file in the export format
    ///
    /// `analysis_id`, `geo` and `notes` from the input are kept; a missing id
    /// gets a fresh one.
    Json {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Run the wizard with the offline generator and write both exports
    Demo {
        #[arg(long)]
        company: String,

        #[arg(long)]
        product: String,

        /// Target geography
        #[arg(long)]
        geo: Option<String>,

        /// Free-form notes passed to the generator
        #[arg(long)]
        notes: Option<String>,

        /// Frameworks to generate (SWOT, Ansoff, Benchmark); repeatable
        #[arg(short, long = "framework")]
        frameworks: Vec<FrameworkName>,

        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn read_analysis(path: &Path) -> Result<AnalysisResult> {
    let text = std::fs::read_to_string(path)?;
    AnalysisResult::from_json(&text)
}

fn read_export(path: &Path) -> Result<(AnalysisResult, ExportMetadata)> {
    let text = std::fs::read_to_string(path)?;
    Ok((AnalysisResult::from_json(&text)?, ExportMetadata::from_json(&text)?))
}

fn write_output(out_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(filename);
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(path)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Deck {
            input,
            out_dir,
            date,
            config,
        } => {
            let config = DeckConfig::resolve(config.as_deref())?;
            let result = read_analysis(&input)?;
            let builder = DeckBuilder::new(config).generated_on(date.unwrap_or_else(|| Local::now().date_naive()));
            let deck = builder.build(&result)?;
            let path = write_output(&out_dir, &deck.filename, &deck.bytes)?;
            println!("{}", path.display());
        },
        Commands::Json { input, out_dir } => {
            let (result, metadata) = read_export(&input)?;
            let export = export_json(&result, &metadata, Utc::now())?;
            let path = write_output(&out_dir, &export.filename, &export.bytes)?;
            println!("{}", path.display());
        },
        Commands::Demo {
            company,
            product,
            geo,
            notes,
            frameworks,
            out_dir,
            config,
        } => {
            let config = DeckConfig::resolve(config.as_deref())?;
            let mut wizard = Wizard::new(OfflineGenerator);
            let mut inputs = StrategyInputs::new(company, product);
            if let Some(geo) = geo {
                inputs = inputs.with_geo(geo);
            }
            if let Some(notes) = notes {
                inputs = inputs.with_notes(notes);
            }
            wizard.handle(WizardEvent::SubmitInputs(inputs))?;
            if !frameworks.is_empty() {
                wizard.handle(WizardEvent::SelectFrameworks(frameworks))?;
            }
            wizard.handle(WizardEvent::Generate)?;
            wizard.handle(WizardEvent::ProceedToRecommendations)?;
            wizard.handle(WizardEvent::ProceedToExport)?;

            let deck = wizard.export_deck(&DeckBuilder::new(config))?;
            let json = wizard.export_json(Utc::now())?;
            for (name, bytes) in [(&deck.filename, &deck.bytes), (&json.filename, &json.bytes)] {
                let path = write_output(&out_dir, name, bytes)?;
                println!("{}", path.display());
            }
        },
    }
    Ok(())
}

fn main() {
    // Initialize logging to stderr; stdout carries the written paths
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        if let Error::Config(_) = e {
            std::process::exit(2);
        }
        std::process::exit(1);
    }
}
