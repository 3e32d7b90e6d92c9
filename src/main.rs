use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use revisar::score::{ReportFormat, ScoreConfig, ScoreEngine};

#[derive(Parser)]
#[command(name = "revisar")]
#[command(version, about = "Score a research version directory on six quality dimensions", long_about = None)]
struct Cli {
    /// Path to the version directory (e.g. v1/)
    directory: PathBuf,

    /// Output the structured JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Show detailed findings per dimension
    #[arg(short, long)]
    verbose: bool,

    /// Optional YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("revisar v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => ScoreConfig::load(path)?,
        None => ScoreConfig::default(),
    };

    let engine = ScoreEngine::new(config);
    let report = match engine.score(&cli.directory) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red(), e);
            std::process::exit(1);
        }
    };

    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    // Advisory tool: exit 0 on any completed run regardless of score.
    print!("{}", report.format(format, cli.verbose));
    if cli.json {
        println!();
    }

    Ok(())
}
