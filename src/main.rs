use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rubiks_color_resolver::models::ResolverConfig;
use rubiks_color_resolver::services::{project, ColorResolver, CubeReport};
use rubiks_color_resolver::ScanData;

#[derive(Parser)]
#[command(name = "rubiks-color-resolver")]
#[command(about = "Resolve a scanned Rubik's cube into side labels")]
struct Cli {
    /// Scan as JSON: {"1": [r, g, b], ...}
    #[arg(long, conflicts_with = "file")]
    rgb: Option<String>,

    /// Read the scan JSON from a file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Kociemba)]
    format: Format,

    /// Resolver config (YAML); falls back to $RUBIKS_RESOLVER_CONFIG
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Side-label string, U R F D L B order
    Kociemba,
    /// Full report with scanned and final colors
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the result; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rubiks_color_resolver=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli.config.clone().or_else(|| {
        std::env::var("RUBIKS_RESOLVER_CONFIG")
            .ok()
            .map(PathBuf::from)
    });
    let config = match config_path {
        Some(path) => ResolverConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    let resolver = ColorResolver::from_config(&config).context("Invalid resolver config")?;

    let input = read_scan(&cli)?;
    let scan = ScanData::from_json(&input).context("Failed to parse scan")?;
    let resolved = resolver
        .resolve_scan(&scan)
        .context("Failed to resolve cube colors")?;

    match cli.format {
        Format::Kociemba => println!("{}", project(&resolved)),
        Format::Json => {
            let report = CubeReport::from(&resolved);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn read_scan(cli: &Cli) -> anyhow::Result<String> {
    if let Some(rgb) = &cli.rgb {
        return Ok(rgb.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scan file {}", path.display()));
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read scan from stdin")?;
    Ok(input)
}
