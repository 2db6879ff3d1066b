//! Artistweb CLI - Grow, reduce and map relation graphs between artists

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use artistweb_catalog::MemoryCatalog;
use artistweb_core::RelationGraph;
use commands::{completions, config as config_cmd, grow, map, paths, trim};
use config::{config_file_path, Config};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "artistweb")]
#[command(author, version, about = "Connect artists through their related artists")]
pub struct Cli {
    /// Catalog file (JSON) used as the relation source
    #[arg(short, long, env = "ARTISTWEB_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Config file
    #[arg(long, env = "ARTISTWEB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Grow a graph from the seeds until they are connected
    Grow(grow::GrowArgs),
    /// Remove dangling leaves from a saved graph
    Trim(trim::TrimArgs),
    /// Grow, trim and list the paths between every pair of seeds
    Paths(paths::PathsArgs),
    /// Run the full pipeline and render the reduced graph
    Map(map::MapArgs),
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded configuration
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = config_file_path(cli.config.as_deref());
        tracing::debug!("Using config at: {:?}", config_path);
        let config = Config::load(&config_path)?;
        Ok(Self { config, config_path })
    }

    /// Open the catalog named on the command line or in the config
    pub fn catalog(&self, cli: &Cli) -> anyhow::Result<MemoryCatalog> {
        let path = cli
            .catalog
            .as_ref()
            .or(self.config.catalog.as_ref())
            .context("No catalog given. Pass --catalog or run 'artistweb config set catalog <FILE>'")?;
        tracing::debug!("Loading catalog from {:?}", path);
        MemoryCatalog::load(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))
    }
}

/// Read a graph saved with `--format json`
pub fn read_graph(path: &std::path::Path) -> anyhow::Result<RelationGraph> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse graph file: {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting artistweb CLI");

    if let Commands::Completions(args) = &cli.command {
        return completions::run(args);
    }

    let ctx = AppContext::new(&cli)?;

    match &cli.command {
        Commands::Grow(args) => grow::run(args, &cli, &ctx)?,
        Commands::Trim(args) => trim::run(args, &cli, &ctx)?,
        Commands::Paths(args) => paths::run(args, &cli, &ctx)?,
        Commands::Map(args) => map::run(args, &cli, &ctx)?,
        Commands::Config(args) => config_cmd::run(args, &ctx)?,
        Commands::Completions(_) => {}
    }

    Ok(())
}
