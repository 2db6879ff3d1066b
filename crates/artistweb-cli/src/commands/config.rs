//! Config command for managing CLI configuration

use clap::{Args, Subcommand};

use crate::config::Config;
use crate::AppContext;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Get a config value
    Get {
        /// Config key name
        key: String,
    },
    /// Set a config value (an empty value clears optional keys)
    Set {
        /// Config key name
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
    /// Initialize default config file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, ctx: &AppContext) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommands::Get { key } => run_get(ctx, key),
        ConfigCommands::Set { key, value } => run_set(ctx, key, value),
        ConfigCommands::List => run_list(ctx),
        ConfigCommands::Path => run_path(ctx),
        ConfigCommands::Init { force } => run_init(ctx, *force),
    }
}

fn run_get(ctx: &AppContext, key: &str) -> anyhow::Result<()> {
    match ctx.config.get(key) {
        Some(value) => println!("{}", value),
        None => anyhow::bail!(
            "Unknown config key: {}. Available keys: {}",
            key,
            Config::keys().join(", ")
        ),
    }
    Ok(())
}

fn run_set(ctx: &AppContext, key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = ctx.config.clone();
    config.set(key, value)?;
    config.save(&ctx.config_path)?;
    println!("Set {} = {}", key, value);
    Ok(())
}

fn run_list(ctx: &AppContext) -> anyhow::Result<()> {
    println!("Config file: {}", ctx.config_path.display());
    println!();
    for key in Config::keys() {
        let value = ctx.config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
    Ok(())
}

fn run_path(ctx: &AppContext) -> anyhow::Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}

fn run_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = &ctx.config_path;

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save(path)?;
    println!("Created config file at {}", path.display());
    Ok(())
}
