//! Trim command

use std::path::PathBuf;

use clap::Args;

use crate::output::format_graph;
use crate::{read_graph, AppContext, Cli};
use artistweb_core::{resolve_all, trim, Entity};

#[derive(Args)]
pub struct TrimArgs {
    /// Graph file (JSON) to trim
    pub graph: PathBuf,

    /// Artist to keep even when it is a leaf (repeatable)
    #[arg(short, long = "keep")]
    pub keep: Vec<String>,
}

pub fn run(args: &TrimArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    tracing::debug!("Running trim command");

    let graph = read_graph(&args.graph)?;
    let keepers = resolve_all(&args.keep)?;
    let trimmed = trim(&graph, &keepers);
    tracing::info!(
        "Trimmed {} of {} nodes",
        graph.node_count() - trimmed.node_count(),
        graph.node_count()
    );

    let out = format_graph(&trimmed, &keepers, &no_labels, cli.format, &ctx.config.render_options())?;
    println!("{}", out);
    Ok(())
}

fn no_labels(_: &Entity) -> Option<String> {
    None
}
