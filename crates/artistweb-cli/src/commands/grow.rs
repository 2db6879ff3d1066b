//! Grow command

use std::path::PathBuf;

use clap::Args;

use crate::output::format_graph;
use crate::{read_graph, AppContext, Cli};
use artistweb_core::{resolve_all, Entity, Grower, RelationSource};

#[derive(Args)]
pub struct GrowArgs {
    /// Seed artists (ids, URIs or URLs)
    #[arg(required = true)]
    pub seeds: Vec<String>,

    /// Graph file (JSON) to continue growing from
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Give up after this many rounds
    #[arg(long)]
    pub max_rounds: Option<usize>,
}

pub fn run(args: &GrowArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    tracing::debug!("Running grow command");

    let catalog = ctx.catalog(cli)?;
    let seeds = resolve_all(&args.seeds)?;
    let base = args.base.as_deref().map(read_graph).transpose()?;
    let max_rounds = args.max_rounds.or(ctx.config.max_rounds);

    let graph = Grower::new(&catalog)
        .with_max_rounds(max_rounds)
        .grow(&seeds, base.as_ref())?;
    tracing::info!(
        "Grew graph to {} nodes after {} catalog queries",
        graph.node_count(),
        catalog.query_count()
    );

    let labels = |entity: &Entity| catalog.label(entity);
    let out = format_graph(&graph, &seeds, &labels, cli.format, &ctx.config.render_options())?;
    println!("{}", out);
    Ok(())
}
