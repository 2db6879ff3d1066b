//! Paths command

use std::path::PathBuf;

use clap::Args;

use crate::output::{format_graph, format_paths, OutputFormat};
use crate::{read_graph, AppContext, Cli};
use artistweb_core::{Entity, NoRender, Pipeline, RelationSource};

#[derive(Args)]
pub struct PathsArgs {
    /// Seed artists (ids, URIs or URLs)
    #[arg(required = true)]
    pub seeds: Vec<String>,

    /// Graph file (JSON) to continue growing from
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Keep every path up to this many artists, not only the shortest
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Give up growing after this many rounds
    #[arg(long)]
    pub max_rounds: Option<usize>,
}

pub fn run(args: &PathsArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    tracing::debug!("Running paths command");

    let catalog = ctx.catalog(cli)?;
    let base = args.base.as_deref().map(read_graph).transpose()?;
    let result = Pipeline::new(&catalog, NoRender)
        .max_rounds(args.max_rounds.or(ctx.config.max_rounds))
        .max_len(args.max_len.or(ctx.config.max_len))
        .run(&args.seeds, base.as_ref())?;

    let labels = |entity: &Entity| catalog.label(entity);
    let out = match cli.format {
        OutputFormat::Dot => format_graph(
            &result.graph,
            &result.seeds,
            &labels,
            OutputFormat::Dot,
            &ctx.config.render_options(),
        )?,
        format => format_paths(&result.paths, &labels, format)?,
    };
    println!("{}", out);
    Ok(())
}
