//! Map command

use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;
use crate::{read_graph, AppContext, Cli};
use artistweb_catalog::MemoryCatalog;
use artistweb_core::{Pipeline, Renderer};
use artistweb_render::{Artifact, DotRenderer, JsonRenderer};

#[derive(Args)]
pub struct MapArgs {
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

    /// Write the rendered map under the output directory
    #[arg(short, long)]
    pub save: bool,

    /// Output directory (default from config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: &MapArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    tracing::debug!("Running map command");

    let catalog = ctx.catalog(cli)?;
    let mut options = ctx.config.render_options().with_save(args.save);
    if let Some(dir) = &args.output_dir {
        options = options.with_output_dir(dir);
    }

    // Text has no map of its own; it shares the DOT rendering
    let artifact = match cli.format {
        OutputFormat::Json => render(args, ctx, &catalog, JsonRenderer::new(options))?,
        OutputFormat::Dot | OutputFormat::Text => render(args, ctx, &catalog, DotRenderer::new(options))?,
    };

    println!("{}", artifact.content.trim_end());
    if let Some(path) = artifact.path {
        eprintln!("Saved map to {}", path.display());
    }
    Ok(())
}

fn render<R>(args: &MapArgs, ctx: &AppContext, catalog: &MemoryCatalog, renderer: R) -> anyhow::Result<Artifact>
where
    R: Renderer<Output = Artifact>,
{
    let base = args.base.as_deref().map(read_graph).transpose()?;
    let result = Pipeline::new(catalog, renderer)
        .max_rounds(args.max_rounds.or(ctx.config.max_rounds))
        .max_len(args.max_len.or(ctx.config.max_len))
        .run(&args.seeds, base.as_ref())?;

    tracing::info!(
        "Mapped {} seeds through {} artists ({} catalog queries)",
        result.seeds.len(),
        result.graph.node_count(),
        catalog.query_count()
    );
    Ok(result.artifact)
}
