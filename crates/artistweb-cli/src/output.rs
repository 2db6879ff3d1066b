//! Output formatting utilities

use std::collections::BTreeSet;
use std::fmt::Write;

use artistweb_core::{Entity, PathTable, RelationGraph};
use artistweb_render::{DotRenderer, RenderOptions};
use clap::ValueEnum;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Dot,
}

/// Format a graph; `highlight` marks the seeds (or keepers) in DOT output
pub fn format_graph(
    graph: &RelationGraph,
    highlight: &BTreeSet<Entity>,
    labels: &dyn Fn(&Entity) -> Option<String>,
    format: OutputFormat,
    options: &RenderOptions,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
        OutputFormat::Dot => {
            let present: BTreeSet<Entity> = highlight
                .iter()
                .filter(|entity| graph.contains(entity))
                .cloned()
                .collect();
            Ok(DotRenderer::new(options.clone()).to_dot(graph, &present, labels)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{}, {}",
                count(graph.node_count(), "node"),
                count(graph.edge_count(), "edge")
            );
            for (a, b) in graph.edges() {
                let _ = writeln!(out, "  {} -- {}", display(a, labels), display(b, labels));
            }
            for node in graph.nodes().filter(|n| graph.degree(n) == Some(0)) {
                let _ = writeln!(out, "  {}", display(node, labels));
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Format a path table as text or JSON
pub fn format_paths(
    table: &PathTable,
    labels: &dyn Fn(&Entity) -> Option<String>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(table)?);
    }

    if table.is_empty() {
        return Ok("No seed pairs".to_string());
    }

    let mut out = String::new();
    for ((a, b), paths) in table.iter() {
        let _ = writeln!(
            out,
            "{} <-> {} ({})",
            display(a, labels),
            display(b, labels),
            count(paths.len(), "path")
        );
        for path in paths {
            let hops: Vec<String> = path.entities().iter().map(|e| display(e, labels)).collect();
            let _ = writeln!(out, "  {}", hops.join(" -> "));
        }
    }
    Ok(out.trim_end().to_string())
}

/// `1 path`, `2 paths`
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

fn display(entity: &Entity, labels: &dyn Fn(&Entity) -> Option<String>) -> String {
    match labels(entity) {
        Some(label) => format!("{} ({})", label, entity.id()),
        None => entity.id().to_string(),
    }
}
