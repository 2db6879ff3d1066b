//! Graphviz DOT rendering

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::options::{Artifact, RenderOptions};
use crate::proximity::proximity;
use artistweb_core::{Entity, RelationGraph, Renderer, Result};

/// Escape special characters for DOT strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Renders an undirected DOT graph, nodes filled by seed proximity
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    pub options: RenderOptions,
}

impl DotRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Build the DOT text without touching the filesystem
    pub fn to_dot(
        &self,
        graph: &RelationGraph,
        seeds: &BTreeSet<Entity>,
        labels: &dyn Fn(&Entity) -> Option<String>,
    ) -> Result<String> {
        let closeness = proximity(graph, seeds)?;
        let opts = &self.options;

        let mut out = String::with_capacity(64 * (graph.node_count() + graph.edge_count()) + 256);
        let _ = writeln!(out, "graph artists {{");
        let _ = writeln!(out, "  bgcolor=\"{}\";", opts.background);
        let _ = writeln!(
            out,
            "  node [style=\"filled\", fontcolor=\"{}\", color=\"{}\"];",
            opts.font_color, opts.edge_color
        );
        let _ = writeln!(out, "  edge [color=\"{}\"];", opts.edge_color);
        out.push('\n');

        for node in graph.nodes() {
            let label = labels(node).unwrap_or_else(|| node.id().to_string());
            let t = closeness.get(node).copied().unwrap_or(1.0);
            let fill = opts.near_color.lerp(opts.far_color, t);
            let _ = write!(out, "  \"{}\" [label=\"{}\", fillcolor=\"{}\"", node.id(), escape_label(&label), fill);
            if seeds.contains(node) {
                out.push_str(", penwidth=2");
            }
            out.push_str("];\n");
        }

        if graph.edge_count() > 0 {
            out.push('\n');
        }
        for (a, b) in graph.edges() {
            let _ = writeln!(out, "  \"{}\" -- \"{}\";", a.id(), b.id());
        }

        out.push_str("}\n");
        Ok(out)
    }
}

impl Renderer for DotRenderer {
    type Output = Artifact;

    fn render(
        &self,
        graph: &RelationGraph,
        seeds: &BTreeSet<Entity>,
        labels: &dyn Fn(&Entity) -> Option<String>,
    ) -> Result<Artifact> {
        let content = self.to_dot(graph, seeds, labels)?;
        let path = self.options.persist(seeds, "dot", &content)?;
        tracing::debug!("Rendered DOT graph with {} nodes", graph.node_count());
        Ok(Artifact { content, path })
    }
}
