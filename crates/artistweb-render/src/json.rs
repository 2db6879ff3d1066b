//! JSON rendering

use std::collections::BTreeSet;

use crate::options::{Artifact, RenderOptions};
use crate::proximity::proximity;
use artistweb_core::{Entity, RelationGraph, Renderer, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonNode {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    seed: bool,
    proximity: f64,
    color: String,
}

#[derive(Debug, Serialize)]
struct JsonGraph {
    nodes: Vec<JsonNode>,
    edges: Vec<(String, String)>,
}

/// Renders the graph as JSON nodes (with colour and proximity) and edges
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pub options: RenderOptions,
}

impl JsonRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Renderer for JsonRenderer {
    type Output = Artifact;

    fn render(
        &self,
        graph: &RelationGraph,
        seeds: &BTreeSet<Entity>,
        labels: &dyn Fn(&Entity) -> Option<String>,
    ) -> Result<Artifact> {
        let closeness = proximity(graph, seeds)?;

        let nodes = graph
            .nodes()
            .map(|node| {
                let t = closeness.get(node).copied().unwrap_or(1.0);
                JsonNode {
                    id: node.id().to_string(),
                    label: labels(node),
                    seed: seeds.contains(node),
                    proximity: t,
                    color: self.options.near_color.lerp(self.options.far_color, t).to_string(),
                }
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(a, b)| (a.id().to_string(), b.id().to_string()))
            .collect();

        let content = serde_json::to_string_pretty(&JsonGraph { nodes, edges })?;
        let path = self.options.persist(seeds, "json", &content)?;
        Ok(Artifact { content, path })
    }
}
