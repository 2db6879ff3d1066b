//! Seed proximity used for node colouring

use artistweb_core::{Entity, Error, RelationGraph, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Normalized distance of every node from the nearest seed
///
/// Seeds get 0. When the seeds are pairwise connected, every other node gets
/// its hop distance to the closest seed (1 if unreachable); otherwise every
/// non-seed node gets 1. Values are divided by the largest distance (at
/// least 1), so they fall in `[0, 1]`.
pub fn proximity(graph: &RelationGraph, seeds: &BTreeSet<Entity>) -> Result<BTreeMap<Entity, f64>> {
    if let Some(missing) = seeds.iter().find(|seed| !graph.contains(seed)) {
        return Err(Error::SeedNotInGraph(missing.to_string()));
    }

    let mut dist: BTreeMap<Entity, usize> = seeds.iter().map(|seed| (seed.clone(), 0)).collect();

    if !seeds.is_empty() && graph.all_connected(seeds) {
        let from_seeds: Vec<_> = seeds.iter().map(|seed| graph.distances_from(seed)).collect();
        for node in graph.nodes() {
            let nearest = from_seeds
                .iter()
                .map(|d| d.get(node).copied().unwrap_or(1))
                .min()
                .unwrap_or(1);
            dist.insert(node.clone(), nearest);
        }
    }

    for node in graph.nodes() {
        dist.entry(node.clone()).or_insert(1);
    }

    let max_dist = dist.values().copied().max().unwrap_or(0).max(1) as f64;

    Ok(dist
        .into_iter()
        .map(|(node, d)| (node, d as f64 / max_dist))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use artistweb_core::resolve;

    fn e(id: &str) -> Entity {
        resolve(id).unwrap()
    }

    fn chain() -> RelationGraph {
        RelationGraph::from_edges([(e("a"), e("p")), (e("p"), e("q")), (e("q"), e("r")), (e("r"), e("b"))])
    }

    #[test]
    fn test_proximity_from_connected_seeds() {
        let seeds: BTreeSet<Entity> = [e("a"), e("b")].into();
        let p = proximity(&chain(), &seeds).unwrap();

        assert_eq!(p[&e("a")], 0.0);
        assert_eq!(p[&e("b")], 0.0);
        assert_eq!(p[&e("p")], 0.5);
        assert_eq!(p[&e("q")], 1.0);
        assert_eq!(p[&e("r")], 0.5);
    }

    #[test]
    fn test_proximity_disconnected_seeds() {
        let mut graph = chain();
        graph.add_node(e("z"));
        let seeds: BTreeSet<Entity> = [e("a"), e("z")].into();
        let p = proximity(&graph, &seeds).unwrap();

        assert_eq!(p[&e("a")], 0.0);
        assert_eq!(p[&e("z")], 0.0);
        assert_eq!(p[&e("q")], 1.0);
    }

    #[test]
    fn test_proximity_without_seeds() {
        let p = proximity(&chain(), &BTreeSet::new()).unwrap();
        assert!(p.values().all(|v| *v == 1.0));
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn test_proximity_missing_seed() {
        let seeds: BTreeSet<Entity> = [e("a"), e("nowhere")].into();
        assert!(matches!(
            proximity(&chain(), &seeds),
            Err(Error::SeedNotInGraph(ref id)) if id == "nowhere"
        ));
    }
}
