//! Seed-to-seed path extraction

use crate::entity::{resolve_all, Entity, EntityRef};
use crate::error::{Error, Result};
use crate::graph::RelationGraph;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A simple path: consecutive entities are adjacent, none repeats
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Entity>);

impl Path {
    pub fn entities(&self) -> &[Entity] {
        &self.0
    }

    /// Number of entities on the path, endpoints included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl From<Path> for Vec<Entity> {
    fn from(path: Path) -> Self {
        path.0
    }
}

/// Unordered seed pair, stored smaller entity first
pub type SeedPair = (Entity, Entity);

/// Paths found for each seed pair, each list sorted by non-decreasing length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
    pairs: BTreeMap<SeedPair, Vec<Path>>,
}

impl PathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths between two seeds, in either order
    pub fn get(&self, a: &Entity, b: &Entity) -> Option<&[Path]> {
        let key = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        self.pairs.get(&key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SeedPair, &[Path])> {
        self.pairs.iter().map(|(pair, paths)| (pair, paths.as_slice()))
    }

    /// Number of seed pairs in the table
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Total number of paths over all pairs
    pub fn path_count(&self) -> usize {
        self.pairs.values().map(Vec::len).sum()
    }

    /// Union of the entities on every path
    pub fn entities(&self) -> BTreeSet<Entity> {
        self.pairs
            .values()
            .flatten()
            .flat_map(|path| path.entities().iter().cloned())
            .collect()
    }

    fn insert(&mut self, pair: SeedPair, paths: Vec<Path>) {
        self.pairs.insert(pair, paths);
    }
}

/// Serialized form of one table entry
#[derive(Debug, Clone, Serialize)]
pub struct PairPaths {
    pub source: Entity,
    pub target: Entity,
    pub paths: Vec<Path>,
}

impl Serialize for PathTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries: Vec<PairPaths> = self
            .pairs
            .iter()
            .map(|((source, target), paths)| PairPaths {
                source: source.clone(),
                target: target.clone(),
                paths: paths.clone(),
            })
            .collect();
        entries.serialize(serializer)
    }
}

/// Reduce `graph` to the paths between every pair of seeds
///
/// With `max_len` omitted, each pair keeps only its shortest paths (all of
/// them, on ties). With `max_len`, each pair keeps every simple path of at
/// most `max_len` entities. Pairs without a connecting path get an empty
/// list. The returned graph is the subgraph induced by the entities on the
/// kept paths; with fewer than two seeds it is empty.
pub fn paths_subgraph<I>(
    graph: &RelationGraph,
    seeds: I,
    max_len: Option<usize>,
) -> Result<(RelationGraph, PathTable)>
where
    I: IntoIterator,
    I::Item: Into<EntityRef>,
{
    let seeds: Vec<Entity> = resolve_all(seeds)?.into_iter().collect();
    if let Some(missing) = seeds.iter().find(|seed| !graph.contains(seed)) {
        return Err(Error::SeedNotInGraph(missing.to_string()));
    }

    let mut table = PathTable::new();

    for (i, source) in seeds.iter().enumerate() {
        for target in &seeds[i + 1..] {
            let cutoff = match max_len {
                Some(limit) => Some(limit),
                None => shortest_len(graph, source, target),
            };
            let paths = match cutoff {
                Some(limit) => all_simple_paths(graph, source, target, limit),
                None => Vec::new(),
            };

            tracing::debug!(
                "Pair ({}, {}): {} paths within {:?} entities",
                source,
                target,
                paths.len(),
                cutoff
            );
            table.insert((source.clone(), target.clone()), paths);
        }
    }

    let reduced = graph.induced_subgraph(&table.entities());

    tracing::debug!(
        "Path subgraph keeps {} of {} nodes across {} pairs",
        reduced.node_count(),
        graph.node_count(),
        table.len()
    );

    Ok((reduced, table))
}

/// Entity count of the shortest path between two nodes
pub fn shortest_len(graph: &RelationGraph, source: &Entity, target: &Entity) -> Option<usize> {
    graph.distances_from(source).get(target).map(|hops| hops + 1)
}

/// Every simple path from `source` to `target` with at most `max_len` entities
///
/// Sorted by length, then lexicographically, which is the order a
/// shortest-simple-paths enumeration would produce them in.
pub fn all_simple_paths(
    graph: &RelationGraph,
    source: &Entity,
    target: &Entity,
    max_len: usize,
) -> Vec<Path> {
    let mut found = Vec::new();
    if source == target || !graph.contains(source) || max_len < 2 {
        return found;
    }

    // Hop distance to the target bounds how far a partial path can still go.
    let to_target = graph.distances_from(target);

    // One frame of pending neighbours per entity on the current path.
    let mut path = vec![source.clone()];
    let mut on_path: BTreeSet<Entity> = BTreeSet::from([source.clone()]);
    let mut frames = vec![pending_neighbors(graph, source)];

    while let Some(frame) = frames.last_mut() {
        let Some(next) = frame.next() else {
            frames.pop();
            if let Some(done) = path.pop() {
                on_path.remove(&done);
            }
            continue;
        };

        if on_path.contains(next) {
            continue;
        }
        let Some(remaining) = to_target.get(next) else {
            continue;
        };
        if path.len() + 1 + remaining > max_len {
            continue;
        }

        if next == target {
            let mut complete = path.clone();
            complete.push(next.clone());
            found.push(Path(complete));
        } else {
            path.push(next.clone());
            on_path.insert(next.clone());
            frames.push(pending_neighbors(graph, next));
        }
    }

    found.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    found
}

fn pending_neighbors<'g>(graph: &'g RelationGraph, entity: &Entity) -> std::vec::IntoIter<&'g Entity> {
    graph.neighbors(entity).collect::<Vec<_>>().into_iter()
}
