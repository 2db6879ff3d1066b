//! Undirected relation graph over entities

use crate::entity::Entity;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// Undirected simple graph with entities as nodes
///
/// Edge presence is a set: adding an edge twice is a no-op, and an edge from
/// an entity to itself only inserts the node. Iteration order is the
/// entities' total order, so every algorithm over the graph is deterministic.
///
/// Core operations treat graphs as values: they borrow their input and
/// return a fresh graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GraphRecord", into = "GraphRecord")]
pub struct RelationGraph {
    adjacency: BTreeMap<Entity, BTreeSet<Entity>>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Entity, Entity)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    pub fn add_node(&mut self, entity: Entity) -> bool {
        if self.adjacency.contains_key(&entity) {
            return false;
        }
        self.adjacency.insert(entity, BTreeSet::new());
        true
    }

    pub fn add_nodes<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = Entity>,
    {
        for entity in entities {
            self.add_node(entity);
        }
    }

    /// Add an undirected edge, inserting missing endpoints
    pub fn add_edge(&mut self, a: Entity, b: Entity) {
        if a == b {
            self.add_node(a);
            return;
        }
        self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Remove nodes together with their incident edges
    pub fn remove_nodes<'a, I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        for entity in entities {
            if let Some(neighbors) = self.adjacency.remove(entity) {
                for neighbor in neighbors {
                    if let Some(back) = self.adjacency.get_mut(&neighbor) {
                        back.remove(entity);
                    }
                }
            }
        }
    }

    pub fn contains(&self, entity: &Entity) -> bool {
        self.adjacency.contains_key(entity)
    }

    pub fn has_edge(&self, a: &Entity, b: &Entity) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(b))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of neighbors, or `None` for an absent node
    pub fn degree(&self, entity: &Entity) -> Option<usize> {
        self.adjacency.get(entity).map(BTreeSet::len)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Entity> {
        self.adjacency.keys()
    }

    pub fn node_set(&self) -> BTreeSet<Entity> {
        self.adjacency.keys().cloned().collect()
    }

    pub fn neighbors<'a>(&'a self, entity: &Entity) -> impl Iterator<Item = &'a Entity> {
        self.adjacency.get(entity).into_iter().flatten()
    }

    /// Every edge once, as `(smaller, larger)`
    pub fn edges(&self) -> impl Iterator<Item = (&Entity, &Entity)> {
        self.adjacency
            .iter()
            .flat_map(|(a, neighbors)| neighbors.iter().filter(move |b| a < *b).map(move |b| (a, b)))
    }

    /// Copy of the graph restricted to `keep` (and the edges among it)
    pub fn induced_subgraph(&self, keep: &BTreeSet<Entity>) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .filter(|(entity, _)| keep.contains(*entity))
            .map(|(entity, neighbors)| {
                let neighbors = neighbors.intersection(keep).cloned().collect();
                (entity.clone(), neighbors)
            })
            .collect();
        Self { adjacency }
    }

    /// Hop distances from `source` to every reachable node (BFS)
    pub fn distances_from(&self, source: &Entity) -> HashMap<Entity, usize> {
        let mut dist = HashMap::new();
        if !self.contains(source) {
            return dist;
        }

        let mut queue = VecDeque::new();
        dist.insert(source.clone(), 0);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            let depth = dist[current];
            for next in self.neighbors(current) {
                if !dist.contains_key(next) {
                    dist.insert(next.clone(), depth + 1);
                    queue.push_back(next);
                }
            }
        }

        dist
    }

    pub fn has_path(&self, source: &Entity, target: &Entity) -> bool {
        self.contains(target) && self.distances_from(source).contains_key(target)
    }

    /// Component label for every node; nodes share a label iff connected
    pub fn components(&self) -> HashMap<&Entity, usize> {
        let mut label = HashMap::new();
        let mut next_label = 0;

        for start in self.adjacency.keys() {
            if label.contains_key(start) {
                continue;
            }
            let mut queue = VecDeque::from([start]);
            label.insert(start, next_label);
            while let Some(current) = queue.pop_front() {
                for next in self.neighbors(current) {
                    if !label.contains_key(next) {
                        label.insert(next, next_label);
                        queue.push_back(next);
                    }
                }
            }
            next_label += 1;
        }

        label
    }

    /// Whether every pair of `entities` lies in one connected component
    ///
    /// Vacuously true for fewer than two entities. An entity absent from the
    /// graph is connected to nothing.
    pub fn all_connected<'a, I>(&self, entities: I) -> bool
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        let entities: Vec<&Entity> = entities.into_iter().collect();
        if entities.len() < 2 {
            return true;
        }

        let components = self.components();
        let mut labels = entities.iter().map(|e| components.get(*e));
        match labels.next() {
            Some(Some(first)) => labels.all(|l| l == Some(first)),
            _ => false,
        }
    }
}

/// Serialized form of a graph: sorted node list plus `(a, b)` edge pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphRecord {
    pub nodes: Vec<Entity>,
    pub edges: Vec<(Entity, Entity)>,
}

impl From<GraphRecord> for RelationGraph {
    fn from(record: GraphRecord) -> Self {
        let mut graph = RelationGraph::new();
        graph.add_nodes(record.nodes);
        for (a, b) in record.edges {
            graph.add_edge(a, b);
        }
        graph
    }
}

impl From<RelationGraph> for GraphRecord {
    fn from(graph: RelationGraph) -> Self {
        Self {
            edges: graph.edges().map(|(a, b)| (a.clone(), b.clone())).collect(),
            nodes: graph.adjacency.into_keys().collect(),
        }
    }
}
