//! Graph expansion and frontier growth

use crate::entity::{resolve_all, Entity, EntityRef};
use crate::error::{Error, Result};
use crate::graph::RelationGraph;
use crate::source::RelationSource;
use std::collections::BTreeSet;

/// Add each entity's related entities to a copy of `base`
///
/// The returned graph contains `base`, every member of `entities` as a node,
/// and an edge from each member to each of its related entities. The source
/// is queried once per distinct entity. `base` is left untouched.
pub fn expand<S, I>(source: &S, entities: I, base: Option<&RelationGraph>) -> Result<RelationGraph>
where
    S: RelationSource + ?Sized,
    I: IntoIterator,
    I::Item: Into<EntityRef>,
{
    let entities = resolve_all(entities)?;
    let mut graph = base.cloned().unwrap_or_default();

    graph.add_nodes(entities.iter().cloned());

    for entity in &entities {
        for related in query(source, entity)? {
            graph.add_edge(entity.clone(), related);
        }
    }

    Ok(graph)
}

/// Expand `base` until every pair of seeds is connected
///
/// Unbounded form of [`Grower::grow`].
pub fn grow<S, I>(source: &S, seeds: I, base: Option<&RelationGraph>) -> Result<RelationGraph>
where
    S: RelationSource + ?Sized,
    I: IntoIterator,
    I::Item: Into<EntityRef>,
{
    Grower::new(source).grow(seeds, base)
}

/// Frontier grower with an optional bound on expansion rounds
pub struct Grower<'s, S: ?Sized> {
    source: &'s S,
    max_rounds: Option<usize>,
}

impl<'s, S: RelationSource + ?Sized> Grower<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            max_rounds: None,
        }
    }

    /// Fail with [`Error::RoundLimitExceeded`] instead of expanding past `rounds`
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Set or clear the round bound
    pub fn with_max_rounds(mut self, rounds: Option<usize>) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Expand the frontier until the seeds share one connected component
    ///
    /// Each round expands only the entities discovered by the previous round
    /// (the seeds, initially). A round that discovers nothing while the seeds
    /// are still disconnected fails with [`Error::NoProgress`].
    ///
    /// Once connected, the entities of the final frontier are queried again
    /// and linked to every related entity already in the graph, since
    /// expansion only adds edges out of the expanded entities.
    pub fn grow<I>(&self, seeds: I, base: Option<&RelationGraph>) -> Result<RelationGraph>
    where
        I: IntoIterator,
        I::Item: Into<EntityRef>,
    {
        let seeds = resolve_all(seeds)?;
        let mut graph = base.cloned().unwrap_or_default();
        graph.add_nodes(seeds.iter().cloned());

        let mut frontier = seeds.clone();
        let mut rounds = 0;
        let mut queries = 0;

        while !graph.all_connected(&seeds) {
            if frontier.is_empty() {
                tracing::debug!("Frontier exhausted after {} rounds", rounds);
                return Err(Error::NoProgress { rounds });
            }
            if let Some(limit) = self.max_rounds {
                if rounds >= limit {
                    return Err(Error::RoundLimitExceeded { limit });
                }
            }

            let expanded = expand(self.source, &frontier, Some(&graph))?;
            queries += frontier.len();
            rounds += 1;

            let discovered: BTreeSet<Entity> = expanded
                .nodes()
                .filter(|node| !graph.contains(node))
                .cloned()
                .collect();

            tracing::debug!(
                "Round {}: expanded {} artists, discovered {}, graph has {} nodes",
                rounds,
                frontier.len(),
                discovered.len(),
                expanded.node_count()
            );

            graph = expanded;
            frontier = discovered;
        }

        for entity in &frontier {
            for related in query(self.source, entity)? {
                if graph.contains(&related) {
                    graph.add_edge(entity.clone(), related);
                }
            }
        }
        queries += frontier.len();

        tracing::info!(
            "Grew graph to {} nodes and {} edges in {} rounds ({} queries)",
            graph.node_count(),
            graph.edge_count(),
            rounds,
            queries
        );

        Ok(graph)
    }
}

fn query<S: RelationSource + ?Sized>(source: &S, entity: &Entity) -> Result<BTreeSet<Entity>> {
    source.related(entity).map_err(Error::Source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{e, graph, set, StubSource};

    #[test]
    fn test_expand_adds_relations() {
        let source = StubSource::new(&[("a", &["b", "c"]), ("d", &[])]);
        let g = expand(&source, ["a", "d"], None).unwrap();

        assert_eq!(g.node_set(), set(&["a", "b", "c", "d"]));
        assert!(g.has_edge(&e("a"), &e("b")));
        assert!(g.has_edge(&e("a"), &e("c")));
        assert_eq!(g.degree(&e("d")), Some(0));
        assert_eq!(source.call_count(), 2);
    }

    #[test]
    fn test_expand_does_not_modify_base() {
        let source = StubSource::new(&[("b", &["c"])]);
        let base = graph(&[("a", "b")]);
        let g = expand(&source, ["b"], Some(&base)).unwrap();

        assert_eq!(base, graph(&[("a", "b")]));
        assert_eq!(g, graph(&[("a", "b"), ("b", "c")]));
    }

    #[test]
    fn test_expand_queries_each_entity_once() {
        let source = StubSource::new(&[("a", &["b"])]);
        expand(&source, ["a", "spotify:artist:a", "a"], None).unwrap();
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_expand_without_new_entities_is_identity() {
        let source = StubSource::symmetric(&[("a", "b"), ("b", "c")]);
        let base = graph(&[("a", "b"), ("b", "c")]);
        let g = expand(&source, ["a", "b", "c"], Some(&base)).unwrap();
        assert_eq!(g, base);

        let mut with_node = base.clone();
        with_node.add_node(e("z"));
        let g = expand(&source, ["z"], Some(&base)).unwrap();
        assert_eq!(g, with_node);
    }

    #[test]
    fn test_expand_rejects_invalid_identifier() {
        let source = StubSource::default();
        let result = expand(&source, ["a", "not valid"], None);
        assert!(matches!(result, Err(Error::InvalidIdentifier(_))));
        assert_eq!(source.call_count(), 0);
    }

    #[test]
    fn test_grow_connects_seeds() {
        // a - p - q - r - b, discovered from both ends
        let source = StubSource::symmetric(&[("a", "p"), ("p", "q"), ("q", "r"), ("r", "b"), ("a", "s")]);
        let g = grow(&source, ["a", "b"], None).unwrap();

        assert!(g.has_path(&e("a"), &e("b")));
        assert!(g.contains(&e("s")));
    }

    #[test]
    fn test_grow_scenario_asymmetric_source() {
        let source = StubSource::new(&[("a", &["x"]), ("x", &["b"]), ("b", &[])]);
        let g = grow(&source, ["a", "b"], None).unwrap();

        assert_eq!(g, graph(&[("a", "x"), ("x", "b")]));
    }

    #[test]
    fn test_grow_stalls() {
        let source = StubSource::default();
        let result = grow(&source, ["a", "b"], None);

        assert!(matches!(result, Err(Error::NoProgress { rounds: 1 })));
    }

    #[test]
    fn test_grow_stalls_on_separate_islands() {
        let source = StubSource::symmetric(&[("a", "x"), ("b", "y")]);
        let result = grow(&source, ["a", "b"], None);

        assert!(matches!(result, Err(Error::NoProgress { rounds: 2 })));
    }

    #[test]
    fn test_grow_single_seed() {
        let source = StubSource::new(&[("a", &["x", "y"])]);
        let g = grow(&source, ["a"], None).unwrap();

        assert_eq!(g.node_set(), set(&["a"]));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_grow_already_connected_base() {
        let source = StubSource::new(&[("a", &["b"])]);
        let base = graph(&[("a", "b")]);
        let g = grow(&source, ["a", "b"], Some(&base)).unwrap();

        assert_eq!(g, base);
        // finishing pass over the seeds only
        assert_eq!(source.call_count(), 2);
    }

    #[test]
    fn test_grow_finishing_pass_adds_shortcuts() {
        // Round 1 discovers p and q. Round 2 links p - q (connecting the
        // seeds) and discovers m and n.
        let source = StubSource::new(&[
            ("a", &["p"]),
            ("b", &["q"]),
            ("p", &["q", "m"]),
            ("q", &["n"]),
            ("m", &[]),
            ("n", &["m"]),
        ]);
        let g = grow(&source, ["a", "b"], None).unwrap();

        // Final frontier is {m, n}; n's relation to m is already present, so
        // the finishing pass adds the shortcut n - m.
        assert!(g.has_edge(&e("p"), &e("q")));
        assert!(g.has_edge(&e("n"), &e("m")));
        assert_eq!(g.node_set(), set(&["a", "b", "m", "n", "p", "q"]));
    }

    #[test]
    fn test_grow_round_limit() {
        let source = StubSource::symmetric(&[("a", "p"), ("p", "q"), ("q", "r"), ("r", "s"), ("s", "b")]);
        let result = Grower::new(&source).max_rounds(1).grow(["a", "b"], None);
        assert!(matches!(result, Err(Error::RoundLimitExceeded { limit: 1 })));

        let g = Grower::new(&source).max_rounds(3).grow(["a", "b"], None).unwrap();
        assert!(g.has_path(&e("a"), &e("b")));
    }

    #[test]
    fn test_grow_propagates_source_failure() {
        let source = StubSource::new(&[("a", &["p"]), ("b", &[])]).failing_on("p");
        let err = grow(&source, ["a", "b"], None).unwrap_err();

        assert!(matches!(err, Error::Source(_)));
        assert_eq!(err.to_string(), "lookup failed for p");
    }
}
