//! End-to-end growth, trimming, extraction and rendering

use crate::entity::{resolve_all, Entity, EntityRef};
use crate::error::Result;
use crate::graph::RelationGraph;
use crate::grow::Grower;
use crate::paths::{paths_subgraph, PathTable};
use crate::source::RelationSource;
use crate::trim::trim;
use std::collections::BTreeSet;

/// Final stage of the pipeline: turns the reduced graph into an artifact
pub trait Renderer {
    type Output;

    /// Render `graph`, emphasising `seeds`
    ///
    /// Implementations fail with [`crate::Error::SeedNotInGraph`] when a seed
    /// is not a node of `graph`.
    fn render(
        &self,
        graph: &RelationGraph,
        seeds: &BTreeSet<Entity>,
        labels: &dyn Fn(&Entity) -> Option<String>,
    ) -> Result<Self::Output>;
}

/// Renderer that produces nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRender;

impl Renderer for NoRender {
    type Output = ();

    fn render(
        &self,
        _graph: &RelationGraph,
        _seeds: &BTreeSet<Entity>,
        _labels: &dyn Fn(&Entity) -> Option<String>,
    ) -> Result<()> {
        Ok(())
    }
}

/// Result of a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput<T> {
    pub seeds: BTreeSet<Entity>,
    pub graph: RelationGraph,
    pub paths: PathTable,
    pub artifact: T,
}

/// Grow → trim → extract paths → render
pub struct Pipeline<'a, S: ?Sized, R> {
    source: &'a S,
    renderer: R,
    max_rounds: Option<usize>,
    max_len: Option<usize>,
}

impl<'a, S: RelationSource + ?Sized, R: Renderer> Pipeline<'a, S, R> {
    pub fn new(source: &'a S, renderer: R) -> Self {
        Self {
            source,
            renderer,
            max_rounds: None,
            max_len: None,
        }
    }

    /// Bound the number of growth rounds
    pub fn max_rounds(mut self, rounds: Option<usize>) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Keep every path up to `len` entities instead of only the shortest
    pub fn max_len(mut self, len: Option<usize>) -> Self {
        self.max_len = len;
        self
    }

    /// Run the whole pipeline; any error aborts it without a partial result
    pub fn run<I>(&self, seeds: I, base: Option<&RelationGraph>) -> Result<PipelineOutput<R::Output>>
    where
        I: IntoIterator,
        I::Item: Into<EntityRef>,
    {
        let seeds = resolve_all(seeds)?;
        tracing::info!("Running pipeline for {} seeds", seeds.len());

        let grown = Grower::new(self.source)
            .with_max_rounds(self.max_rounds)
            .grow(&seeds, base)?;
        let trimmed = trim(&grown, &seeds);
        let (graph, paths) = paths_subgraph(&trimmed, &seeds, self.max_len)?;

        tracing::info!(
            "Reduced graph to {} nodes and {} edges ({} paths)",
            graph.node_count(),
            graph.edge_count(),
            paths.path_count()
        );

        let labels = |entity: &Entity| self.source.label(entity);
        let artifact = self.renderer.render(&graph, &seeds, &labels)?;

        Ok(PipelineOutput {
            seeds,
            graph,
            paths,
            artifact,
        })
    }
}

/// Grow, trim, extract shortest paths and render in one call
pub fn grow_and_render<S, R, I>(
    source: &S,
    renderer: R,
    seeds: I,
    base: Option<&RelationGraph>,
) -> Result<PipelineOutput<R::Output>>
where
    S: RelationSource + ?Sized,
    R: Renderer,
    I: IntoIterator,
    I::Item: Into<EntityRef>,
{
    Pipeline::new(source, renderer).run(seeds, base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::{e, graph, set, StubSource};

    struct EdgeCount;

    impl Renderer for EdgeCount {
        type Output = usize;

        fn render(
            &self,
            graph: &RelationGraph,
            seeds: &BTreeSet<Entity>,
            _labels: &dyn Fn(&Entity) -> Option<String>,
        ) -> Result<usize> {
            if let Some(missing) = seeds.iter().find(|s| !graph.contains(s)) {
                return Err(Error::SeedNotInGraph(missing.to_string()));
            }
            Ok(graph.edge_count())
        }
    }

    #[test]
    fn test_pipeline_scenario() {
        let source = StubSource::new(&[("a", &["x"]), ("x", &["b"]), ("b", &[])]);
        let out = grow_and_render(&source, EdgeCount, ["a", "b"], None).unwrap();

        assert_eq!(out.graph, graph(&[("a", "x"), ("x", "b")]));
        assert_eq!(out.paths.path_count(), 1);
        assert_eq!(out.artifact, 2);
        assert_eq!(out.seeds, set(&["a", "b"]));
    }

    #[test]
    fn test_pipeline_prunes_to_shortest_paths() {
        let source = StubSource::symmetric(&[
            ("a", "p"), ("p", "b"),
            ("a", "q"), ("q", "r"), ("r", "b"),
            ("p", "dangling"),
        ]);
        let out = grow_and_render(&source, NoRender, ["a", "b"], None).unwrap();

        assert_eq!(out.graph, graph(&[("a", "p"), ("p", "b")]));
    }

    #[test]
    fn test_pipeline_max_len_keeps_longer_routes() {
        let source = StubSource::symmetric(&[("a", "p"), ("p", "b"), ("a", "q"), ("q", "r"), ("r", "b")]);
        let base = graph(&[("a", "p"), ("p", "b"), ("a", "q"), ("q", "r"), ("r", "b")]);
        let out = Pipeline::new(&source, NoRender)
            .max_len(Some(4))
            .run(["a", "b"], Some(&base))
            .unwrap();

        assert_eq!(out.graph, base);
        assert_eq!(out.paths.get(&e("a"), &e("b")).unwrap().len(), 2);
    }

    #[test]
    fn test_pipeline_aborts_on_stall() {
        let source = StubSource::default();
        let result = grow_and_render(&source, NoRender, ["a", "b"], None);
        assert!(matches!(result, Err(Error::NoProgress { .. })));
    }

    #[test]
    fn test_pipeline_rejects_invalid_seed() {
        let source = StubSource::default();
        let result = grow_and_render(&source, NoRender, ["a", "b c"], None);
        assert!(matches!(result, Err(Error::InvalidIdentifier(_))));
        assert_eq!(source.call_count(), 0);
    }
}
