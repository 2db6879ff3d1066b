//! Artistweb Core - Relation graph growth and path extraction
//!
//! Starting from a set of seed artists, the engine grows a graph of related
//! artists until the seeds are connected, trims dangling leaves, and reduces
//! the result to the shortest (or length-bounded) paths between the seeds.

pub mod entity;
pub mod error;
pub mod graph;
pub mod grow;
pub mod limits;
pub mod paths;
pub mod pipeline;
pub mod source;
pub mod trim;

#[cfg(test)]
mod testing;

pub use entity::{resolve, resolve_all, Entity, EntityRef};
pub use error::{BoxError, Error, Result};
pub use graph::{GraphRecord, RelationGraph};
pub use grow::{expand, grow, Grower};
pub use paths::{all_simple_paths, paths_subgraph, shortest_len, PairPaths, Path, PathTable, SeedPair};
pub use pipeline::{grow_and_render, NoRender, Pipeline, PipelineOutput, Renderer};
pub use source::{FnSource, RelationSource};
pub use trim::trim;
