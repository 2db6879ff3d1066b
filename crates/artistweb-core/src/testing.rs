//! Shared fixtures for unit tests

use crate::entity::Entity;
use crate::error::BoxError;
use crate::graph::RelationGraph;
use crate::source::RelationSource;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

pub(crate) fn e(id: &str) -> Entity {
    Entity::parse(id).unwrap()
}

pub(crate) fn set(ids: &[&str]) -> BTreeSet<Entity> {
    ids.iter().map(|id| e(id)).collect()
}

pub(crate) fn graph(edges: &[(&str, &str)]) -> RelationGraph {
    RelationGraph::from_edges(edges.iter().map(|(a, b)| (e(a), e(b))))
}

/// Table-driven relation source that records every query
#[derive(Default)]
pub(crate) struct StubSource {
    table: BTreeMap<Entity, BTreeSet<Entity>>,
    failing: BTreeSet<Entity>,
    pub(crate) calls: RefCell<Vec<Entity>>,
}

impl StubSource {
    pub(crate) fn new(table: &[(&str, &[&str])]) -> Self {
        Self {
            table: table.iter().map(|(id, related)| (e(id), set(related))).collect(),
            ..Self::default()
        }
    }

    /// Relations mirrored in both directions
    pub(crate) fn symmetric(edges: &[(&str, &str)]) -> Self {
        let mut table: BTreeMap<Entity, BTreeSet<Entity>> = BTreeMap::new();
        for (a, b) in edges {
            table.entry(e(a)).or_default().insert(e(b));
            table.entry(e(b)).or_default().insert(e(a));
        }
        Self {
            table,
            ..Self::default()
        }
    }

    pub(crate) fn failing_on(mut self, id: &str) -> Self {
        self.failing.insert(e(id));
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl RelationSource for StubSource {
    fn related(&self, entity: &Entity) -> Result<BTreeSet<Entity>, BoxError> {
        self.calls.borrow_mut().push(entity.clone());
        if self.failing.contains(entity) {
            return Err(format!("lookup failed for {}", entity).into());
        }
        Ok(self.table.get(entity).cloned().unwrap_or_default())
    }
}
