//! In-memory relation catalog

use crate::error::{parse_id, CatalogError, CatalogResult};
use artistweb_core::{BoxError, Entity, RelationSource};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory catalog of artist relations
///
/// Relations are directed as stored: `relate(a, b)` makes `b` related to
/// `a` only, unless the catalog is symmetric. Every `related` call is
/// counted, which makes the catalog useful for checking query behaviour.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    relations: BTreeMap<Entity, BTreeSet<Entity>>,
    labels: BTreeMap<Entity, String>,
    symmetric: bool,
    strict: bool,
    queries: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror every relation (a related to b implies b related to a)
    pub fn symmetric(mut self) -> Self {
        self.symmetric = true;
        let edges: Vec<(Entity, Entity)> = self
            .relations
            .iter()
            .flat_map(|(a, related)| related.iter().map(move |b| (b.clone(), a.clone())))
            .collect();
        for (a, b) in edges {
            self.relations.entry(a).or_default().insert(b);
        }
        self
    }

    /// Fail queries for artists the catalog has never heard of
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Register an artist, optionally with a display name
    pub fn add_artist(&mut self, id: &str, name: Option<&str>) -> CatalogResult<Entity> {
        let entity = parse_id(id)?;
        self.relations.entry(entity.clone()).or_default();
        if let Some(name) = name {
            self.labels.insert(entity.clone(), name.to_string());
        }
        Ok(entity)
    }

    /// Record `to` as related to `from`
    pub fn relate(&mut self, from: &str, to: &str) -> CatalogResult<()> {
        let from = parse_id(from)?;
        let to = parse_id(to)?;
        self.insert(from, to);
        Ok(())
    }

    pub(crate) fn insert(&mut self, from: Entity, to: Entity) {
        self.relations.entry(to.clone()).or_default();
        if self.symmetric {
            self.relations.entry(to.clone()).or_default().insert(from.clone());
        }
        self.relations.entry(from).or_default().insert(to);
    }

    pub(crate) fn set_label(&mut self, entity: Entity, name: String) {
        self.labels.insert(entity, name);
    }

    /// Builder form of [`MemoryCatalog::relate`] for fixtures
    pub fn with_relations(mut self, relations: &[(&str, &[&str])]) -> CatalogResult<Self> {
        for (from, related) in relations {
            self.add_artist(from, None)?;
            for to in *related {
                self.relate(from, to)?;
            }
        }
        Ok(self)
    }

    pub fn contains(&self, entity: &Entity) -> bool {
        self.relations.contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Number of `related` queries answered so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl RelationSource for MemoryCatalog {
    fn related(&self, entity: &Entity) -> Result<BTreeSet<Entity>, BoxError> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        match self.relations.get(entity) {
            Some(related) => Ok(related.clone()),
            None if self.strict => Err(CatalogError::UnknownArtist(entity.to_string()).into()),
            None => {
                tracing::trace!("No relations recorded for {}", entity);
                Ok(BTreeSet::new())
            }
        }
    }

    fn label(&self, entity: &Entity) -> Option<String> {
        self.labels.get(entity).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artistweb_core::{grow, resolve, Error};

    fn e(id: &str) -> Entity {
        resolve(id).unwrap()
    }

    #[test]
    fn test_memory_catalog() {
        let mut catalog = MemoryCatalog::new();
        catalog.add_artist("a", Some("Alice Coltrane")).unwrap();
        catalog.relate("a", "x").unwrap();

        assert_eq!(catalog.related(&e("a")).unwrap(), [e("x")].into());
        assert!(catalog.related(&e("x")).unwrap().is_empty());
        assert!(catalog.related(&e("unknown")).unwrap().is_empty());
        assert_eq!(catalog.label(&e("a")).as_deref(), Some("Alice Coltrane"));
        assert_eq!(catalog.label(&e("x")), None);
        assert_eq!(catalog.query_count(), 3);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_symmetric_catalog() {
        let catalog = MemoryCatalog::new()
            .with_relations(&[("a", &["x"])])
            .unwrap()
            .symmetric();

        assert_eq!(catalog.related(&e("x")).unwrap(), [e("a")].into());

        let mut catalog = catalog;
        catalog.relate("x", "b").unwrap();
        assert_eq!(catalog.related(&e("b")).unwrap(), [e("x")].into());
    }

    #[test]
    fn test_invalid_ids_are_rejected() {
        let mut catalog = MemoryCatalog::new();
        assert!(matches!(
            catalog.relate("a", "not valid"),
            Err(CatalogError::InvalidIdentifier(ref id)) if id == "not valid"
        ));
    }

    #[test]
    fn test_strict_catalog_failure_propagates() {
        let catalog = MemoryCatalog::new()
            .with_relations(&[("a", &["ghost"])])
            .unwrap()
            .strict();

        // "ghost" is registered as a relation target, "b" is unknown
        let err = grow(&catalog, ["a", "b"], None).unwrap_err();
        assert!(matches!(err, Error::Source(_)));
        assert_eq!(err.to_string(), "Unknown artist: b");
    }

    #[test]
    fn test_grow_queries_each_frontier_entity_once() {
        let catalog = MemoryCatalog::new()
            .with_relations(&[("a", &["x"]), ("x", &["b"]), ("b", &[])])
            .unwrap();
        let graph = grow(&catalog, ["a", "b"], None).unwrap();

        assert_eq!(graph.edge_count(), 2);
        // round 1: a, b; round 2: x; empty final frontier
        assert_eq!(catalog.query_count(), 3);
    }
}
