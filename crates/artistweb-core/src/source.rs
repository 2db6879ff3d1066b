//! Relation source trait definition

use crate::entity::Entity;
use crate::error::BoxError;
use std::collections::BTreeSet;

/// External collaborator answering "which artists are related to this one?"
///
/// Calls may block on I/O. Within one pipeline run, repeated calls for the
/// same entity are expected to return consistent results. Failures are
/// handed back to the caller unchanged.
pub trait RelationSource {
    /// Directly related entities of `entity`
    fn related(&self, entity: &Entity) -> Result<BTreeSet<Entity>, BoxError>;

    /// Display label for an entity, if the source knows one
    fn label(&self, _entity: &Entity) -> Option<String> {
        None
    }
}

impl<S: RelationSource + ?Sized> RelationSource for &S {
    fn related(&self, entity: &Entity) -> Result<BTreeSet<Entity>, BoxError> {
        (**self).related(entity)
    }

    fn label(&self, entity: &Entity) -> Option<String> {
        (**self).label(entity)
    }
}

/// Adapter turning a closure into a relation source
pub struct FnSource<F>(pub F);

impl<F> RelationSource for FnSource<F>
where
    F: Fn(&Entity) -> Result<BTreeSet<Entity>, BoxError>,
{
    fn related(&self, entity: &Entity) -> Result<BTreeSet<Entity>, BoxError> {
        (self.0)(entity)
    }
}
