//! Entity (node) identity and resolution

use crate::error::{Error, Result};
use crate::limits;
use serde::{Deserialize, Serialize};

/// Canonical identity of an artist, used as a graph node key
///
/// Two entities are equal iff their canonical ids match. Construct one with
/// [`resolve`] or [`Entity::parse`]; the id is validated on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Entity(String);

impl Entity {
    /// Parse a raw identifier or artist handle into an entity
    pub fn parse(raw: &str) -> Result<Self> {
        let id = canonical_id(raw);
        limits::validate_identifier(id)
            .map_err(|e| Error::InvalidIdentifier(format!("{:?}: {}", raw, e)))?;
        Ok(Self(id.to_string()))
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Entity {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for Entity {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Entity> for String {
    fn from(entity: Entity) -> Self {
        entity.0
    }
}

/// Loose reference to an artist: either a raw identifier or a resolved entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Raw(String),
    Resolved(Entity),
}

impl From<&str> for EntityRef {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for EntityRef {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<&String> for EntityRef {
    fn from(s: &String) -> Self {
        Self::Raw(s.clone())
    }
}

impl From<Entity> for EntityRef {
    fn from(entity: Entity) -> Self {
        Self::Resolved(entity)
    }
}

impl From<&Entity> for EntityRef {
    fn from(entity: &Entity) -> Self {
        Self::Resolved(entity.clone())
    }
}

/// Resolve a loose reference into its canonical entity
///
/// Deterministic and idempotent: `resolve(resolve(x)?) == resolve(x)`.
pub fn resolve(x: impl Into<EntityRef>) -> Result<Entity> {
    match x.into() {
        EntityRef::Resolved(entity) => Ok(entity),
        EntityRef::Raw(raw) => Entity::parse(&raw),
    }
}

/// Resolve every member of an iterable, failing on the first bad identifier
pub fn resolve_all<I>(items: I) -> Result<std::collections::BTreeSet<Entity>>
where
    I: IntoIterator,
    I::Item: Into<EntityRef>,
{
    items.into_iter().map(resolve).collect()
}

/// Strip URI (`scheme:artist:<id>`) and URL (`.../artist/<id>`) handles down to the id
fn canonical_id(raw: &str) -> &str {
    let trimmed = raw.trim();

    if let Some((_, rest)) = trimmed.split_once("://") {
        let path = rest.split(['?', '#']).next().unwrap_or(rest);
        let segments: Vec<&str> = path.split('/').skip(1).filter(|s| !s.is_empty()).collect();
        return segments
            .windows(2)
            .find(|pair| pair[0] == "artist")
            .map(|pair| pair[1])
            .unwrap_or(trimmed);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() >= 3 && parts[parts.len() - 2] == "artist" {
        return parts[parts.len() - 1];
    }

    trimmed
}
