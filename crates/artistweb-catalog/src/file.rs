//! JSON catalog files
//!
//! ```json
//! {
//!   "artists": [
//!     { "id": "2HfXnSMBRlvDfqMy2NWmR7", "name": "Alice Coltrane", "related": ["..."] }
//!   ]
//! }
//! ```

use crate::error::{parse_id, CatalogError, CatalogResult};
use crate::memory::MemoryCatalog;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// On-disk catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Treat every relation as mutual
    #[serde(default)]
    pub symmetric: bool,

    pub artists: Vec<ArtistRecord>,
}

/// One artist and the ids of its related artists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub related: Vec<String>,
}

impl CatalogFile {
    /// Read a catalog file from disk
    pub fn read(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)?;
        tracing::debug!("Read {} artists from {:?}", file.artists.len(), path);
        Ok(file)
    }

    pub fn write(&self, path: &Path) -> CatalogResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build an in-memory catalog, validating every id
    ///
    /// Ids are canonicalized, so handles and raw ids may be mixed. An artist
    /// listed twice is an error.
    pub fn into_catalog(self) -> CatalogResult<MemoryCatalog> {
        let mut catalog = MemoryCatalog::new();
        if self.symmetric {
            catalog = catalog.symmetric();
        }

        let mut seen = HashSet::new();
        for record in self.artists {
            let entity = parse_id(&record.id)?;
            if !seen.insert(entity.clone()) {
                return Err(CatalogError::DuplicateArtist(entity.to_string()));
            }
            catalog.add_artist(entity.id(), None)?;
            if let Some(name) = record.name {
                catalog.set_label(entity.clone(), name);
            }
            for related in &record.related {
                catalog.insert(entity.clone(), parse_id(related)?);
            }
        }

        tracing::info!("Loaded catalog with {} artists", catalog.len());
        Ok(catalog)
    }
}

impl MemoryCatalog {
    /// Load a JSON catalog file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        CatalogFile::read(path)?.into_catalog()
    }
}
