//! Visual options and rendered artifacts

use crate::color::Rgb;
use artistweb_core::{Entity, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Named visual options shared by the renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Colour of the seeds (and of every node when there are no seeds)
    #[serde(default = "default_near_color")]
    pub near_color: Rgb,

    /// Colour of the nodes farthest from the seeds
    #[serde(default = "default_far_color")]
    pub far_color: Rgb,

    #[serde(default = "default_edge_color")]
    pub edge_color: Rgb,

    #[serde(default = "default_font_color")]
    pub font_color: Rgb,

    #[serde(default = "default_background")]
    pub background: Rgb,

    /// Persist the artifact under `output_dir`
    #[serde(default)]
    pub save: bool,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_near_color() -> Rgb {
    Rgb::new(0x61, 0x77, 0xaa)
}

fn default_far_color() -> Rgb {
    Rgb::new(0x0e, 0x1b, 0x3a)
}

fn default_edge_color() -> Rgb {
    Rgb::new(0x00, 0x01, 0x02)
}

fn default_font_color() -> Rgb {
    Rgb::new(0xb9, 0xcd, 0xfb)
}

fn default_background() -> Rgb {
    Rgb::new(0x2e, 0x42, 0x72)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            near_color: default_near_color(),
            far_color: default_far_color(),
            edge_color: default_edge_color(),
            font_color: default_font_color(),
            background: default_background(),
            save: false,
            output_dir: default_output_dir(),
        }
    }
}

impl RenderOptions {
    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Output file for a seed set: sorted seed ids joined by `-`
    pub fn output_path(&self, seeds: &BTreeSet<Entity>, extension: &str) -> PathBuf {
        let stem = seeds.iter().map(Entity::id).collect::<Vec<_>>().join("-");
        let stem = if stem.is_empty() { "graph".to_string() } else { stem };
        self.output_dir.join(format!("{}.{}", stem, extension))
    }

    /// Write `content` to the seed set's output file when saving is enabled
    pub(crate) fn persist(
        &self,
        seeds: &BTreeSet<Entity>,
        extension: &str,
        content: &str,
    ) -> Result<Option<PathBuf>> {
        if !self.save {
            return Ok(None);
        }
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_path(seeds, extension);
        std::fs::write(&path, content)?;
        tracing::info!("Saved rendered graph to {:?}", path);
        Ok(Some(path))
    }
}

/// Rendered graph text, and where it was saved (if it was)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub content: String,
    pub path: Option<PathBuf>,
}
