//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use artistweb_render::{RenderOptions, Rgb};
use serde::{Deserialize, Serialize};

/// Config file location: explicit path, else `<config_dir>/artistweb/config.toml`
///
/// `ARTISTWEB_CONFIG` reaches this through the `--config` flag.
pub fn config_file_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("artistweb")
            .join("config.toml")
    })
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file used when `--catalog` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    pub output_dir: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rounds: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,

    pub near_color: Rgb,
    pub far_color: Rgb,
    pub edge_color: Rgb,
    pub font_color: Rgb,
    pub background: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            catalog: None,
            output_dir: render.output_dir,
            max_rounds: None,
            max_len: None,
            near_color: render.near_color,
            far_color: render.far_color,
            edge_color: render.edge_color,
            font_color: render.font_color,
            background: render.background,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "catalog",
            "output_dir",
            "max_rounds",
            "max_len",
            "near_color",
            "far_color",
            "edge_color",
            "font_color",
            "background",
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "catalog" => self.catalog.as_ref().map(|p| p.display().to_string()),
            "output_dir" => Some(self.output_dir.display().to_string()),
            "max_rounds" => self.max_rounds.map(|n| n.to_string()),
            "max_len" => self.max_len.map(|n| n.to_string()),
            "near_color" => Some(self.near_color.to_string()),
            "far_color" => Some(self.far_color.to_string()),
            "edge_color" => Some(self.edge_color.to_string()),
            "font_color" => Some(self.font_color.to_string()),
            "background" => Some(self.background.to_string()),
            _ => return None,
        };
        Some(value.unwrap_or_else(|| "(not set)".to_string()))
    }

    /// Set a key from its string form; an empty value clears optional keys
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let value = value.trim();
        match key {
            "catalog" => self.catalog = optional(value, |v| Ok(PathBuf::from(v)))?,
            "output_dir" => {
                if value.is_empty() {
                    anyhow::bail!("output_dir cannot be empty");
                }
                self.output_dir = PathBuf::from(value);
            }
            "max_rounds" => self.max_rounds = optional(value, parse_count)?,
            "max_len" => self.max_len = optional(value, parse_count)?,
            "near_color" => self.near_color = value.parse()?,
            "far_color" => self.far_color = value.parse()?,
            "edge_color" => self.edge_color = value.parse()?,
            "font_color" => self.font_color = value.parse()?,
            "background" => self.background = value.parse()?,
            _ => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }

    /// Render options from the configured colours and output directory
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            near_color: self.near_color,
            far_color: self.far_color,
            edge_color: self.edge_color,
            font_color: self.font_color,
            background: self.background,
            save: false,
            output_dir: self.output_dir.clone(),
        }
    }
}

fn optional<T>(value: &str, parse: impl FnOnce(&str) -> anyhow::Result<T>) -> anyhow::Result<Option<T>> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

fn parse_count(value: &str) -> anyhow::Result<usize> {
    value
        .parse()
        .with_context(|| format!("Expected a non-negative integer, got {:?}", value))
}
