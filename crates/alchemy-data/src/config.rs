use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::loader::{self, DataLoadError};

/// Which recipe catalog a session plays with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogMode {
    #[default]
    Default,
    Chemistry,
}

impl CatalogMode {
    pub fn is_chemistry(self) -> bool {
        self == CatalogMode::Chemistry
    }

    pub fn from_chemistry_flag(chemistry: bool) -> Self {
        if chemistry {
            CatalogMode::Chemistry
        } else {
            CatalogMode::Default
        }
    }
}

/// A player-authored recipe, re-applied every time a catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecipe {
    pub first: String,
    pub second: String,
    pub product: String,
}

impl PlayerRecipe {
    pub fn new(first: &str, second: &str, product: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            product: product.to_string(),
        }
    }
}

/// Session settings, usually read from `session.ron`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_catalog")]
    pub default_catalog: PathBuf,
    #[serde(default = "default_chemistry_catalog")]
    pub chemistry_catalog: PathBuf,
    #[serde(default = "default_save_file")]
    pub save_file: PathBuf,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub player_recipes: Vec<PlayerRecipe>,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("recipes.json")
}

fn default_chemistry_catalog() -> PathBuf {
    PathBuf::from("chemistry.json")
}

fn default_save_file() -> PathBuf {
    PathBuf::from("savefile/save.csv")
}

fn default_page_size() -> usize {
    10
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_catalog: default_catalog(),
            chemistry_catalog: default_chemistry_catalog(),
            save_file: default_save_file(),
            page_size: default_page_size(),
            player_recipes: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// The catalog file for a mode.
    pub fn catalog_path(&self, mode: CatalogMode) -> &Path {
        match mode {
            CatalogMode::Default => &self.default_catalog,
            CatalogMode::Chemistry => &self.chemistry_catalog,
        }
    }

    /// Resolve relative paths against `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        for path in [
            &mut self.default_catalog,
            &mut self.chemistry_catalog,
            &mut self.save_file,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

/// Load a session config file (RON, TOML or JSON). Relative paths inside it
/// are resolved against the file's directory.
pub fn load_config(path: &Path) -> Result<SessionConfig, DataLoadError> {
    let config: SessionConfig = loader::deserialize_file(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.rooted_at(base))
}

/// Find and load `session.{ron,toml,json}` in a directory.
pub fn load_config_from_dir(dir: &Path) -> Result<SessionConfig, DataLoadError> {
    let path = loader::require_data_file(dir, "session")?;
    load_config(&path)
}
