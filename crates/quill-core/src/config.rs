//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure `ConfigService`. Every
//! field has a default so a partial or missing file is fine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::ToolCategory;
use crate::state::Theme;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Theme applied at startup.
    pub initial_theme: Theme,
    /// Default tracing filter directive; `RUST_LOG` overrides it.
    pub log_level: String,
    /// Also write a daily rolling log file under the logs directory.
    pub log_to_file: bool,
    /// JSON catalog to load tools and categories from.
    pub catalog_path: Option<PathBuf>,
    /// Initial session data.
    pub seed: SeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_theme: Theme::default(),
            log_level: "info".to_string(),
            log_to_file: false,
            catalog_path: None,
            seed: SeedConfig::default(),
        }
    }
}

/// Projects, favorites and recents the session starts with.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SeedConfig {
    #[serde(rename = "project")]
    pub projects: Vec<SeedProject>,
    pub favorites: Vec<String>,
    pub recents: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedProject {
    /// Fixed id; a fresh one is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<ToolCategory>,
}
