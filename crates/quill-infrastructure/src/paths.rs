//! Unified path management for Quill files.
//!
//! ```text
//! ~/.config/quill/             # Config directory
//! ├── config.toml              # Application configuration
//! └── preferences.json         # Persisted UI preferences
//!
//! ~/.local/share/quill/        # Data directory
//! ├── catalog.json             # Default catalog location
//! └── logs/                    # Application logs
//!     └── quill.log.YYYY-MM-DD
//! ```
//!
//! A base directory override puts everything under one root, which is what
//! tests use.

use std::path::PathBuf;

const APP_DIR: &str = "quill";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for quill_core::QuillError {
    fn from(err: PathError) -> Self {
        quill_core::QuillError::config(err.to_string())
    }
}

/// Files and directories managed by Quill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    Preferences,
    Catalog,
    Logs,
}

#[derive(Debug, Clone, Default)]
pub struct QuillPaths {
    base_dir: Option<PathBuf>,
}

impl QuillPaths {
    /// `None` uses the platform directories.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(match service {
            ServiceType::Config => self.config_dir()?.join("config.toml"),
            ServiceType::Preferences => self.config_dir()?.join("preferences.json"),
            ServiceType::Catalog => self.data_dir()?.join("catalog.json"),
            ServiceType::Logs => self.data_dir()?.join("logs"),
        })
    }
}
