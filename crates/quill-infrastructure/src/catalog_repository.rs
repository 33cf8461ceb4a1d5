//! Catalog providers backed by a JSON file or by memory.
//!
//! The file layout is a single object:
//!
//! ```json
//! { "tools": [ ... ], "categories": [ ... ] }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quill_core::catalog::{CatalogProvider, CatalogSnapshot, Category, Tool};
use quill_core::error::{QuillError, Result};

/// Reads the catalog from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonCatalogProvider {
    path: PathBuf,
}

impl JsonCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<CatalogSnapshot> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            QuillError::catalog(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded catalog from {:?}: {} tools, {} categories",
            self.path,
            snapshot.tools.len(),
            snapshot.categories.len()
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl CatalogProvider for JsonCatalogProvider {
    async fn tools(&self) -> Result<Vec<Tool>> {
        Ok(self.read().await?.tools)
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.read().await?.categories)
    }

    async fn snapshot(&self) -> Result<CatalogSnapshot> {
        self.read().await
    }
}

/// Serves a fixed catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider {
    snapshot: CatalogSnapshot,
}

impl StaticCatalogProvider {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalogProvider {
    async fn tools(&self) -> Result<Vec<Tool>> {
        Ok(self.snapshot.tools.clone())
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.snapshot.categories.clone())
    }
}
