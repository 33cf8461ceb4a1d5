//! Catalog provider trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::model::{Category, Tool};
use crate::error::Result;

/// Read-only source of tools and categories.
///
/// Implementations may hit the network or disk; the application treats every
/// fetch as an eventually-consistent snapshot.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns every tool known to the catalog, active or not.
    async fn tools(&self) -> Result<Vec<Tool>>;

    /// Returns every category known to the catalog.
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Fetches tools and categories together.
    async fn snapshot(&self) -> Result<CatalogSnapshot> {
        let tools = self.tools().await?;
        let categories = self.categories().await?;
        Ok(CatalogSnapshot { tools, categories })
    }
}

/// A point-in-time copy of the catalog.
///
/// The default value is the "still loading" catalog: empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub tools: Vec<Tool>,
    pub categories: Vec<Category>,
}

impl CatalogSnapshot {
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.categories.is_empty()
    }

    /// Looks up a tool by id.
    pub fn tool(&self, tool_id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == tool_id)
    }

    /// Active categories sorted by display order.
    pub fn active_categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> =
            self.categories.iter().filter(|c| c.active).collect();
        categories.sort_by_key(|c| c.display_order);
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::ToolCategory;

    struct StaticProvider;

    #[async_trait]
    impl CatalogProvider for StaticProvider {
        async fn tools(&self) -> Result<Vec<Tool>> {
            Ok(vec![Tool::new("hso", "HSO", ToolCategory::AdCopy, "")])
        }

        async fn categories(&self) -> Result<Vec<Category>> {
            Ok(vec![
                Category {
                    id: "c2".to_string(),
                    name: "LONG_FORM".to_string(),
                    display_order: 2,
                    active: true,
                },
                Category {
                    id: "c1".to_string(),
                    name: "AD_COPY".to_string(),
                    display_order: 1,
                    active: true,
                },
                Category {
                    id: "c3".to_string(),
                    name: "OTHER_FLOWS".to_string(),
                    display_order: 0,
                    active: false,
                },
            ])
        }
    }

    #[tokio::test]
    async fn test_default_snapshot_combines_both_lists() {
        let snapshot = StaticProvider.snapshot().await.unwrap();
        assert_eq!(snapshot.tools.len(), 1);
        assert!(snapshot.tool("hso").is_some());
        assert!(snapshot.tool("missing").is_none());

        let ids: Vec<&str> = snapshot
            .active_categories()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[test]
    fn test_loading_snapshot_is_empty() {
        assert!(CatalogSnapshot::default().is_empty());
    }
}
