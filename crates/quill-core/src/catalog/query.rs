//! Read-side selectors over a catalog snapshot.
//!
//! These back the browsing views: category pages, search, featured tools and
//! the favorites/recents lists in the sidebar. Inactive tools never show up.

use super::model::{Tool, ToolCategory};
use super::provider::CatalogSnapshot;
use crate::view::View;

/// Tools visible to end users.
pub fn active_tools(catalog: &CatalogSnapshot) -> impl Iterator<Item = &Tool> {
    catalog.tools.iter().filter(|t| t.active)
}

pub fn tools_in_category(catalog: &CatalogSnapshot, category: ToolCategory) -> Vec<&Tool> {
    active_tools(catalog)
        .filter(|t| t.category == category)
        .collect()
}

pub fn featured_tools(catalog: &CatalogSnapshot) -> Vec<&Tool> {
    active_tools(catalog).filter(|t| t.featured).collect()
}

/// Case-insensitive match against title and description.
///
/// A blank term matches every active tool.
pub fn search<'a>(catalog: &'a CatalogSnapshot, term: &str) -> Vec<&'a Tool> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return active_tools(catalog).collect();
    }
    active_tools(catalog)
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Resolves tool ids to catalog entries, keeping the id order.
///
/// Ids that are unknown or inactive are skipped; the catalog may still be
/// loading when this runs.
pub fn resolve<'a>(catalog: &'a CatalogSnapshot, ids: &[String]) -> Vec<&'a Tool> {
    ids.iter()
        .filter_map(|id| catalog.tool(id))
        .filter(|t| t.active)
        .collect()
}

/// Tools listed by a browsing view.
///
/// `all-tools-view` applies the search term; category views list their
/// category. Every other view lists nothing.
pub fn tools_for_view<'a>(
    catalog: &'a CatalogSnapshot,
    view: View,
    search_term: &str,
) -> Vec<&'a Tool> {
    match view {
        View::AllTools => search(catalog, search_term),
        other => match other.category() {
            Some(category) => tools_in_category(catalog, category),
            None => Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogSnapshot {
        let mut hidden = Tool::new("hidden", "Hidden Hook", ToolCategory::AdCopy, "");
        hidden.active = false;
        let mut featured = Tool::new(
            "money-tales",
            "Money Tales",
            ToolCategory::EmailCopy,
            "Story-driven emails",
        );
        featured.featured = true;
        CatalogSnapshot {
            tools: vec![
                Tool::new("hso", "Hook Story Offer", ToolCategory::AdCopy, "Ad hooks"),
                featured,
                hidden,
                Tool::new(
                    "youtube",
                    "YouTube Script",
                    ToolCategory::LongForm,
                    "Video scripts",
                ),
            ],
            categories: Vec::new(),
        }
    }

    fn ids(tools: Vec<&Tool>) -> Vec<&str> {
        tools.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_and_skips_inactive() {
        let catalog = catalog();
        assert_eq!(ids(search(&catalog, "HOOK")), vec!["hso"]);
        assert_eq!(ids(search(&catalog, "emails")), vec!["money-tales"]);
        assert_eq!(search(&catalog, "  ").len(), 3);
    }

    #[test]
    fn test_resolve_keeps_order_and_skips_unknown() {
        let catalog = catalog();
        let wanted = vec![
            "youtube".to_string(),
            "ghost".to_string(),
            "hidden".to_string(),
            "hso".to_string(),
        ];
        assert_eq!(ids(resolve(&catalog, &wanted)), vec!["youtube", "hso"]);
    }

    #[test]
    fn test_tools_for_view() {
        let catalog = catalog();
        assert_eq!(ids(tools_for_view(&catalog, View::AdCopy, "")), vec!["hso"]);
        assert_eq!(
            ids(tools_for_view(&catalog, View::AllTools, "script")),
            vec!["youtube"]
        );
        assert!(tools_for_view(&catalog, View::History, "").is_empty());
        assert_eq!(ids(featured_tools(&catalog)), vec!["money-tales"]);
    }
}
