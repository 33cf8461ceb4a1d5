//! Project domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ToolCategory;

/// Name given to projects created without one.
pub const UNTITLED_PROJECT_NAME: &str = "Untitled Project";

/// A user-defined grouping of category tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tags: Vec<ToolCategory>,
}

impl Project {
    /// Creates a project with a fresh id.
    ///
    /// Blank names are replaced with [`UNTITLED_PROJECT_NAME`]; any other
    /// name is kept as given. Duplicate tags are dropped while keeping their
    /// first position.
    pub fn new(name: &str, tags: Vec<ToolCategory>) -> Self {
        let name = if name.trim().is_empty() {
            UNTITLED_PROJECT_NAME.to_string()
        } else {
            name.to_string()
        };

        let mut unique_tags = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique_tags.contains(&tag) {
                unique_tags.push(tag);
            }
        }

        Self {
            id: format!("proj-{}", Uuid::new_v4()),
            name,
            tags: unique_tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_becomes_untitled() {
        assert_eq!(Project::new("", vec![]).name, UNTITLED_PROJECT_NAME);
        assert_eq!(Project::new("   \t", vec![]).name, UNTITLED_PROJECT_NAME);
    }

    #[test]
    fn test_name_is_kept_as_given() {
        assert_eq!(Project::new("  Q4 Launch ", vec![]).name, "  Q4 Launch ");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Project::new("A", vec![]);
        let b = Project::new("A", vec![]);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("proj-"));
    }

    #[test]
    fn test_duplicate_tags_are_dropped() {
        let project = Project::new(
            "Launch",
            vec![
                ToolCategory::EmailCopy,
                ToolCategory::AdCopy,
                ToolCategory::EmailCopy,
            ],
        );
        assert_eq!(
            project.tags,
            vec![ToolCategory::EmailCopy, ToolCategory::AdCopy]
        );
    }
}
