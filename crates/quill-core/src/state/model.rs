//! Session state models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Tool;
use crate::history::ChatHistoryItem;
use crate::project::Project;
use crate::view::View;

/// Maximum number of recently used tools kept.
pub const RECENTS_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class name set on the root display element.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Favorite tool ids in the order they were added. No duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<String>);

impl Favorites {
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        let mut favorites = Self::default();
        for id in ids {
            if !favorites.contains(&id) {
                favorites.0.push(id);
            }
        }
        favorites
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.0.iter().any(|id| id == tool_id)
    }

    /// Adds the id if absent, removes it if present. Returns whether the tool
    /// is a favorite afterwards.
    pub fn toggle(&mut self, tool_id: &str) -> bool {
        if self.contains(tool_id) {
            self.0.retain(|id| id != tool_id);
            false
        } else {
            self.0.push(tool_id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

/// Recently used tool ids, most recent first, at most [`RECENTS_LIMIT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recents(Vec<String>);

impl Recents {
    /// Builds the list from ids ordered most recent first.
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        unique.truncate(RECENTS_LIMIT);
        Self(unique)
    }

    pub fn record(&mut self, tool_id: &str) {
        let mut next = Vec::with_capacity(RECENTS_LIMIT);
        next.push(tool_id.to_string());
        let rest = self.0.iter().filter(|id| *id != tool_id);
        next.extend(rest.cloned());
        next.truncate(RECENTS_LIMIT);
        self.0 = next;
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

/// Everything the session knows. Only the controller mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub(crate) current_view: View,
    pub(crate) theme: Theme,
    pub(crate) side_panel_open: bool,
    pub(crate) project_modal_open: bool,
    pub(crate) selected_tool: Option<Tool>,
    pub(crate) search_term: String,
    pub(crate) projects: Vec<Project>,
    pub(crate) chat_history: Vec<ChatHistoryItem>,
    pub(crate) favorites: Favorites,
    pub(crate) recents: Recents,
    pub(crate) skip_activation: BTreeSet<String>,
}

impl AppState {
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Derived from the current view; never stored.
    pub fn is_admin_mode(&self) -> bool {
        self.current_view.is_admin()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_side_panel_open(&self) -> bool {
        self.side_panel_open
    }

    pub fn is_project_modal_open(&self) -> bool {
        self.project_modal_open
    }

    pub fn selected_tool(&self) -> Option<&Tool> {
        self.selected_tool.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Saved chats, most recent first.
    pub fn chat_history(&self) -> &[ChatHistoryItem] {
        &self.chat_history
    }

    pub fn chat(&self, id: &str) -> Option<&ChatHistoryItem> {
        self.chat_history.iter().find(|c| c.id == id)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn recents(&self) -> &Recents {
        &self.recents
    }

    pub fn skip_activation(&self) -> &BTreeSet<String> {
        &self.skip_activation
    }
}
