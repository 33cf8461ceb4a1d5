//! Serializable view of the whole session for the presentation layer.

use serde::Serialize;

use crate::catalog::Tool;
use crate::history::ChatHistoryItem;
use crate::project::Project;
use crate::session::ToolSession;
use crate::view::Route;
use crate::workflow::RenameState;

use super::model::Theme;

/// Everything a renderer needs, in one value.
///
/// Built by `AppController::snapshot`; the presentation layer never sees
/// the mutable state itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub route: Route,
    pub is_admin_mode: bool,
    pub theme: Theme,
    pub side_panel_open: bool,
    pub project_modal_open: bool,
    pub selected_tool: Option<Tool>,
    pub search_term: String,
    pub projects: Vec<Project>,
    pub chat_history: Vec<ChatHistoryItem>,
    pub favorite_tool_ids: Vec<String>,
    pub recent_tool_ids: Vec<String>,
    pub skip_activation_tool_ids: Vec<String>,
    pub tool_for_activation: Option<Tool>,
    pub rename: RenameState,
    pub active_session: Option<ToolSession>,
}
