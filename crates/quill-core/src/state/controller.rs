//! Application state controller.
//!
//! `AppController` owns the session state and is the only thing that mutates
//! it. Every user intent maps to one named transition below; a transition
//! either applies completely or, on validation failure, not at all.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::{Tool, ToolCategory};
use crate::config::AppConfig;
use crate::history::{AttachedFile, ChatHistoryItem, NewChat};
use crate::preference::SkipActivationRepository;
use crate::project::Project;
use crate::session::{AnswerError, ToolSession};
use crate::view::{Route, View};
use crate::workflow::activation::{self, ActivationDecision, ActivationGate, ActivationResponse};
use crate::workflow::confirm::{ConfirmationPrompt, DELETE_CHAT_PROMPT, DELETE_PROJECT_PROMPT};
use crate::workflow::rename::{EntityKind, RenameOutcome, RenameTarget, RenameWorkflow};

use super::display::DisplayContext;
use super::model::{AppState, Favorites, Recents, Theme};
use super::snapshot::AppSnapshot;

pub struct AppController {
    state: AppState,
    rename: RenameWorkflow,
    activation: ActivationGate,
    active_session: Option<ToolSession>,
    skip_repository: Arc<dyn SkipActivationRepository>,
    display: Arc<dyn DisplayContext>,
}

impl AppController {
    /// Builds the controller from configuration and the persisted skip-list.
    ///
    /// The initial theme is pushed to `display` right away.
    pub fn new(
        config: &AppConfig,
        skip_repository: Arc<dyn SkipActivationRepository>,
        display: Arc<dyn DisplayContext>,
    ) -> Self {
        let mut seen_ids = HashSet::new();
        let mut projects = Vec::with_capacity(config.seed.projects.len());
        for seed in &config.seed.projects {
            let mut project = Project::new(&seed.name, seed.tags.clone());
            if let Some(id) = &seed.id {
                if seen_ids.contains(id) {
                    tracing::warn!(
                        "Seed project id '{}' is already used, assigning {}",
                        id,
                        project.id
                    );
                } else {
                    project.id = id.clone();
                }
            }
            seen_ids.insert(project.id.clone());
            projects.push(project);
        }

        let state = AppState {
            theme: config.initial_theme,
            projects,
            favorites: Favorites::from_ids(config.seed.favorites.iter().cloned()),
            recents: Recents::from_ids(config.seed.recents.iter().cloned()),
            skip_activation: skip_repository.load(),
            ..AppState::default()
        };

        display.apply_theme(state.theme);
        tracing::debug!(
            "Controller ready: {} project(s), {} skipped activation(s)",
            state.projects.len(),
            state.skip_activation.len()
        );

        Self {
            state,
            rename: RenameWorkflow::new(),
            activation: ActivationGate::default(),
            active_session: None,
            skip_repository,
            display,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn route(&self) -> Route {
        Route::resolve(self.state.current_view)
    }

    pub fn pending_activation(&self) -> Option<&Tool> {
        self.activation.pending()
    }

    pub fn pending_rename(&self) -> Option<&RenameTarget> {
        self.rename.pending()
    }

    pub fn active_session(&self) -> Option<&ToolSession> {
        self.active_session.as_ref()
    }

    pub fn snapshot(&self) -> AppSnapshot {
        let state = &self.state;
        AppSnapshot {
            route: self.route(),
            is_admin_mode: state.is_admin_mode(),
            theme: state.theme,
            side_panel_open: state.side_panel_open,
            project_modal_open: state.project_modal_open,
            selected_tool: state.selected_tool.clone(),
            search_term: state.search_term.clone(),
            projects: state.projects.clone(),
            chat_history: state.chat_history.clone(),
            favorite_tool_ids: state.favorites.ids().to_vec(),
            recent_tool_ids: state.recents.ids().to_vec(),
            skip_activation_tool_ids: state.skip_activation.iter().cloned().collect(),
            tool_for_activation: self.activation.pending().cloned(),
            rename: self.rename.state().clone(),
            active_session: self.active_session.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Switches the current view.
    ///
    /// Closes the side panel and drops the selected tool. The search term
    /// survives only when heading to the all-tools view.
    pub fn navigate(&mut self, view: View) {
        let was_admin = self.state.is_admin_mode();
        self.state.current_view = view;
        self.state.side_panel_open = false;
        self.clear_selected_tool();
        if view != View::AllTools {
            self.state.search_term.clear();
        }

        if was_admin != view.is_admin() {
            let action = if view.is_admin() {
                "Entering"
            } else {
                "Leaving"
            };
            tracing::info!("{} administrative mode", action);
        }
        tracing::debug!("Navigated to {}", view);
    }

    /// Updates the search text, jumping to the all-tools view if needed.
    pub fn change_search(&mut self, text: &str) {
        if self.state.current_view != View::AllTools {
            self.state.current_view = View::AllTools;
            self.clear_selected_tool();
        }
        self.state.search_term = text.to_string();
    }

    pub fn toggle_side_panel(&mut self) {
        self.state.side_panel_open = !self.state.side_panel_open;
    }

    pub fn close_side_panel(&mut self) {
        self.state.side_panel_open = false;
    }

    pub fn open_project_modal(&mut self) {
        self.state.project_modal_open = true;
    }

    pub fn close_project_modal(&mut self) {
        self.state.project_modal_open = false;
    }

    /// Flips the theme and updates the root display. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.state.theme = self.state.theme.toggled();
        self.display.apply_theme(self.state.theme);
        tracing::debug!("Theme set to {}", self.state.theme.css_class());
        self.state.theme
    }

    // ------------------------------------------------------------------
    // Tools
    // ------------------------------------------------------------------

    pub fn record_tool_usage(&mut self, tool_id: &str) {
        self.state.recents.record(tool_id);
    }

    /// Returns whether the tool is a favorite afterwards.
    pub fn toggle_favorite(&mut self, tool_id: &str) -> bool {
        self.state.favorites.toggle(tool_id)
    }

    /// Opens the tool interface for `tool` and begins its guided session.
    pub fn start_tool_session(&mut self, tool: Tool) {
        self.record_tool_usage(&tool.id);
        self.active_session = Some(ToolSession::start(&tool));
        tracing::info!("Starting session for tool '{}'", tool.id);
        self.state.selected_tool = Some(tool);
        self.state.current_view = View::ToolInterface;
        self.state.side_panel_open = false;
        self.activation.clear();
    }

    /// Starts the tool right away if it is on the skip-list, otherwise shows
    /// the activation prompt for it.
    pub fn request_tool_activation(&mut self, tool: Tool) -> ActivationDecision {
        let decision = activation::decide(&self.state.skip_activation, &tool);
        match decision {
            ActivationDecision::StartImmediately => self.start_tool_session(tool),
            ActivationDecision::Prompt => {
                tracing::debug!("Prompting activation for tool '{}'", tool.id);
                self.activation.open(tool);
            }
        }
        decision
    }

    /// Applies the user's answer to the pending activation prompt.
    ///
    /// Returns `true` when a session was started.
    pub fn respond_to_activation(&mut self, response: ActivationResponse) -> bool {
        let Some(tool) = self.activation.take() else {
            return false;
        };

        if !response.starts_session() {
            return false;
        }
        if response == ActivationResponse::StartAndSkipFuture {
            self.set_skip_activation(&tool.id, true);
        }
        self.start_tool_session(tool);
        true
    }

    /// Adds or removes a tool from the skip-list and persists the whole set.
    ///
    /// A failed write is logged and otherwise ignored.
    pub fn set_skip_activation(&mut self, tool_id: &str, should_add: bool) {
        if should_add {
            self.state.skip_activation.insert(tool_id.to_string());
        } else {
            self.state.skip_activation.remove(tool_id);
        }

        if let Err(e) = self.skip_repository.save(&self.state.skip_activation) {
            tracing::warn!("Failed to persist skip-activation list: {}", e);
        }
    }

    /// Records an answer in the active tool session.
    pub fn answer_current_question(
        &mut self,
        text: &str,
        file: Option<AttachedFile>,
    ) -> Result<(), AnswerError> {
        let session = self
            .active_session
            .as_mut()
            .ok_or(AnswerError::NoActiveSession)?;
        session.answer(text, file)
    }

    /// Files the active session under a project (or none).
    pub fn assign_session_project(&mut self, project_id: Option<String>) {
        if let Some(session) = self.active_session.as_mut() {
            session.set_project(project_id);
        }
    }

    /// Saves the active session's transcript to history.
    ///
    /// Returns the new chat id, or `None` when no session is active.
    pub fn save_active_session(&mut self) -> Option<String> {
        let session = self.active_session.take()?;
        Some(self.save_chat(session.into_chat()))
    }

    // ------------------------------------------------------------------
    // Projects and history
    // ------------------------------------------------------------------

    /// Appends a project and closes the creation modal. Returns its id.
    pub fn create_project(&mut self, name: &str, tags: Vec<ToolCategory>) -> String {
        let project = Project::new(name, tags);
        let id = project.id.clone();
        tracing::info!("Created project '{}' ({})", project.name, id);

        let mut projects = self.state.projects.clone();
        projects.push(project);
        self.state.projects = projects;
        self.state.project_modal_open = false;
        id
    }

    /// Prepends the chat to history and returns to the dashboard.
    pub fn save_chat(&mut self, chat: NewChat) -> String {
        let item = ChatHistoryItem::from_new(chat);
        let id = item.id.clone();
        tracing::info!("Saved chat {} for tool '{}'", id, item.tool_id);

        let mut history = Vec::with_capacity(self.state.chat_history.len() + 1);
        history.push(item);
        history.extend(self.state.chat_history.iter().cloned());
        self.state.chat_history = history;

        self.navigate(View::Dashboard);
        id
    }

    pub fn clear_history(&mut self) {
        tracing::info!("Clearing {} chat(s)", self.state.chat_history.len());
        self.state.chat_history = Vec::new();
        self.drop_rename_of_kind(EntityKind::Chat, None);
    }

    /// Deletes a project after confirmation. Returns whether it was removed.
    pub fn delete_project(&mut self, id: &str, prompt: &dyn ConfirmationPrompt) -> bool {
        if self.state.project(id).is_none() {
            tracing::debug!("Delete requested for unknown project {}", id);
            return false;
        }
        if !prompt.confirm(DELETE_PROJECT_PROMPT) {
            return false;
        }

        self.state.projects = self
            .state
            .projects
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        self.drop_rename_of_kind(EntityKind::Project, Some(id));
        tracing::info!("Deleted project {}", id);
        true
    }

    /// Deletes a saved chat after confirmation. Returns whether it was removed.
    pub fn delete_chat(&mut self, id: &str, prompt: &dyn ConfirmationPrompt) -> bool {
        if self.state.chat(id).is_none() {
            tracing::debug!("Delete requested for unknown chat {}", id);
            return false;
        }
        if !prompt.confirm(DELETE_CHAT_PROMPT) {
            return false;
        }

        self.state.chat_history = self
            .state
            .chat_history
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        self.drop_rename_of_kind(EntityKind::Chat, Some(id));
        tracing::info!("Deleted chat {}", id);
        true
    }

    // ------------------------------------------------------------------
    // Rename
    // ------------------------------------------------------------------

    /// Opens the rename prompt for a project. Unknown ids are ignored.
    pub fn request_rename_project(&mut self, id: &str) -> bool {
        let Some(project) = self.state.project(id) else {
            return false;
        };
        let target = RenameTarget {
            id: project.id.clone(),
            current_name: project.name.clone(),
            kind: EntityKind::Project,
        };
        self.rename.request(target);
        true
    }

    /// Opens the rename prompt for a saved chat. Unknown ids are ignored.
    pub fn request_rename_chat(&mut self, id: &str) -> bool {
        let Some(chat) = self.state.chat(id) else {
            return false;
        };
        let target = RenameTarget {
            id: chat.id.clone(),
            current_name: chat.tool_title.clone(),
            kind: EntityKind::Chat,
        };
        self.rename.request(target);
        true
    }

    pub fn cancel_rename(&mut self) {
        self.rename.cancel();
    }

    /// Submits a new name for the pending rename target.
    pub fn rename(&mut self, new_name: &str) -> RenameOutcome {
        let outcome = self.rename.commit(new_name);
        if let RenameOutcome::Committed { target, new_name } = &outcome {
            let applied = match target.kind {
                EntityKind::Project => {
                    let found = self.state.project(&target.id).is_some();
                    self.state.projects = self
                        .state
                        .projects
                        .iter()
                        .map(|p| {
                            let mut p = p.clone();
                            if p.id == target.id {
                                p.name = new_name.clone();
                            }
                            p
                        })
                        .collect();
                    found
                }
                EntityKind::Chat => {
                    let found = self.state.chat(&target.id).is_some();
                    self.state.chat_history = self
                        .state
                        .chat_history
                        .iter()
                        .map(|c| {
                            let mut c = c.clone();
                            if c.id == target.id {
                                c.tool_title = new_name.clone();
                            }
                            c
                        })
                        .collect();
                    found
                }
            };

            if applied {
                tracing::info!("Renamed {:?} {} to '{}'", target.kind, target.id, new_name);
            } else {
                tracing::warn!("Rename target {} no longer exists", target.id);
            }
        }
        outcome
    }

    fn clear_selected_tool(&mut self) {
        self.state.selected_tool = None;
        self.active_session = None;
    }

    /// Cancels a pending rename whose entity is gone. `None` matches any id.
    fn drop_rename_of_kind(&mut self, kind: EntityKind, id: Option<&str>) {
        let stale = self
            .rename
            .pending()
            .is_some_and(|t| t.kind == kind && id.is_none_or(|id| t.id == id));
        if stale {
            self.rename.cancel();
        }
    }
}
