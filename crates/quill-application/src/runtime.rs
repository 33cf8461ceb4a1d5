//! Single-threaded intent loop.
//!
//! [`AppRuntime`] owns the controller and the latest catalog snapshot. Every
//! user intent and catalog refresh is applied in arrival order, one at a
//! time; after each event the new [`AppSnapshot`] is published on a
//! `watch` channel for the presentation layer.

use std::sync::Arc;

use quill_core::catalog::{CatalogProvider, CatalogSnapshot, Tool, ToolCategory, query};
use quill_core::history::{AttachedFile, NewChat};
use quill_core::state::AppController;
use quill_core::workflow::{
    ActivationDecision, ActivationResponse, ConfirmationPrompt, RenameOutcome,
};
use quill_core::{AppSnapshot, View};
use tokio::sync::{mpsc, watch};

/// Everything the user can ask the application to do.
#[derive(Debug, Clone, PartialEq)]
pub enum UserIntent {
    Navigate(View),
    /// Navigation by view name; unknown names fall back leniently.
    NavigateByName(String),
    ChangeSearch(String),
    ToggleSidePanel,
    CloseSidePanel,
    OpenProjectModal,
    CloseProjectModal,
    ToggleTheme,
    ToggleFavorite(String),
    /// Activates a catalog tool by id.
    ActivateTool(String),
    RespondToActivation(ActivationResponse),
    SetSkipActivation { tool_id: String, skip: bool },
    AnswerQuestion {
        text: String,
        file: Option<AttachedFile>,
    },
    AssignSessionProject(Option<String>),
    SaveSession,
    CreateProject {
        name: String,
        tags: Vec<ToolCategory>,
    },
    SaveChat(NewChat),
    ClearHistory,
    DeleteProject(String),
    DeleteChat(String),
    RequestRenameProject(String),
    RequestRenameChat(String),
    CancelRename,
    CommitRename(String),
}

/// Inputs of the loop.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    Intent(UserIntent),
    CatalogRefreshed(CatalogSnapshot),
}

/// What a dispatched intent did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Applied,
    /// A project or chat was created with this id.
    Created(String),
    /// The activation prompt is now showing.
    Prompted,
    /// The intent did not apply to the current state.
    Ignored,
    /// The input was refused; the state is unchanged.
    Rejected(String),
}

pub struct AppRuntime {
    controller: AppController,
    catalog: CatalogSnapshot,
    provider: Arc<dyn CatalogProvider>,
    prompt: Arc<dyn ConfirmationPrompt + Send + Sync>,
}

impl AppRuntime {
    pub fn new(
        controller: AppController,
        catalog: CatalogSnapshot,
        provider: Arc<dyn CatalogProvider>,
        prompt: Arc<dyn ConfirmationPrompt + Send + Sync>,
    ) -> Self {
        Self {
            controller,
            catalog,
            provider,
            prompt,
        }
    }

    pub fn controller(&self) -> &AppController {
        &self.controller
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    pub fn snapshot(&self) -> AppSnapshot {
        self.controller.snapshot()
    }

    /// Tools listed by the current view.
    pub fn visible_tools(&self) -> Vec<&Tool> {
        let state = self.controller.state();
        query::tools_for_view(&self.catalog, state.current_view(), state.search_term())
    }

    pub fn favorite_tools(&self) -> Vec<&Tool> {
        query::resolve(&self.catalog, self.controller.state().favorites().ids())
    }

    pub fn recent_tools(&self) -> Vec<&Tool> {
        query::resolve(&self.catalog, self.controller.state().recents().ids())
    }

    pub fn featured_tools(&self) -> Vec<&Tool> {
        query::featured_tools(&self.catalog)
    }

    /// Replaces the catalog snapshot.
    pub fn catalog_refreshed(&mut self, snapshot: CatalogSnapshot) {
        tracing::debug!(
            "Catalog refreshed: {} tools, {} categories",
            snapshot.tools.len(),
            snapshot.categories.len()
        );
        self.catalog = snapshot;
    }

    /// Fetches the catalog again. On failure the previous snapshot is kept.
    pub async fn refresh_catalog(&mut self) -> bool {
        match self.provider.snapshot().await {
            Ok(snapshot) => {
                self.catalog_refreshed(snapshot);
                true
            }
            Err(e) => {
                tracing::warn!("Catalog refresh failed, keeping previous snapshot: {}", e);
                false
            }
        }
    }

    /// Applies one intent to the controller.
    pub fn dispatch(&mut self, intent: UserIntent) -> IntentOutcome {
        tracing::debug!("Dispatching {:?}", intent);
        let controller = &mut self.controller;

        match intent {
            UserIntent::Navigate(view) => controller.navigate(view),
            UserIntent::NavigateByName(name) => controller.navigate(View::parse_lenient(&name)),
            UserIntent::ChangeSearch(text) => controller.change_search(&text),
            UserIntent::ToggleSidePanel => controller.toggle_side_panel(),
            UserIntent::CloseSidePanel => controller.close_side_panel(),
            UserIntent::OpenProjectModal => controller.open_project_modal(),
            UserIntent::CloseProjectModal => controller.close_project_modal(),
            UserIntent::ToggleTheme => {
                controller.toggle_theme();
            }
            UserIntent::ToggleFavorite(tool_id) => {
                controller.toggle_favorite(&tool_id);
            }
            UserIntent::ActivateTool(tool_id) => {
                let Some(tool) = self.catalog.tool(&tool_id).filter(|t| t.active).cloned() else {
                    tracing::warn!("Activation requested for unknown tool '{}'", tool_id);
                    return IntentOutcome::Ignored;
                };
                return match controller.request_tool_activation(tool) {
                    ActivationDecision::StartImmediately => IntentOutcome::Applied,
                    ActivationDecision::Prompt => IntentOutcome::Prompted,
                };
            }
            UserIntent::RespondToActivation(response) => {
                let pending = controller.pending_activation().is_some();
                controller.respond_to_activation(response);
                if !pending {
                    return IntentOutcome::Ignored;
                }
            }
            UserIntent::SetSkipActivation { tool_id, skip } => {
                controller.set_skip_activation(&tool_id, skip)
            }
            UserIntent::AnswerQuestion { text, file } => {
                if let Err(e) = controller.answer_current_question(&text, file) {
                    return IntentOutcome::Rejected(e.to_string());
                }
            }
            UserIntent::AssignSessionProject(project_id) => {
                controller.assign_session_project(project_id)
            }
            UserIntent::SaveSession => {
                return match controller.save_active_session() {
                    Some(id) => IntentOutcome::Created(id),
                    None => IntentOutcome::Ignored,
                };
            }
            UserIntent::CreateProject { name, tags } => {
                return IntentOutcome::Created(controller.create_project(&name, tags));
            }
            UserIntent::SaveChat(chat) => {
                return IntentOutcome::Created(controller.save_chat(chat));
            }
            UserIntent::ClearHistory => controller.clear_history(),
            UserIntent::DeleteProject(id) => {
                if !controller.delete_project(&id, self.prompt.as_ref()) {
                    return IntentOutcome::Ignored;
                }
            }
            UserIntent::DeleteChat(id) => {
                if !controller.delete_chat(&id, self.prompt.as_ref()) {
                    return IntentOutcome::Ignored;
                }
            }
            UserIntent::RequestRenameProject(id) => {
                if !controller.request_rename_project(&id) {
                    return IntentOutcome::Ignored;
                }
            }
            UserIntent::RequestRenameChat(id) => {
                if !controller.request_rename_chat(&id) {
                    return IntentOutcome::Ignored;
                }
            }
            UserIntent::CancelRename => controller.cancel_rename(),
            UserIntent::CommitRename(name) => {
                return match controller.rename(&name) {
                    RenameOutcome::Committed { .. } => IntentOutcome::Applied,
                    RenameOutcome::Rejected => {
                        IntentOutcome::Rejected("Name cannot be empty".to_string())
                    }
                    RenameOutcome::Idle => IntentOutcome::Ignored,
                };
            }
        }
        IntentOutcome::Applied
    }

    pub fn handle(&mut self, event: RuntimeEvent) -> Option<IntentOutcome> {
        match event {
            RuntimeEvent::Intent(intent) => Some(self.dispatch(intent)),
            RuntimeEvent::CatalogRefreshed(snapshot) => {
                self.catalog_refreshed(snapshot);
                None
            }
        }
    }

    /// Runs until every event sender is dropped, publishing a snapshot after
    /// each event. Returns the runtime for inspection.
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<RuntimeEvent>,
        snapshots: watch::Sender<AppSnapshot>,
    ) -> Self {
        snapshots.send_replace(self.snapshot());
        while let Some(event) = events.recv().await {
            if let Some(IntentOutcome::Rejected(reason)) = self.handle(event) {
                tracing::debug!("Intent rejected: {}", reason);
            }
            snapshots.send_replace(self.snapshot());
        }
        tracing::debug!("Event channel closed, runtime stopping");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::catalog::{QuestionKind, ToolQuestion};
    use quill_core::config::AppConfig;
    use quill_core::preference::{SkipActivationRepository, StoreSkipActivationRepository};
    use quill_core::state::HeadlessDisplay;
    use quill_core::view::Layout;
    use quill_core::workflow::{AlwaysAnswer, RenameState};
    use quill_infrastructure::{InMemoryPreferenceStore, StaticCatalogProvider};

    fn catalog() -> CatalogSnapshot {
        let hso = Tool::new("hso", "Hook Story Offer", ToolCategory::AdCopy, "Write ads")
            .with_question(ToolQuestion {
                id: "product".to_string(),
                label: "What are you selling?".to_string(),
                kind: QuestionKind::Input,
                placeholder: None,
                required: true,
                order: 1,
                options: Vec::new(),
            });
        let mut tales = Tool::new(
            "money-tales",
            "Money Tales",
            ToolCategory::EmailCopy,
            "Emails",
        );
        tales.featured = true;
        CatalogSnapshot {
            tools: vec![hso, tales],
            categories: Vec::new(),
        }
    }

    fn activate(tool_id: &str) -> UserIntent {
        UserIntent::ActivateTool(tool_id.to_string())
    }

    fn commit(name: &str) -> UserIntent {
        UserIntent::CommitRename(name.to_string())
    }

    fn open(view_name: &str) -> UserIntent {
        UserIntent::NavigateByName(view_name.to_string())
    }

    fn favorite(tool_id: &str) -> UserIntent {
        UserIntent::ToggleFavorite(tool_id.to_string())
    }

    fn ids(tools: Vec<&Tool>) -> Vec<&str> {
        tools.into_iter().map(|t| t.id.as_str()).collect()
    }

    fn runtime_with(confirm: bool) -> (AppRuntime, Arc<StoreSkipActivationRepository>) {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let repo = Arc::new(StoreSkipActivationRepository::new(store));
        let controller = AppController::new(
            &AppConfig::default(),
            repo.clone(),
            Arc::new(HeadlessDisplay),
        );
        let runtime = AppRuntime::new(
            controller,
            catalog(),
            Arc::new(StaticCatalogProvider::new(catalog())),
            Arc::new(AlwaysAnswer(confirm)),
        );
        (runtime, repo)
    }

    #[test]
    fn test_activation_prompt_then_skip() {
        let (mut runtime, repo) = runtime_with(true);

        assert_eq!(runtime.dispatch(activate("hso")), IntentOutcome::Prompted);
        assert_eq!(
            runtime.snapshot().tool_for_activation.map(|t| t.id),
            Some("hso".to_string())
        );

        let respond = UserIntent::RespondToActivation(ActivationResponse::StartAndSkipFuture);
        runtime.dispatch(respond);
        assert_eq!(
            runtime.controller().state().current_view(),
            View::ToolInterface
        );
        assert!(repo.load().contains("hso"));

        runtime.dispatch(UserIntent::Navigate(View::Dashboard));
        assert_eq!(runtime.dispatch(activate("hso")), IntentOutcome::Applied);
        assert!(runtime.snapshot().tool_for_activation.is_none());
    }

    #[test]
    fn test_unknown_tool_is_ignored() {
        let (mut runtime, _) = runtime_with(true);
        assert_eq!(runtime.dispatch(activate("nope")), IntentOutcome::Ignored);
        let respond = UserIntent::RespondToActivation(ActivationResponse::Start);
        assert_eq!(runtime.dispatch(respond), IntentOutcome::Ignored);
    }

    #[test]
    fn test_guided_session_saved_to_project() {
        let (mut runtime, _) = runtime_with(true);
        let IntentOutcome::Created(project_id) = runtime.dispatch(UserIntent::CreateProject {
            name: "Launch".to_string(),
            tags: vec![ToolCategory::AdCopy],
        }) else {
            panic!("project not created");
        };

        runtime.dispatch(UserIntent::SetSkipActivation {
            tool_id: "hso".to_string(),
            skip: true,
        });
        runtime.dispatch(activate("hso"));

        let blank = UserIntent::AnswerQuestion {
            text: " ".to_string(),
            file: None,
        };
        let outcome = runtime.dispatch(blank);
        assert!(matches!(outcome, IntentOutcome::Rejected(_)));
        runtime.dispatch(UserIntent::AnswerQuestion {
            text: "A course".to_string(),
            file: None,
        });
        let assign = UserIntent::AssignSessionProject(Some(project_id.clone()));
        runtime.dispatch(assign);

        let IntentOutcome::Created(chat_id) = runtime.dispatch(UserIntent::SaveSession) else {
            panic!("chat not saved");
        };
        let chat = runtime.controller().state().chat(&chat_id).unwrap();
        assert_eq!(chat.project_id.as_deref(), Some(project_id.as_str()));
        assert_eq!(runtime.controller().state().current_view(), View::Dashboard);
        assert_eq!(
            runtime.dispatch(UserIntent::SaveSession),
            IntentOutcome::Ignored
        );
    }

    #[test]
    fn test_delete_respects_prompt() {
        let (mut runtime, _) = runtime_with(false);
        let IntentOutcome::Created(id) = runtime.dispatch(UserIntent::CreateProject {
            name: "Keep me".to_string(),
            tags: Vec::new(),
        }) else {
            panic!("project not created");
        };

        assert_eq!(
            runtime.dispatch(UserIntent::DeleteProject(id.clone())),
            IntentOutcome::Ignored
        );
        assert!(runtime.controller().state().project(&id).is_some());
    }

    #[test]
    fn test_rename_flow() {
        let (mut runtime, _) = runtime_with(true);
        let IntentOutcome::Created(id) = runtime.dispatch(UserIntent::CreateProject {
            name: "Old".to_string(),
            tags: Vec::new(),
        }) else {
            panic!("project not created");
        };

        let request = UserIntent::RequestRenameProject(id.clone());
        runtime.dispatch(request);
        assert!(matches!(runtime.snapshot().rename, RenameState::Pending(_)));
        let outcome = runtime.dispatch(commit("   "));
        assert!(matches!(outcome, IntentOutcome::Rejected(_)));
        assert_eq!(runtime.dispatch(commit("New")), IntentOutcome::Applied);
        let project = runtime.controller().state().project(&id).unwrap();
        assert_eq!(project.name, "New");
        assert_eq!(runtime.dispatch(commit("Again")), IntentOutcome::Ignored);
    }

    #[test]
    fn test_visible_tools_follow_view_and_search() {
        let (mut runtime, _) = runtime_with(true);
        assert!(runtime.visible_tools().is_empty());

        let search = UserIntent::ChangeSearch("money".to_string());
        runtime.dispatch(search);
        assert_eq!(ids(runtime.visible_tools()), vec!["money-tales"]);

        runtime.dispatch(open("ad-copy-view"));
        assert_eq!(ids(runtime.visible_tools()), vec!["hso"]);

        runtime.dispatch(open("admin-unknown"));
        assert_eq!(runtime.snapshot().route.layout, Layout::Admin);
    }

    #[test]
    fn test_favorites_resolve_against_catalog() {
        let (mut runtime, _) = runtime_with(true);
        runtime.dispatch(favorite("money-tales"));
        runtime.dispatch(favorite("retired"));

        assert_eq!(ids(runtime.favorite_tools()), vec!["money-tales"]);
        assert_eq!(runtime.featured_tools().len(), 1);
    }

    #[tokio::test]
    async fn test_run_applies_events_in_order() {
        let (runtime, _) = runtime_with(true);
        let (tx, rx) = mpsc::unbounded_channel();
        let (snap_tx, snap_rx) = watch::channel(runtime.snapshot());

        for event in [
            RuntimeEvent::CatalogRefreshed(CatalogSnapshot::default()),
            RuntimeEvent::Intent(UserIntent::ToggleSidePanel),
            RuntimeEvent::Intent(UserIntent::ChangeSearch("hook".to_string())),
        ] {
            tx.send(event).unwrap();
        }
        drop(tx);

        let runtime = runtime.run(rx, snap_tx).await;

        assert!(runtime.catalog().is_empty());
        let last = snap_rx.borrow().clone();
        assert_eq!(last.search_term, "hook");
        assert_eq!(last.route.view, View::AllTools);
        assert!(last.side_panel_open);
    }

    #[tokio::test]
    async fn test_refresh_catalog_from_provider() {
        let (mut runtime, _) = runtime_with(true);
        runtime.catalog_refreshed(CatalogSnapshot::default());
        assert!(runtime.refresh_catalog().await);
        assert_eq!(runtime.catalog().tools.len(), 2);
    }
}
