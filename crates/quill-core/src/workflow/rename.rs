//! Rename workflow shared by projects and saved chats.
//!
//! ```text
//! Idle --request--> Pending(target)
//! Pending --cancel--> Idle
//! Pending --commit(non-blank)--> Idle   (entity renamed)
//! Pending --commit(blank)--> Pending    (rejected, prompt stays open)
//! ```

use serde::{Deserialize, Serialize};

/// Kind of entity a rename applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Project,
    Chat,
}

/// The entity being renamed, with its name at the time of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameTarget {
    pub id: String,
    pub current_name: String,
    pub kind: EntityKind,
}

/// Workflow state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "target")]
pub enum RenameState {
    #[default]
    Idle,
    Pending(RenameTarget),
}

/// Result of submitting a new name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The name was accepted; the caller applies it to `target`.
    Committed {
        target: RenameTarget,
        new_name: String,
    },
    /// Blank submission. The workflow is still pending.
    Rejected,
    /// Nothing was pending.
    Idle,
}

#[derive(Debug, Clone, Default)]
pub struct RenameWorkflow {
    state: RenameState,
}

impl RenameWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RenameState {
        &self.state
    }

    pub fn pending(&self) -> Option<&RenameTarget> {
        match &self.state {
            RenameState::Pending(target) => Some(target),
            RenameState::Idle => None,
        }
    }

    /// Opens the prompt for `target`, silently replacing any pending one.
    pub fn request(&mut self, target: RenameTarget) {
        if let Some(previous) = self.pending() {
            tracing::debug!(
                "Replacing pending rename of {:?} '{}'",
                previous.kind,
                previous.id
            );
        }
        self.state = RenameState::Pending(target);
    }

    pub fn cancel(&mut self) {
        self.state = RenameState::Idle;
    }

    /// Submits a name. Accepted names are trimmed.
    pub fn commit(&mut self, new_name: &str) -> RenameOutcome {
        if self.pending().is_none() {
            return RenameOutcome::Idle;
        }

        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return RenameOutcome::Rejected;
        }

        match std::mem::take(&mut self.state) {
            RenameState::Pending(target) => RenameOutcome::Committed {
                target,
                new_name: trimmed.to_string(),
            },
            RenameState::Idle => RenameOutcome::Idle,
        }
    }
}
