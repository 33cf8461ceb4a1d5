//! Tool activation gate.
//!
//! Before a tool session starts the user sees an activation prompt, unless
//! the tool is on the skip-list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Tool;

/// What to do with an activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationDecision {
    StartImmediately,
    Prompt,
}

/// The user's answer to an activation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivationResponse {
    Start,
    Cancel,
    /// Start now and never prompt for this tool again.
    StartAndSkipFuture,
}

impl ActivationResponse {
    pub fn starts_session(self) -> bool {
        matches!(self, Self::Start | Self::StartAndSkipFuture)
    }
}

pub fn decide(skip_list: &BTreeSet<String>, tool: &Tool) -> ActivationDecision {
    if skip_list.contains(&tool.id) {
        ActivationDecision::StartImmediately
    } else {
        ActivationDecision::Prompt
    }
}

/// Holds the one tool whose activation prompt is showing, if any.
#[derive(Debug, Clone, Default)]
pub struct ActivationGate {
    pending: Option<Tool>,
}

impl ActivationGate {
    pub fn pending(&self) -> Option<&Tool> {
        self.pending.as_ref()
    }

    /// Shows the prompt for `tool`, replacing a previous one.
    pub fn open(&mut self, tool: Tool) {
        self.pending = Some(tool);
    }

    /// Dismisses the prompt, handing back the tool it carried.
    pub fn take(&mut self) -> Option<Tool> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolCategory;

    #[test]
    fn test_decide() {
        let tool = Tool::new("hso", "HSO", ToolCategory::AdCopy, "");
        let mut skip = BTreeSet::new();
        assert_eq!(decide(&skip, &tool), ActivationDecision::Prompt);

        skip.insert("hso".to_string());
        assert_eq!(decide(&skip, &tool), ActivationDecision::StartImmediately);
    }

    #[test]
    fn test_gate_holds_one_tool() {
        let mut gate = ActivationGate::default();
        gate.open(Tool::new("a", "A", ToolCategory::AdCopy, ""));
        gate.open(Tool::new("b", "B", ToolCategory::AdCopy, ""));
        assert_eq!(gate.pending().map(|t| t.id.as_str()), Some("b"));

        assert_eq!(gate.take().map(|t| t.id), Some("b".to_string()));
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_response_starts_session() {
        assert!(ActivationResponse::Start.starts_session());
        assert!(ActivationResponse::StartAndSkipFuture.starts_session());
        assert!(!ActivationResponse::Cancel.starts_session());
    }
}
