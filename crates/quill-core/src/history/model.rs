//! Chat history domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    #[serde(alias = "ai")]
    Assistant,
    /// System-generated message.
    System,
}

/// A file attached to a message. Only its descriptor is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// A single message in a saved chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<AttachedFile>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            file: None,
        }
    }

    pub fn with_file(mut self, file: AttachedFile) -> Self {
        self.file = Some(file);
        self
    }
}

/// A chat about to be saved; the controller assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChat {
    pub tool_id: String,
    pub tool_title: String,
    pub messages: Vec<Message>,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl NewChat {
    /// Starts an empty chat for a tool, stamped with the current time.
    pub fn for_tool(tool_id: impl Into<String>, tool_title: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            tool_title: tool_title.into(),
            messages: Vec::new(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            project_id: None,
        }
    }
}

/// A saved record of a tool session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryItem {
    pub id: String,
    pub tool_id: String,
    /// Display title; starts as the tool title and is what rename edits.
    pub tool_title: String,
    pub messages: Vec<Message>,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl ChatHistoryItem {
    /// Assigns a fresh id to a pending chat.
    pub fn from_new(chat: NewChat) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tool_id: chat.tool_id,
            tool_title: chat.tool_title,
            messages: chat.messages,
            timestamp: chat.timestamp,
            project_id: chat.project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_assigns_fresh_ids() {
        let chat = NewChat::for_tool("hso", "Hook Story Offer");
        let a = ChatHistoryItem::from_new(chat.clone());
        let b = ChatHistoryItem::from_new(chat);
        assert_ne!(a.id, b.id);
        assert_eq!(a.tool_title, "Hook Story Offer");
        assert!(a.timestamp > 0);
    }

    #[test]
    fn test_legacy_ai_sender_is_accepted() {
        let message: Message =
            serde_json::from_str(r#"{"id":"1","text":"hi","sender":"ai"}"#).unwrap();
        assert_eq!(message.sender, Sender::Assistant);
        assert!(message.file.is_none());
    }

    #[test]
    fn test_message_with_file() {
        let file = AttachedFile {
            name: "brief.pdf".to_string(),
            size: 2048,
        };
        let message = Message::new(Sender::User, "brief").with_file(file);
        assert_eq!(message.file.as_ref().map(|f| f.size), Some(2048));
    }
}
