//! Guided, question-by-question tool session.
//!
//! A session walks the tool's questions in order, records one answer per
//! question and keeps the transcript that is later saved to history.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{QuestionKind, Tool, ToolQuestion};
use crate::history::{AttachedFile, Message, NewChat, Sender};

/// Why an answer was not accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("'{label}' requires an answer")]
    Blank { label: String },

    #[error("'{answer}' is not one of the options for '{label}'")]
    NotAnOption { label: String, answer: String },

    #[error("All questions have already been answered")]
    Complete,

    #[error("No tool session is active")]
    NoActiveSession,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSession {
    tool_id: String,
    tool_title: String,
    questions: Vec<ToolQuestion>,
    answers: Vec<String>,
    messages: Vec<Message>,
    project_id: Option<String>,
    started_at: i64,
}

impl ToolSession {
    /// Starts a session and asks the first question.
    pub fn start(tool: &Tool) -> Self {
        let questions: Vec<ToolQuestion> = tool.ordered_questions().into_iter().cloned().collect();

        let mut session = Self {
            tool_id: tool.id.clone(),
            tool_title: tool.title.clone(),
            questions,
            answers: Vec::new(),
            messages: vec![Message::new(
                Sender::System,
                format!("Starting {}.", tool.title),
            )],
            project_id: None,
            started_at: chrono::Utc::now().timestamp_millis(),
        };
        session.ask_next();
        session
    }

    pub fn tool_id(&self) -> &str {
        &self.tool_id
    }

    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    pub fn current_question(&self) -> Option<&ToolQuestion> {
        self.questions.get(self.answers.len())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Files the eventual chat under a project, or under none.
    pub fn set_project(&mut self, project_id: Option<String>) {
        self.project_id = project_id;
    }

    /// Records the answer to the current question and moves on.
    pub fn answer(&mut self, text: &str, file: Option<AttachedFile>) -> Result<(), AnswerError> {
        let question = self.current_question().ok_or(AnswerError::Complete)?;
        let answer = text.trim();

        if answer.is_empty() && question.required {
            return Err(AnswerError::Blank {
                label: question.label.clone(),
            });
        }
        if question.kind == QuestionKind::Select
            && !answer.is_empty()
            && !question.options.iter().any(|o| o == answer)
        {
            return Err(AnswerError::NotAnOption {
                label: question.label.clone(),
                answer: answer.to_string(),
            });
        }

        let mut message = Message::new(Sender::User, answer);
        message.file = file;
        self.messages.push(message);
        self.answers.push(answer.to_string());

        self.ask_next();
        Ok(())
    }

    /// Converts the transcript into a chat ready to be saved.
    pub fn into_chat(self) -> NewChat {
        NewChat {
            tool_id: self.tool_id,
            tool_title: self.tool_title,
            messages: self.messages,
            timestamp: self.started_at,
            project_id: self.project_id,
        }
    }

    fn ask_next(&mut self) {
        let next = match self.current_question() {
            Some(question) => question.label.clone(),
            None => self.summary(),
        };
        self.messages.push(Message::new(Sender::Assistant, next));
    }

    fn summary(&self) -> String {
        if self.questions.is_empty() {
            return format!("{} is ready.", self.tool_title);
        }
        let mut summary = format!("Here is what I have for {}:", self.tool_title);
        for (question, answer) in self.questions.iter().zip(&self.answers) {
            let line = format!("\n- {}: {}", question.label, answer);
            summary.push_str(&line);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolCategory;

    fn question(id: &str, order: u32, kind: QuestionKind, required: bool) -> ToolQuestion {
        ToolQuestion {
            id: id.to_string(),
            label: format!("{id}?"),
            kind,
            placeholder: None,
            required,
            order,
            options: if kind == QuestionKind::Select {
                vec!["casual".to_string(), "formal".to_string()]
            } else {
                Vec::new()
            },
        }
    }

    fn tool() -> Tool {
        Tool::new("hso", "Hook Story Offer", ToolCategory::AdCopy, "")
            .with_question(question("tone", 2, QuestionKind::Select, false))
            .with_question(question("product", 1, QuestionKind::Input, true))
    }

    #[test]
    fn test_questions_are_asked_in_order() {
        let session = ToolSession::start(&tool());
        let current = session.current_question().map(|q| q.id.as_str());
        assert_eq!(current, Some("product"));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].sender, Sender::System);
        assert_eq!(session.messages()[1].text, "product?");
    }

    #[test]
    fn test_required_question_rejects_blank() {
        let mut session = ToolSession::start(&tool());
        assert_eq!(
            session.answer("  ", None),
            Err(AnswerError::Blank {
                label: "product?".to_string()
            })
        );
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_select_question_checks_options() {
        let mut session = ToolSession::start(&tool());
        session.answer("Course", None).unwrap();

        assert!(matches!(
            session.answer("shouty", None),
            Err(AnswerError::NotAnOption { .. })
        ));
        session.answer("casual", None).unwrap();

        assert!(session.is_complete());
        assert_eq!(session.answers(), &["Course", "casual"].map(String::from));
        assert_eq!(session.answer("more", None), Err(AnswerError::Complete));
    }

    #[test]
    fn test_into_chat_keeps_transcript_and_project() {
        let mut session = ToolSession::start(&tool());
        session.set_project(Some("proj-1".to_string()));
        session.answer("Course", None).unwrap();
        session.answer("", None).unwrap();

        let chat = session.into_chat();
        assert_eq!(chat.tool_id, "hso");
        assert_eq!(chat.project_id.as_deref(), Some("proj-1"));
        // system, q1, a1, q2, a2, summary
        assert_eq!(chat.messages.len(), 6);
        let summary = &chat.messages[5];
        assert_eq!(summary.sender, Sender::Assistant);
        assert!(summary.text.contains("- product?: Course"));
    }

    #[test]
    fn test_tool_without_questions_is_complete_immediately() {
        let tool = Tool::new("free", "Freestyle", ToolCategory::OtherFlows, "");
        let session = ToolSession::start(&tool);
        assert!(session.is_complete());
        assert_eq!(session.messages()[1].text, "Freestyle is ready.");
    }
}
