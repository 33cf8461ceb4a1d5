//! Catalog domain models.
//!
//! Tools and categories are owned by the administrative side of the product;
//! the application only reads them.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::view::View;

/// The fixed set of tool categories.
///
/// Each category has exactly one browsing view (see [`ToolCategory::view`]).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolCategory {
    AdCopy,
    ClientManagement,
    CopyImprovement,
    EmailCopy,
    LongForm,
    OtherFlows,
    PodcastTools,
    SalesFunnelCopy,
}

impl ToolCategory {
    /// Returns the view that lists the tools of this category.
    pub fn view(self) -> View {
        match self {
            ToolCategory::AdCopy => View::AdCopy,
            ToolCategory::ClientManagement => View::ClientManagement,
            ToolCategory::CopyImprovement => View::CopyImprovement,
            ToolCategory::EmailCopy => View::EmailCopy,
            ToolCategory::LongForm => View::LongForm,
            ToolCategory::OtherFlows => View::OtherFlows,
            ToolCategory::PodcastTools => View::PodcastTools,
            ToolCategory::SalesFunnelCopy => View::SalesFunnelCopy,
        }
    }
}

/// Input widget used to collect the answer to a tool question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Input,
    Textarea,
    Select,
}

/// A single step of a tool's guided conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolQuestion {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub order: u32,
    /// Allowed answers, only meaningful for [`QuestionKind::Select`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Reference to a knowledge-base document attached to a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseFile {
    pub name: String,
    pub url: String,
    /// Size in bytes
    pub size: u64,
}

/// A catalog entry describing a guided AI-assisted workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub title: String,
    pub category: ToolCategory,
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub featured: bool,
    /// Model identifier used for generation.
    #[serde(default)]
    pub primary_model: String,
    /// Models tried in order when the primary model is unavailable.
    #[serde(default)]
    pub fallback_models: Vec<String>,
    #[serde(default)]
    pub prompt_instructions: String,
    #[serde(default)]
    pub questions: Vec<ToolQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base_file: Option<KnowledgeBaseFile>,
}

fn default_active() -> bool {
    true
}

impl Tool {
    /// Creates an active, non-featured tool with no questions.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: ToolCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            description: description.into(),
            active: true,
            featured: false,
            primary_model: String::new(),
            fallback_models: Vec::new(),
            prompt_instructions: String::new(),
            questions: Vec::new(),
            knowledge_base_file: None,
        }
    }

    /// Adds a question to the tool.
    pub fn with_question(mut self, question: ToolQuestion) -> Self {
        self.questions.push(question);
        self
    }

    /// Returns the questions sorted by their `order` field.
    ///
    /// The sort is stable, so questions sharing an order keep their
    /// declaration order.
    pub fn ordered_questions(&self) -> Vec<&ToolQuestion> {
        let mut questions: Vec<&ToolQuestion> = self.questions.iter().collect();
        questions.sort_by_key(|q| q.order);
        questions
    }
}

/// A category record as managed by the administrative catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Category {
    /// Maps the category name onto one of the fixed [`ToolCategory`] values.
    ///
    /// Returns `None` for names outside the fixed set.
    pub fn tool_category(&self) -> Option<ToolCategory> {
        self.name.parse().ok()
    }
}
