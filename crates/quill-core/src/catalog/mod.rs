//! Catalog domain module.
//!
//! - `model`: tools, questions and categories
//! - `provider`: the asynchronous catalog source and its snapshot
//! - `query`: read-side selectors used by the browsing views

mod model;
mod provider;
pub mod query;

pub use model::{Category, KnowledgeBaseFile, QuestionKind, Tool, ToolCategory, ToolQuestion};
pub use provider::{CatalogProvider, CatalogSnapshot};
