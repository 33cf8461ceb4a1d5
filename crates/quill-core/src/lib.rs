//! Core domain of Quill: the tool catalog model, navigation, workflows and
//! the application state controller.
//!
//! Nothing in this crate touches the disk or the network; storage and the
//! catalog source are reached through the traits in [`preference`] and
//! [`catalog`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod history;
pub mod preference;
pub mod project;
pub mod session;
pub mod state;
pub mod view;
pub mod workflow;

// Re-export common types
pub use error::{QuillError, Result};
pub use state::{AppController, AppSnapshot};
pub use view::View;
