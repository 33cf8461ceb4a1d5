//! User-facing workflows driven by the controller.
//!
//! - `rename`: confirm-then-mutate rename of projects and chats
//! - `confirm`: yes/no prompt used before deletes
//! - `activation`: the activation gate in front of tool sessions

pub mod activation;
pub mod confirm;
pub mod rename;

pub use activation::{ActivationDecision, ActivationGate, ActivationResponse};
pub use confirm::{AlwaysAnswer, ConfirmationPrompt};
pub use rename::{EntityKind, RenameOutcome, RenameState, RenameTarget, RenameWorkflow};
