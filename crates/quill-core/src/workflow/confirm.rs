//! Blocking yes/no confirmation used before destructive actions.

pub const DELETE_PROJECT_PROMPT: &str =
    "Are you sure you want to delete this project? This action cannot be undone.";
pub const DELETE_CHAT_PROMPT: &str =
    "Are you sure you want to delete this chat history? This action cannot be undone.";

/// Asks the user to confirm an action. `true` means go ahead.
pub trait ConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmationPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Fixed answer, for scripted flows and tests.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysAnswer(pub bool);

impl ConfirmationPrompt for AlwaysAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
