//! Chat history domain module.

mod model;

pub use model::{AttachedFile, ChatHistoryItem, Message, NewChat, Sender};
