//! Tool session module.

mod tool_session;

pub use tool_session::{AnswerError, ToolSession};
