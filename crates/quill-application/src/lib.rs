//! Application layer for Quill: startup wiring and the intent loop.

pub mod bootstrap;
pub mod logging;
pub mod runtime;

pub use crate::bootstrap::{AppBootstrap, BootstrapOptions};
pub use crate::runtime::{AppRuntime, IntentOutcome, RuntimeEvent, UserIntent};
