//! Project domain module.

mod model;

pub use model::{Project, UNTITLED_PROJECT_NAME};
