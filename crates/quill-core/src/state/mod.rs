//! Session state module.
//!
//! - `model`: the [`AppState`] aggregate and its value types
//! - `controller`: [`AppController`], the only writer of the state
//! - `display`: the root display the theme is pushed to
//! - `snapshot`: the read-only copy handed to renderers

mod controller;
mod display;
mod model;
mod snapshot;

pub use controller::AppController;
pub use display::{DisplayContext, HeadlessDisplay};
pub use model::{AppState, Favorites, RECENTS_LIMIT, Recents, Theme};
pub use snapshot::AppSnapshot;
