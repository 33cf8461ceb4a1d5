//! Navigation domain module.
//!
//! - `model`: the closed [`View`] enumeration
//! - `router`: layout and administrative screen selection

mod model;
pub mod router;

pub use model::View;
pub use router::{AdminScreen, Layout, Route};
