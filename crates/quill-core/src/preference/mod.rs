//! Persisted preference module.
//!
//! - `store`: the opaque key-value [`PreferenceStore`]
//! - `skip_activation`: typed repository for the activation skip-list

mod skip_activation;
mod store;

pub use skip_activation::{
    SKIP_ACTIVATION_KEY, SkipActivationRepository, StoreSkipActivationRepository,
};
pub use store::PreferenceStore;
