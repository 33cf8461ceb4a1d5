//! Persistence of the "don't show again" activation skip-list.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::store::PreferenceStore;
use crate::error::Result;

/// Preference key holding the skip-list as a JSON array of tool ids.
pub const SKIP_ACTIVATION_KEY: &str = "dontShowAgainToolIds";

/// Repository for the set of tool ids that bypass the activation prompt.
pub trait SkipActivationRepository: Send + Sync {
    /// Loads the persisted set. Never fails: unreadable data is an empty set.
    fn load(&self) -> BTreeSet<String>;

    /// Overwrites the persisted set.
    fn save(&self, ids: &BTreeSet<String>) -> Result<()>;
}

/// [`SkipActivationRepository`] on top of a [`PreferenceStore`], JSON encoded.
#[derive(Clone)]
pub struct StoreSkipActivationRepository {
    store: Arc<dyn PreferenceStore>,
}

impl StoreSkipActivationRepository {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }
}

impl SkipActivationRepository for StoreSkipActivationRepository {
    fn load(&self) -> BTreeSet<String> {
        let raw = match self.store.get(SKIP_ACTIVATION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeSet::new(),
            Err(e) => {
                tracing::warn!("Failed to read skip-activation list: {}", e);
                return BTreeSet::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!("Malformed skip-activation list, using empty set: {}", e);
                BTreeSet::new()
            }
        }
    }

    fn save(&self, ids: &BTreeSet<String>) -> Result<()> {
        let list: Vec<&String> = ids.iter().collect();
        let encoded = serde_json::to_string(&list)?;
        self.store.set(SKIP_ACTIVATION_KEY, &encoded)
    }
}
