//! Key-value preference store trait.

use crate::error::Result;

/// Durable key-value storage for small UI preferences.
///
/// Values are opaque strings; encoding is the caller's business.
pub trait PreferenceStore: Send + Sync {
    /// Reads a value. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
