//! Storage and configuration adapters for Quill.

pub mod catalog_repository;
pub mod config_service;
pub mod paths;
pub mod preference_store;

pub use crate::catalog_repository::{JsonCatalogProvider, StaticCatalogProvider};
pub use crate::config_service::ConfigService;
pub use crate::paths::{PathError, QuillPaths, ServiceType};
pub use crate::preference_store::{InMemoryPreferenceStore, JsonFilePreferenceStore};
