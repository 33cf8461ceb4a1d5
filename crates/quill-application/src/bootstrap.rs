//! Composition root.
//!
//! Wires configuration, preference storage, the catalog provider and the
//! controller into a ready [`AppRuntime`].

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use quill_core::catalog::{CatalogProvider, CatalogSnapshot};
use quill_core::config::AppConfig;
use quill_core::preference::{PreferenceStore, StoreSkipActivationRepository};
use quill_core::state::{AppController, DisplayContext};
use quill_core::workflow::ConfirmationPrompt;
use quill_infrastructure::{
    ConfigService, InMemoryPreferenceStore, JsonCatalogProvider, JsonFilePreferenceStore,
    QuillPaths, ServiceType, StaticCatalogProvider,
};
use tracing_appender::non_blocking::WorkerGuard;

use crate::logging;
use crate::runtime::AppRuntime;

/// Startup options.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Root for every Quill file instead of the platform directories.
    pub base_dir: Option<PathBuf>,
    /// Keep preferences in memory only.
    pub ephemeral_preferences: bool,
    /// Install the global tracing subscriber.
    pub init_logging: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            base_dir: None,
            ephemeral_preferences: false,
            init_logging: true,
        }
    }
}

pub struct AppBootstrap {
    pub runtime: AppRuntime,
    pub config: AppConfig,
    pub paths: QuillPaths,
    /// Held so the file log is flushed on drop.
    pub log_guard: Option<WorkerGuard>,
}

impl AppBootstrap {
    pub async fn initialize(
        options: BootstrapOptions,
        display: Arc<dyn DisplayContext>,
        prompt: Arc<dyn ConfirmationPrompt + Send + Sync>,
    ) -> Result<Self> {
        let paths = QuillPaths::new(options.base_dir.clone());

        let config_service = ConfigService::new(&paths).context("Invalid config path")?;
        let config = config_service.get_config();

        let log_guard = if options.init_logging {
            let logs_dir = paths
                .get_path(ServiceType::Logs)
                .context("Failed to resolve logs directory")?;
            logging::init(&config, &logs_dir)?
        } else {
            None
        };
        tracing::info!("[Bootstrap] Starting Quill");

        let store: Arc<dyn PreferenceStore> = if options.ephemeral_preferences {
            Arc::new(InMemoryPreferenceStore::new())
        } else {
            let store = JsonFilePreferenceStore::new(&paths)
                .context("Failed to resolve preferences path")?;
            tracing::info!("[Bootstrap] Preferences at {:?}", store.path());
            Arc::new(store)
        };
        let skip_repository = Arc::new(StoreSkipActivationRepository::new(store));

        let provider = catalog_provider(&config, &paths)?;
        let catalog = load_catalog(provider.as_ref()).await;

        let controller = AppController::new(&config, skip_repository, display);
        let runtime = AppRuntime::new(controller, catalog, provider, prompt);

        tracing::info!("[Bootstrap] Ready");
        Ok(Self {
            runtime,
            config,
            paths,
            log_guard,
        })
    }
}

/// Picks the configured catalog file, then the default one, then an empty
/// in-memory catalog.
fn catalog_provider(config: &AppConfig, paths: &QuillPaths) -> Result<Arc<dyn CatalogProvider>> {
    if let Some(path) = &config.catalog_path {
        return Ok(Arc::new(JsonCatalogProvider::new(path)));
    }

    let default_path = paths
        .get_path(ServiceType::Catalog)
        .context("Failed to resolve catalog path")?;
    if default_path.exists() {
        return Ok(Arc::new(JsonCatalogProvider::new(default_path)));
    }

    tracing::info!("[Bootstrap] No catalog file, starting empty");
    Ok(Arc::new(StaticCatalogProvider::default()))
}

/// A failed fetch leaves the catalog in its loading (empty) state.
async fn load_catalog(provider: &dyn CatalogProvider) -> CatalogSnapshot {
    match provider.snapshot().await {
        Ok(snapshot) => {
            tracing::info!(
                "[Bootstrap] Catalog loaded: {} tools, {} categories",
                snapshot.tools.len(),
                snapshot.categories.len()
            );
            snapshot
        }
        Err(e) => {
            tracing::warn!("[Bootstrap] Catalog unavailable, continuing empty: {}", e);
            CatalogSnapshot::default()
        }
    }
}
