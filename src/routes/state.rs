use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::{
    config::Config,
    error::AppResult,
    services::{sources::CatalogSource, Catalog, LoadOptions},
};

/// Shared application state
///
/// The served catalog sits behind one pointer. Readers clone the `Arc` and
/// drop the lock straight away, so a reload swaps store and graph together.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<RwLock<Arc<Catalog>>>,
    source: Arc<dyn CatalogSource>,
    config: Arc<Config>,
    reload_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(catalog: Catalog, source: Arc<dyn CatalogSource>, config: Config) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
            source,
            config: Arc::new(config),
            reload_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Current catalog snapshot
    pub async fn catalog(&self) -> Arc<Catalog> {
        self.catalog.read().await.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rebuilds the catalog from its source and publishes it
    ///
    /// The previous snapshot keeps serving until the new one is complete
    /// and stays in place if the reload fails.
    pub async fn reload(&self) -> AppResult<Arc<Catalog>> {
        let _guard = self.reload_lock.lock().await;

        let fresh = Arc::new(
            Catalog::load(self.source.as_ref(), LoadOptions::from(self.config.as_ref())).await?,
        );
        *self.catalog.write().await = Arc::clone(&fresh);

        tracing::info!(
            source = self.source.name(),
            movies = fresh.store().len(),
            "Catalog snapshot swapped"
        );

        Ok(fresh)
    }
}
