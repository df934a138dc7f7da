use std::sync::Arc;

use axum::Router;
use catalog_core::config::{AppConfig, ConfigError, LoadOptions};
use catalog_core::{CatalogLoadError, CatalogProvider, StaticCatalog};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{health, product};

pub struct Application {
    pub config: AppConfig,
    pub catalog: Arc<StaticCatalog>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("catalog load failed: {0}")]
    Catalog(#[source] CatalogLoadError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let seed_path = config.catalog.seed_path.as_deref();
    let catalog = StaticCatalog::load(seed_path).map_err(BootstrapError::Catalog)?;
    let source = seed_path
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in sample".to_string());
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        source = %source,
        entry_count = catalog.len(),
        "catalog loaded"
    );

    Ok(Application { config, catalog: Arc::new(catalog) })
}

impl Application {
    pub fn router(&self) -> Router {
        let catalog: Arc<dyn CatalogProvider> = self.catalog.clone();

        Router::new()
            .merge(product::router(catalog.clone()))
            .merge(health::router(catalog))
            .layer(CorsLayer::permissive())
    }
}
