use std::sync::Arc;

use actix_web::web;

use crate::config::BackendConfig;
use crate::core::Result;
use crate::middleware::error_handler;
use crate::modules::{self, health};
use crate::modules::rates::{BackendClient, CatalogCache, RateCatalogService, RateLinkService};
use crate::modules::reports::ReportService;

/// Services shared by every worker. The cache is shared too, so a mutation
/// handled by one worker invalidates what the others serve.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub cache: Arc<CatalogCache>,
    pub catalog: RateCatalogService,
    pub links: RateLinkService,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let backend = BackendClient::new(config)?;
        let cache = Arc::new(CatalogCache::new(config.cache_ttl()));
        let catalog = RateCatalogService::new(backend.clone(), Arc::clone(&cache));
        let links = RateLinkService::new(backend.clone(), Arc::clone(&cache));
        let reports = ReportService::new(catalog.clone(), links.clone());

        Ok(Self {
            backend,
            cache,
            catalog,
            links,
            reports,
        })
    }

    /// Registers app data, extractor error handlers and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.backend.clone()))
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.links.clone()))
            .app_data(web::Data::new(self.reports.clone()))
            .configure(error_handler::configure)
            .configure(health::configure)
            .configure(modules::configure_api);
    }
}
