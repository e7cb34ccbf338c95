use std::sync::Arc;

use crate::config::Config;
use crate::services::{AdminAuth, CatalogService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub catalog: CatalogService,

    pub admin_auth: AdminAuth,
}

impl SharedState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let catalog = CatalogService::from_config(&config.storage);
        Self::with_catalog(config, catalog)
    }

    /// Uses a prebuilt catalog, e.g. one with a custom primary store.
    #[must_use]
    pub fn with_catalog(config: Config, catalog: CatalogService) -> Self {
        let admin_auth = AdminAuth::new(&config.admin);

        Self {
            config: Arc::new(config),
            catalog,
            admin_auth,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
