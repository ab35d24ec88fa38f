// src/state.rs
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub completion: CompletionClient,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> anyhow::Result<Self> {
        let completion = CompletionClient::new(&config)?;
        Ok(Self { config, catalog, completion })
    }

    pub fn shared(config: Config, catalog: Catalog) -> anyhow::Result<SharedState> {
        Ok(Arc::new(Self::new(config, catalog)?))
    }
}
