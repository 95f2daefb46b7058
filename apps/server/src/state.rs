//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::{config::Config, services::DataService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub data_service: Arc<DataService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            data_service: Arc::new(DataService::new()),
        }
    }
}
