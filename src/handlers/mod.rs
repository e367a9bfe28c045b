pub mod health;
pub mod landing;
pub mod metrics_handler;
pub mod plans;

use std::sync::Arc;

use crate::config::Config;
use crate::plans::PlanLoader;

/// Shared state for page and API handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub loader: PlanLoader,
}

impl AppState {
    pub fn new(config: Config, loader: PlanLoader) -> Self {
        Self {
            config: Arc::new(config),
            loader,
        }
    }
}
