use std::sync::Arc;

use crate::{config::AppConfig, services::upstream::TripSource};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub trips: Arc<dyn TripSource>,
}

impl AppState {
    pub fn new(config: AppConfig, trips: Arc<dyn TripSource>) -> Self {
        Self { config, trips }
    }
}
