use std::sync::Arc;

use axum::Router;

use crate::{Config, Dataset, FilterOptions};

mod api;
mod health;
mod page;

// ---

/// Shared, read-only state handed to every route.
#[derive(Clone)]
pub struct AppState {
    // ---
    pub dataset: Arc<Dataset>,
    pub options: Arc<FilterOptions>,
    pub config: Config,
}

impl AppState {
    pub fn new(dataset: Dataset, config: Config) -> Self {
        // ---
        let options = FilterOptions::from_dataset(&dataset);
        AppState {
            dataset: Arc::new(dataset),
            options: Arc::new(options),
            config,
        }
    }
}

pub fn router(dataset: Dataset, config: Config) -> Router {
    // ---
    Router::new()
        .merge(page::router())
        .merge(api::router())
        .merge(health::router())
        .with_state(AppState::new(dataset, config))
}
