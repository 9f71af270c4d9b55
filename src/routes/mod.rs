use std::sync::Arc;

use axum::Router;

use crate::Dataset;

mod api_error;
mod health;
mod readings;
mod reports;
mod user;

pub use api_error::ApiError;

// ---

/// Shared, read-only state handed to every handler.
pub type AppState = Arc<Dataset>;

pub fn router(dataset: Dataset) -> Router {
    // ---
    Router::new()
        .merge(readings::router())
        .merge(reports::router())
        .merge(health::router())
        .with_state(Arc::new(dataset))
}
