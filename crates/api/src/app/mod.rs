use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use orderdesk_store::OrderStore;

mod errors;
mod routes;

/// Store handle shared with every handler.
pub type SharedStore = Arc<dyn OrderStore>;

/// Build the application router around a store.
///
/// Tests pass an in-memory or temp-file store; `main` wires the file store
/// from the environment.
pub fn build_app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/orders", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(store)),
        )
}

async fn health() -> StatusCode {
    StatusCode::OK
}
