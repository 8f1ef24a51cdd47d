use std::sync::Arc;

use orderdesk_store::{FileOrderStore, OrderStore};

#[tokio::main]
async fn main() {
    orderdesk_observability::init();

    let db_path = std::env::var("ORDERDESK_DB").unwrap_or_else(|_| {
        tracing::warn!("ORDERDESK_DB not set; using data/orders.json");
        "data/orders.json".to_string()
    });
    let bind_addr =
        std::env::var("ORDERDESK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let store: Arc<dyn OrderStore> = Arc::new(FileOrderStore::new(&db_path));
    tracing::info!(db = %db_path, "order database configured");

    let app = orderdesk_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
