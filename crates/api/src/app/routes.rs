use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use orderdesk_core::OrderId;
use orderdesk_purchasing::{OrderPatch, OrderStats, PurchaseOrder};

use crate::app::errors::{json_error, store_error_to_response};
use crate::app::SharedStore;

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(list_orders).post(create_order).fallback(invalid_method),
        )
        .route("/stats", get(order_stats).fallback(invalid_method))
        .route(
            "/:id",
            get(get_order)
                .put(update_order)
                .delete(delete_order)
                .fallback(invalid_method),
        )
}

/// Unsupported method on a known path. The UI historically got a 500 here;
/// this is a client error, so answer 405 with the same message body.
async fn invalid_method() -> axum::response::Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "message": "Invalid request method" })),
    )
        .into_response()
}

async fn list_orders(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    match store.list() {
        Ok(orders) => {
            (StatusCode::OK, Json(serde_json::json!({ "orders": orders }))).into_response()
        }
        Err(e) => store_error_to_response(e),
    }
}

async fn create_order(
    Extension(store): Extension<SharedStore>,
    Json(order): Json<PurchaseOrder>,
) -> axum::response::Response {
    match store.create(order) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": "Order created successfully" })),
        )
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}

async fn order_stats(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    match store.list() {
        Ok(orders) => {
            (StatusCode::OK, Json(OrderStats::from_orders(&orders))).into_response()
        }
        Err(e) => store_error_to_response(e),
    }
}

async fn get_order(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id"),
    };
    match store.get(id) {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => store_error_to_response(e),
    }
}

async fn update_order(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
    Json(patch): Json<OrderPatch>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id"),
    };
    match store.update(id, patch) {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Order updated successfully" })),
        )
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}

async fn delete_order(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id"),
    };
    match store.delete(id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Order deleted successfully" })),
        )
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}
