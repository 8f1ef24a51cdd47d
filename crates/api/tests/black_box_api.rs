use std::sync::Arc;

use chrono::Utc;
use reqwest::StatusCode;
use serde_json::json;

use orderdesk_store::{FileOrderStore, OrderStore};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
    // Kept alive so the backing file outlives the server.
    _db_dir: tempfile::TempDir,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod) around a temp-file store, bound to
        // an ephemeral port.
        let db_dir = tempfile::tempdir().expect("failed to create temp dir");
        let store: Arc<dyn OrderStore> =
            Arc::new(FileOrderStore::new(db_dir.path().join("orders.json")));
        let app = orderdesk_api::app::build_app(store);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            handle,
            _db_dir: db_dir,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn order_body(id: &str, quantity: u64, unit_price: u64) -> serde_json::Value {
    json!({
        "purchase_order_id": id,
        "purchase_order_number": 4821,
        "purchase_order_status": "pending",
        "ordered_by": "ada@example.com",
        "created_on": Utc::now().to_rfc3339(),
        "vendor": {
            "vendor_id": uuid::Uuid::new_v4().to_string(),
            "vendor_name": "Acme Supplies",
            "vendor_address": "12 Harbour Rd",
            "phone_number": "08012345678",
            "account_number": "0123456789",
            "bank_name": "First Bank",
            "account_name": "Acme Supplies Ltd",
        },
        "items": {
            "item_id": uuid::Uuid::new_v4().to_string(),
            "item_name": "Printer paper",
            "item_quantity": quantity,
            "item_unit_price": unit_price,
            "item_total_price": quantity * unit_price,
        },
    })
}

#[tokio::test]
async fn order_lifecycle_create_list_update_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let id_a = uuid::Uuid::new_v4().to_string();
    let id_b = uuid::Uuid::new_v4().to_string();

    // Create A (qty=3, unit=1000) and B (qty=1, unit=500).
    for (id, qty, price) in [(&id_a, 3, 1000), (&id_b, 1, 500)] {
        let res = client
            .post(format!("{}/orders", srv.base_url))
            .json(&order_body(id, qty, price))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Order created successfully");
    }

    // List: [A, B] in insertion order, derived totals in place.
    let res = client
        .get(format!("{}/orders", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["purchase_order_id"], id_a.as_str());
    assert_eq!(orders[0]["items"]["item_total_price"], 3000);
    assert_eq!(orders[1]["purchase_order_id"], id_b.as_str());
    assert_eq!(orders[1]["items"]["item_total_price"], 500);

    // Approve A via patch; everything else stays put.
    let res = client
        .put(format!("{}/orders/{}", srv.base_url, id_a))
        .json(&json!({ "purchase_order_status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/orders/{}", srv.base_url, id_a))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["purchase_order_status"], "approved");
    assert_eq!(fetched["items"]["item_quantity"], 3);
    assert_eq!(fetched["ordered_by"], "ada@example.com");

    // Delete A, then only B remains and A is gone.
    let res = client
        .delete(format!("{}/orders/{}", srv.base_url, id_a))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/orders", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["purchase_order_id"], id_b.as_str());

    let res = client
        .get(format!("{}/orders/{}", srv.base_url, id_a))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_with_inconsistent_total_is_recomputed_server_side() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let id = uuid::Uuid::new_v4().to_string();
    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&order_body(&id, 3, 1000))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // Replace the item with a deliberately wrong total.
    let res = client
        .put(format!("{}/orders/{}", srv.base_url, id))
        .json(&json!({
            "items": {
                "item_id": uuid::Uuid::new_v4().to_string(),
                "item_name": "Toner cartridge",
                "item_quantity": 4,
                "item_unit_price": 2500,
                "item_total_price": 1,
            }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/orders/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["items"]["item_total_price"], 10000);
}

#[tokio::test]
async fn stats_reflect_status_counts_and_total_cost() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let id_a = uuid::Uuid::new_v4().to_string();
    let id_b = uuid::Uuid::new_v4().to_string();
    for (id, qty, price) in [(&id_a, 3, 1000), (&id_b, 1, 500)] {
        client
            .post(format!("{}/orders", srv.base_url))
            .json(&order_body(id, qty, price))
            .send()
            .await
            .unwrap();
    }
    client
        .put(format!("{}/orders/{}", srv.base_url, id_b))
        .json(&json!({ "purchase_order_status": "approved" }))
        .send()
        .await
        .unwrap();

    let res = client
        .get(format!("{}/orders/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stats: serde_json::Value = res.json().await.unwrap();
    assert_eq!(stats["total_orders"], 2);
    assert_eq!(stats["pending_orders"], 1);
    assert_eq!(stats["approved_orders"], 1);
    assert_eq!(stats["total_cost"], 3500);
}

#[tokio::test]
async fn duplicate_create_is_a_conflict() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let id = uuid::Uuid::new_v4().to_string();
    let body = order_body(&id, 1, 500);

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_inputs_map_to_client_errors() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Malformed id.
    let res = client
        .get(format!("{}/orders/not-a-uuid", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Absent id.
    let res = client
        .get(format!("{}/orders/{}", srv.base_url, uuid::Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Empty vendor name fails validation.
    let id = uuid::Uuid::new_v4().to_string();
    let mut body = order_body(&id, 1, 500);
    body["vendor"]["vendor_name"] = json!("");
    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unsupported_method_on_known_path_is_405() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/orders", srv.base_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid request method");

    let res = client
        .post(format!(
            "{}/orders/{}",
            srv.base_url,
            uuid::Uuid::new_v4()
        ))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
