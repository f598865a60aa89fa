use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use storefront_core::Database;
use storefront_server::{app, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    _dir: TempDir,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("data.db")).unwrap();
        Self {
            router: app(AppState::new(db)),
            _dir: dir,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_store(&self, name: &str) -> Value {
        let (status, body) = self
            .send("POST", "/stores", Some(json!({ "name": name })))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    async fn create_item(&self, name: &str, store_id: &Value) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/items",
                Some(json!({
                    "name": name,
                    "price": 12.5,
                    "description": "from test",
                    "store_id": store_id,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }
}

#[tokio::test]
async fn root_and_health_endpoints_respond() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["About"].is_string());

    let (status, body) = app.send("GET", "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn created_store_reads_back_with_no_items() {
    let app = TestApp::new();

    let created = app.create_store("Acme").await;
    assert_eq!(created["name"], "Acme");
    assert_eq!(created["items"], json!([]));

    let (status, body) = app
        .send("GET", &format!("/stores/{}", created["id"]), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn duplicate_names_conflict_with_detail() {
    let app = TestApp::new();
    let store = app.create_store("Acme").await;
    app.create_item("chair", &store["id"]).await;

    let (status, body) = app
        .send("POST", "/stores", Some(json!({ "name": "Acme" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Store already exists!" }));

    let (status, body) = app
        .send(
            "POST",
            "/items",
            Some(json!({ "name": "chair", "price": 1.0, "store_id": store["id"] })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Item already exists!" }));

    let (_, items) = app.send("GET", "/items", None).await;
    assert_eq!(items.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn item_with_unknown_store_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            "POST",
            "/items",
            Some(json!({ "name": "orphan", "price": 3.0, "store_id": 999 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Failed to execute: POST: /items. Detail:"));

    let (_, items) = app.send("GET", "/items", None).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn deleting_store_cascades_to_items() {
    let app = TestApp::new();
    let store = app.create_store("Acme").await;
    let first = app.create_item("chair", &store["id"]).await;
    let second = app.create_item("lamp", &store["id"]).await;

    let (_, loaded) = app
        .send("GET", &format!("/stores/{}", store["id"]), None)
        .await;
    assert_eq!(loaded["items"], json!([first.clone(), second.clone()]));

    let (status, body) = app
        .send("DELETE", &format!("/stores/{}", store["id"]), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Store deleted successfully!"));

    for item in [first, second] {
        let (status, body) = app
            .send("GET", &format!("/items/{}", item["id"]), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Item not found with the given ID" }));
    }

    let (status, _) = app
        .send("DELETE", &format!("/stores/{}", store["id"]), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_fields_and_round_trips() {
    let app = TestApp::new();
    let acme = app.create_store("Acme").await;
    let globex = app.create_store("Globex").await;
    let created = app.create_item("chair", &acme["id"]).await;
    let uri = format!("/items/{}", created["id"]);

    let (status, echoed) = app.send("PUT", &uri, Some(created.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echoed, created);

    let replacement = json!({
        "id": created["id"],
        "name": "armchair",
        "price": 99.95,
        "description": null,
        "store_id": globex["id"],
    });
    let (status, updated) = app.send("PUT", &uri, Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, replacement);

    let (_, loaded) = app.send("GET", &uri, None).await;
    assert_eq!(loaded, replacement);
}

#[tokio::test]
async fn update_missing_item_is_not_found() {
    let app = TestApp::new();
    let store = app.create_store("Acme").await;

    let (status, body) = app
        .send(
            "PUT",
            "/items/41",
            Some(json!({
                "id": 41,
                "name": "ghost",
                "price": 1.0,
                "store_id": store["id"],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Item not found with the given ID" }));
}

#[tokio::test]
async fn name_filter_wraps_result_in_single_slot() {
    let app = TestApp::new();
    let store = app.create_store("Acme").await;
    let chair = app.create_item("chair", &store["id"]).await;
    app.create_item("lamp", &store["id"]).await;

    let (status, body) = app.send("GET", "/items?name=chair", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([chair]));

    let (status, body) = app.send("GET", "/items?name=sofa", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([null]));

    let (_, body) = app.send("GET", "/stores?name=Nowhere", None).await;
    assert_eq!(body, json!([null]));

    let (_, body) = app.send("GET", "/stores", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_item_returns_message_then_not_found() {
    let app = TestApp::new();
    let store = app.create_store("Acme").await;
    let item = app.create_item("chair", &store["id"]).await;
    let uri = format!("/items/{}", item["id"]);

    let (status, body) = app.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Item deleted successfully!"));

    let (status, _) = app.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_input_goes_through_generic_failure_path() {
    let app = TestApp::new();

    let (status, body) = app
        .send("POST", "/stores", Some(json!({ "title": "missing name" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to execute: POST: /stores. Detail:"));

    let (status, body) = app.send("GET", "/items/not-a-number", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("GET: /items/not-a-number"));

    let (status, body) = app
        .send("POST", "/stores", Some(json!({ "name": "x".repeat(81) })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("at most 80"));
}

#[tokio::test]
async fn failure_message_names_request_target_with_query() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/stores/abc?verbose=1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Failed to execute: GET: /stores/abc?verbose=1. Detail:"));
    assert!(!message.contains("http://"));
}
