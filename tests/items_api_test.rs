// HTTP-level integration tests for the items API
//
// Each test provisions its own disposable PostgreSQL instance via
// testcontainers and exercises the full stack: routes, request validation,
// store, and database. Containers are removed when the TestDb is dropped,
// whatever the test outcome.

mod common;

use common::{setup_app, TestDb};
use poem::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn service_info_and_health_respond() {
    let (_test_db, client) = setup_app().await;

    let resp = client.get("/").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value()
        .object()
        .get("service")
        .assert_string("itemstash-backend");

    let resp = client.get("/health").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value().object().get("status").assert_string("healthy");
}

#[tokio::test]
async fn item_crud_lifecycle() {
    let (_test_db, client) = setup_app().await;

    // Create
    let resp = client
        .post("/items")
        .body_json(&json!({"name": "Widget", "description": "A widget"}))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let body = resp.json().await;
    let created = body.value().object();
    created.get("name").assert_string("Widget");
    created.get("description").assert_string("A widget");
    let id = created.get("id").string().to_string();
    Uuid::parse_str(&id).expect("generated id is not a UUID");

    // Read back
    let resp = client.get(format!("/items/{}", id)).send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let fetched = body.value().object();
    fetched.get("id").assert_string(&id);
    fetched.get("name").assert_string("Widget");

    // Replace fields
    let resp = client
        .put(format!("/items/{}", id))
        .body_json(&json!({"name": "Widget2"}))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let updated = body.value().object();
    updated.get("id").assert_string(&id);
    updated.get("name").assert_string("Widget2");
    updated.get("description").assert_null();

    // Delete
    let resp = client.delete(format!("/items/{}", id)).send().await;
    resp.assert_status(StatusCode::NO_CONTENT);

    // Gone
    let resp = client.get(format!("/items/{}", id)).send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_item_id_is_a_client_error() {
    let (_test_db, client) = setup_app().await;

    let resp = client.get("/items/not-a-valid-id").send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let resp = client
        .put("/items/not-a-valid-id")
        .body_json(&json!({"name": "Widget"}))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let resp = client.delete("/items/not-a-valid-id").send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_item_id_yields_not_found() {
    let (_test_db, client) = setup_app().await;

    let unknown = Uuid::new_v4();

    let resp = client.get(format!("/items/{}", unknown)).send().await;
    resp.assert_status(StatusCode::NOT_FOUND);

    // Updating a non-existent item must not create one
    let resp = client
        .put(format!("/items/{}", unknown))
        .body_json(&json!({"name": "Ghost"}))
        .send()
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);

    let resp = client.delete(format!("/items/{}", unknown)).send().await;
    resp.assert_status(StatusCode::NOT_FOUND);

    let resp = client.get("/items").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 0);
}

#[tokio::test]
async fn create_without_a_name_is_rejected() {
    let (_test_db, client) = setup_app().await;

    let resp = client.post("/items").body_json(&json!({})).send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let resp = client
        .post("/items")
        .body_json(&json!({"name": ""}))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    // Nothing was persisted
    let resp = client.get("/items").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 0);
}

#[tokio::test]
async fn list_reflects_successful_creates() {
    let (_test_db, client) = setup_app().await;

    let resp = client.get("/items").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 0);

    for i in 0..3 {
        let resp = client
            .post("/items")
            .body_json(&json!({"name": format!("Item {}", i)}))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
    }

    let resp = client.get("/items").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 3);
}

#[tokio::test]
async fn reset_clears_stored_items() {
    let (test_db, client) = setup_app().await;

    for name in ["One", "Two"] {
        let resp = client
            .post("/items")
            .body_json(&json!({"name": name}))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
    }

    test_db.reset().await;

    let resp = client.get("/items").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 0);
}

#[tokio::test]
async fn test_environments_are_isolated() {
    let (_db_a, client_a) = setup_app().await;
    let (_db_b, client_b) = setup_app().await;

    let resp = client_a
        .post("/items")
        .body_json(&json!({"name": "Only in A"}))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    // An item created in one environment is not visible in another
    let resp = client_b.get("/items").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 0);

    let resp = client_a.get("/items").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 1);
}

// TestDb::provision is also exercised directly, without the HTTP layer;
// two live environments coexist and tear down independently.
#[tokio::test]
async fn provisioning_is_repeatable() {
    let first = TestDb::provision().await;
    let second = TestDb::provision().await;

    first.reset().await;
    second.reset().await;
}
