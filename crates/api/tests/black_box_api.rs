use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use stocklist_api::sessions::{InMemorySessionStore, SessionStore};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let app = stocklist_api::app::build_app(sessions);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn open_session(client: &reqwest::Client, srv: &TestServer) -> String {
    let res = client.post(srv.url("/sessions")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    body["session_id"].as_str().unwrap().to_string()
}

async fn add_item(
    client: &reqwest::Client,
    srv: &TestServer,
    session: &str,
    body: Value,
) -> (StatusCode, Value) {
    let res = client
        .post(srv.url("/items"))
        .header("X-Session-Id", session)
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

async fn list_items(client: &reqwest::Client, srv: &TestServer, session: &str) -> Value {
    let res = client
        .get(srv.url("/items"))
        .header("X-Session-Id", session)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

async fn remove_item(client: &reqwest::Client, srv: &TestServer, session: &str, id: &str) -> Value {
    let res = client
        .delete(srv.url(&format!("/items/{id}")))
        .header("X-Session-Id", session)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

fn names_and_quantities(list: &Value) -> Vec<(String, u64)> {
    list["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| {
            (
                i["name"].as_str().unwrap().to_string(),
                i["quantity"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn health_needs_no_session() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn session_header_is_required() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/items")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_session");

    let res = client
        .get(srv.url("/items"))
        .header("X-Session-Id", "not-a-session")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(srv.url("/items"))
        .header("X-Session-Id", stocklist_core::SessionId::new().to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "session_not_found");
}

#[tokio::test]
async fn new_session_starts_empty() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let session = open_session(&client, &srv).await;

    let list = list_items(&client, &srv, &session).await;
    assert_eq!(list["count"], 0);
    assert_eq!(list["items"], json!([]));
    assert_eq!(list["message"], "inventory is empty; add the first item");
}

#[tokio::test]
async fn add_widget_then_list() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let session = open_session(&client, &srv).await;

    let (status, body) = add_item(
        &client,
        &srv,
        &session,
        json!({ "name": "Widget", "quantity": "5" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "added item: Widget (quantity 5)");
    assert_eq!(body["item"]["name"], "Widget");
    assert_eq!(body["item"]["quantity"], 5);

    let list = list_items(&client, &srv, &session).await;
    assert_eq!(names_and_quantities(&list), vec![("Widget".to_string(), 5)]);
    assert_eq!(list["items"][0]["id"], body["item"]["id"]);
    assert!(list.get("message").is_none());
}

#[tokio::test]
async fn numeric_quantity_is_accepted() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let session = open_session(&client, &srv).await;

    let (status, body) =
        add_item(&client, &srv, &session, json!({ "name": "Bolt", "quantity": 12 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item"]["quantity"], 12);

    let (status, body) = add_item(
        &client,
        &srv,
        &session,
        json!({ "name": "Bolt", "quantity": u64::MAX.to_string() }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item"]["quantity"].as_u64(), Some(u64::MAX));
}

#[tokio::test]
async fn validation_errors_leave_inventory_unchanged() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let session = open_session(&client, &srv).await;

    let cases = [
        (json!({ "name": "Widget", "quantity": "-3" }), "invalid_quantity_value"),
        (json!({ "name": "Widget", "quantity": 0 }), "invalid_quantity_value"),
        (json!({ "name": "Widget", "quantity": "abc" }), "invalid_quantity_format"),
        (json!({ "name": "Widget", "quantity": 2.5 }), "invalid_quantity_format"),
        (json!({ "name": "Widget" }), "invalid_quantity_format"),
        (json!({ "name": "", "quantity": "5" }), "empty_name"),
        (json!({ "name": "   ", "quantity": 5 }), "empty_name"),
        (json!({ "name": "", "quantity": "abc" }), "invalid_quantity_format"),
    ];

    for (request, code) in cases {
        let (status, body) = add_item(&client, &srv, &session, request.clone()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "request {request}");
        assert_eq!(body["error"], code, "request {request}");
        assert!(body["message"].as_str().is_some());
    }

    let list = list_items(&client, &srv, &session).await;
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn remove_keeps_other_items() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let session = open_session(&client, &srv).await;

    let (_, a) = add_item(&client, &srv, &session, json!({ "name": "A", "quantity": 1 })).await;
    add_item(&client, &srv, &session, json!({ "name": "B", "quantity": 2 })).await;

    let body = remove_item(&client, &srv, &session, a["item"]["id"].as_str().unwrap()).await;
    assert_eq!(body["removed"], true);
    assert_eq!(body["message"], "item removed");

    let list = list_items(&client, &srv, &session).await;
    assert_eq!(names_and_quantities(&list), vec![("B".to_string(), 2)]);
}

#[tokio::test]
async fn remove_of_unknown_or_malformed_id_reports_success() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let session = open_session(&client, &srv).await;
    add_item(&client, &srv, &session, json!({ "name": "A", "quantity": 1 })).await;

    let unknown = stocklist_core::ItemId::new().to_string();
    let body = remove_item(&client, &srv, &session, &unknown).await;
    assert_eq!(body["removed"], false);
    assert_eq!(body["message"], "item removed");

    let body = remove_item(&client, &srv, &session, "garbage").await;
    assert_eq!(body["removed"], false);

    let list = list_items(&client, &srv, &session).await;
    assert_eq!(list["count"], 1);
}

#[tokio::test]
async fn sessions_are_isolated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let first = open_session(&client, &srv).await;
    let second = open_session(&client, &srv).await;

    let (_, a) = add_item(&client, &srv, &first, json!({ "name": "A", "quantity": 1 })).await;

    let list = list_items(&client, &srv, &second).await;
    assert_eq!(list["count"], 0);

    // An id from one session cannot remove anything from another.
    add_item(&client, &srv, &second, json!({ "name": "B", "quantity": 2 })).await;
    let body = remove_item(&client, &srv, &second, a["item"]["id"].as_str().unwrap()).await;
    assert_eq!(body["removed"], false);

    let list = list_items(&client, &srv, &first).await;
    assert_eq!(names_and_quantities(&list), vec![("A".to_string(), 1)]);
}

#[tokio::test]
async fn session_info_and_close() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let session = open_session(&client, &srv).await;
    add_item(&client, &srv, &session, json!({ "name": "A", "quantity": 1 })).await;

    let res = client
        .get(srv.url("/session"))
        .header("X-Session-Id", &session)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["session_id"], session.as_str());
    assert_eq!(body["item_count"], 1);
    assert!(body["opened_at"].as_str().is_some());

    let res = client
        .delete(srv.url("/session"))
        .header("X-Session-Id", &session)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(srv.url("/items"))
        .header("X-Session-Id", &session)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
