//! End-to-end tests for the full corrald stack.
//!
//! Each test wires the real in-memory store, the real service and the real
//! axum routers, then exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound. Requests within a
//! test share one router, and therefore one store.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use corral_adapter_http_axum::router::CORS_HEADERS;
use corral_adapter_http_axum::state::AppState;
use corral_adapter_http_axum::{assets, router};
use corral_adapter_memory::InMemoryPonyRepository;
use corral_app::services::pony_service::PonyService;

/// Build a fully-wired REST fixture backed by an empty store.
fn app() -> axum::Router {
    router::build(AppState::new(PonyService::new(
        InMemoryPonyRepository::new(),
    )))
}

async fn send(app: &axum::Router, method: Method, uri: &str, form: &str) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if !form.is_empty() {
        request = request.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    app.clone()
        .oneshot(request.body(Body::from(form.to_string())).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    String::from_utf8(
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn sorted_names(list: &Value) -> Vec<String> {
    let mut names: Vec<String> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|pony| pony["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

fn assert_cors(response: &Response) {
    for (name, value) in CORS_HEADERS {
        assert_eq!(response.headers()[name], value, "header {name}");
    }
}

// ---------------------------------------------------------------------------
// Clear
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_nothing_after_clear() {
    let app = app();
    for name in ["A", "B"] {
        let resp = send(&app, Method::POST, "/ponies/", &format!("name={name}")).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = send(&app, Method::GET, "/clear", "").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, Method::GET, "/ponies/", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    let resp = send(&app, Method::GET, "/clear", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = send(&app, Method::GET, "/ponies/", "").await;
    assert_eq!(body_json(resp).await, json!([]));
}

// ---------------------------------------------------------------------------
// Create & fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_fetch_created_pony() {
    let app = app();

    let resp = send(&app, Method::POST, "/ponies/", "name=Rainbow&color=blue").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/x-json");
    let created = body_json(resp).await;
    assert_eq!(created["name"], "Rainbow");

    let resp = send(&app, Method::GET, "/ponies/Rainbow", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn should_fetch_pony_whose_name_has_a_space() {
    let app = app();
    send(&app, Method::POST, "/ponies/", "name=Rainbow+Dash").await;

    let resp = send(&app, Method::GET, "/ponies/Rainbow%20Dash", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "name": "Rainbow Dash" }));
}

#[tokio::test]
async fn should_reject_pony_without_name_and_keep_store() {
    let app = app();
    send(&app, Method::POST, "/ponies/", "name=Applejack").await;

    let resp = send(&app, Method::POST, "/ponies/", "color=orange").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(
        resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    assert!(!body_text(resp).await.is_empty());

    let resp = send(&app, Method::GET, "/ponies/", "").await;
    assert_eq!(sorted_names(&body_json(resp).await), ["Applejack"]);
}

#[tokio::test]
async fn should_reject_empty_body() {
    let app = app();
    let resp = send(&app, Method::POST, "/ponies/", "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_404_for_missing_pony() {
    let app = app();
    let resp = send(&app, Method::GET, "/ponies/Nonexistent", "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Filtered list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_only_requested_ponies() {
    let app = app();
    for name in ["A", "B", "C"] {
        send(&app, Method::POST, "/ponies/", &format!("name={name}")).await;
    }

    let resp = send(&app, Method::GET, "/ponies/?ids=A,C", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(sorted_names(&body_json(resp).await), ["A", "C"]);

    let resp = send(&app, Method::GET, "/ponies/?ids=A%2CC", "").await;
    assert_eq!(sorted_names(&body_json(resp).await), ["A", "C"]);

    let resp = send(&app, Method::GET, "/ponies/", "").await;
    assert_eq!(sorted_names(&body_json(resp).await), ["A", "B", "C"]);
}

// ---------------------------------------------------------------------------
// Unhandled methods
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_not_clear_on_head() {
    let app = app();
    send(&app, Method::POST, "/ponies/", "name=A").await;

    let resp = send(&app, Method::HEAD, "/clear", "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, Method::GET, "/ponies/A", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_return_404_for_head_on_ponies() {
    let app = app();
    send(&app, Method::POST, "/ponies/", "name=A").await;

    for uri in ["/ponies/", "/ponies/A"] {
        let resp = send(&app, Method::HEAD, uri, "").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Replace
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_keep_key_when_name_changes_on_update() {
    let app = app();
    send(&app, Method::POST, "/ponies/", "name=X").await;

    let resp = send(&app, Method::PUT, "/ponies/X", "name=Y").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "name": "Y" }));

    let resp = send(&app, Method::GET, "/ponies/X", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["name"], "Y");

    let resp = send(&app, Method::GET, "/ponies/Y", "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_404_when_updating_missing_pony() {
    let app = app();
    let resp = send(&app, Method::PUT, "/ponies/Ghost", "color=none").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_400_when_update_has_no_name() {
    let app = app();
    send(&app, Method::POST, "/ponies/", "name=X&color=grey").await;

    let resp = send(&app, Method::PUT, "/ponies/X", "color=gold").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(&app, Method::GET, "/ponies/X", "").await;
    assert_eq!(body_json(resp).await["color"], "grey");
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_send_cors_headers_on_every_response() {
    let app = app();
    let requests = [
        (Method::GET, "/ponies/", ""),
        (Method::POST, "/ponies/", "name=A"),
        (Method::POST, "/ponies/", "color=red"),
        (Method::GET, "/ponies/A", ""),
        (Method::GET, "/ponies/Missing", ""),
        (Method::PUT, "/ponies/A", "name=A"),
        (Method::DELETE, "/ponies/A", ""),
        (Method::HEAD, "/clear", ""),
        (Method::OPTIONS, "/ponies/A", ""),
        (Method::GET, "/clear", ""),
        (Method::GET, "/unknown", ""),
    ];

    for (method, uri, form) in requests {
        let resp = send(&app, method, uri, form).await;
        assert_cors(&resp);
    }
}

// ---------------------------------------------------------------------------
// Static assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_assets_from_root() {
    let resp = assets::build(env!("CARGO_MANIFEST_DIR"))
        .oneshot(
            Request::builder()
                .uri("/tests/integration_test.rs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("should_serve_assets_from_root"));
}
