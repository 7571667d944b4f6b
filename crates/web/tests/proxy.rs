mod common;

use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    response::IntoResponse,
    routing::post,
};
use common::{MockMacRepository, build, config, send};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Captured {
    bodies: Arc<Mutex<Vec<Bytes>>>,
    content_types: Arc<Mutex<Vec<String>>>,
}

async fn rejecting_api(
    State(captured): State<Captured>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    captured.bodies.lock().unwrap().push(body);
    captured.content_types.lock().unwrap().push(
        headers
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default(),
    );

    (
        StatusCode::BAD_REQUEST,
        [("content-type", "text/plain"), ("x-request-id", "req-42")],
        r#"{"ok":false,"message":"Invalid amount"}"#,
    )
}

async fn slow_api() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "{}"
}

async fn spawn_api(captured: Captured) -> SocketAddr {
    let app = Router::new()
        .route("/api/payment-intent", post(rejecting_api))
        .route("/slow/api/payment-intent", post(slow_api))
        .with_state(captured);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn proxy_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/payment-intent")
        .header("content-type", "text/plain")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn relays_body_status_and_headers() {
    let captured = Captured::default();
    let addr = spawn_api(captured.clone()).await;

    let app = build(
        &config(&format!("http://{addr}"), Duration::from_secs(5)),
        None,
        MockMacRepository::with(vec![]),
    );

    let sent = r#"{"currency":"usd","amount":"abc"}"#;
    let reply = send(app.router, proxy_request(sent)).await;

    assert_eq!(captured.bodies.lock().unwrap().as_slice(), &[Bytes::from(sent)]);
    assert_eq!(
        captured.content_types.lock().unwrap().as_slice(),
        &["application/json".to_string()]
    );

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.text(), r#"{"ok":false,"message":"Invalid amount"}"#);
    assert_eq!(reply.header("content-type"), Some("application/json"));
    assert_eq!(reply.header("x-request-id"), Some("req-42"));
}

#[tokio::test]
async fn unreachable_api_is_a_server_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = build(
        &config(&format!("http://{addr}"), Duration::from_secs(5)),
        None,
        MockMacRepository::with(vec![]),
    );

    let reply = send(app.router, proxy_request(r#"{"currency":"usd","amount":"1"}"#)).await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.header("content-type"), Some("application/json"));

    let body: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(body["ok"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Internal Server Error: Failed to connect to API server")
    );
}

#[tokio::test]
async fn slow_api_hits_the_proxy_timeout() {
    let addr = spawn_api(Captured::default()).await;

    let app = build(
        &config(&format!("http://{addr}/slow"), Duration::from_millis(200)),
        None,
        MockMacRepository::with(vec![]),
    );

    let reply = send(app.router, proxy_request(r#"{"currency":"usd","amount":"1"}"#)).await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(body["ok"], false);
}
