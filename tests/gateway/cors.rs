use crate::echo_server::{EchoTestServer, ORIGIN};
use reqwest::{Method, Response, StatusCode};
use serde_json::Value;

fn assert_cors_headers(response: &Response) {
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(header("access-control-allow-origin").as_deref(), Some(ORIGIN));
    assert_eq!(header("vary").as_deref(), Some("Origin"));
    assert_eq!(
        header("access-control-allow-methods").as_deref(),
        Some("POST, OPTIONS")
    );
    assert_eq!(
        header("access-control-allow-headers").as_deref(),
        Some("Content-Type")
    );
}

#[tokio::test]
async fn preflight_returns_204_with_cors_headers() {
    let server = EchoTestServer::start_mock().await;
    let response = reqwest::Client::new()
        .request(Method::OPTIONS, server.url("/api/echo"))
        .header("Origin", ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("preflight should complete");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_cors_headers(&response);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn success_and_validation_errors_carry_cors_headers() {
    let server = EchoTestServer::start_mock().await;
    let client = reqwest::Client::new();

    let ok = client
        .post(server.url("/api/echo"))
        .json(&serde_json::json!({"text": "hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    assert_cors_headers(&ok);

    let bad = client
        .post(server.url("/api/echo"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(&bad);
}

#[tokio::test]
async fn other_methods_get_json_405() {
    let server = EchoTestServer::start_mock().await;
    let client = reqwest::Client::new();

    for (method, path) in [
        (Method::GET, "/api/echo"),
        (Method::PUT, "/api/echo"),
        (Method::DELETE, "/api/echo"),
        (Method::POST, "/api/echo/health"),
    ] {
        let response = client
            .request(method.clone(), server.url(path))
            .send()
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} {path}"
        );
        assert_cors_headers(&response);
        let body: Value = response.json().await.expect("405 body should be json");
        assert_eq!(body["error"], "Method not allowed");
    }
}
