use crate::echo_server::EchoTestServer;
use kindred_echo::config::Config;
use kindred_echo::echo::MOCK_REFLECTION;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn post_raw(server: &EchoTestServer, body: &'static str) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(server.url("/api/echo"))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .expect("echo request should complete");
    let status = response.status();
    (status, response.json().await.expect("echo body should be json"))
}

#[tokio::test]
async fn mock_mode_returns_canned_reflection() {
    let server = EchoTestServer::start_mock().await;
    let (status, body) = post_raw(&server, r#"{"text":"I feel stretched thin."}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "reflection": MOCK_REFLECTION,
            "model": "mock",
            "tokensUsed": 0,
            "safety": {"flagged": false}
        })
    );
}

#[tokio::test]
async fn no_credentials_yields_mock() {
    let server = EchoTestServer::start(Config::default()).await;
    let (status, body) = post_raw(&server, r#"{"text":"quiet morning"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "mock");
    assert!(body.get("fallback").is_none());
}

#[tokio::test]
async fn missing_or_invalid_text_is_400() {
    let server = EchoTestServer::start_mock().await;
    for raw in [r#"{}"#, r#"{"text":null}"#, r#"{"text":["a"]}"#, r#"{"text":""}"#, ""] {
        let (status, body) = post_raw(&server, raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw:?}");
        assert_eq!(body["error"], "Missing text field in body");
    }
}

#[tokio::test]
async fn malformed_json_is_400() {
    let server = EchoTestServer::start_mock().await;
    let (status, body) = post_raw(&server, r#"{"text": "unterminated"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid request JSON"}));
}

#[tokio::test]
async fn reflection_round_trips_as_plain_text() {
    let server = EchoTestServer::start_mock().await;
    let (_, body) = post_raw(&server, r#"{"text":"a note"}"#).await;
    let reflection = body["reflection"].as_str().unwrap();

    assert!(
        reflection
            .chars()
            .all(|c| !c.is_control() || c == '\n' || c == '\t')
    );
    assert_eq!(reflection, reflection.trim());
}
