use crate::echo_server::{EchoTestServer, config_for_upstream};
use kindred_echo::config::DebugDisclosure;
use reqwest::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HF_PATH: &str = "/tiiuae/falcon-7b-instruct";
const OPENAI_PATH: &str = "/v1/chat/completions";

async fn post_text(server: &EchoTestServer, query: &str, text: &str) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(server.url(&format!("/api/echo{query}")))
        .json(&json!({ "text": text }))
        .send()
        .await
        .expect("echo request should complete");
    let status = response.status();
    (status, response.json().await.expect("echo body should be json"))
}

fn openai_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
}

fn quota_reply() -> ResponseTemplate {
    ResponseTemplate::new(429).set_body_json(json!({
        "error": {"message": "You exceeded your current quota", "code": "insufficient_quota"}
    }))
}

async fn mount(upstream: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(template)
        .mount(upstream)
        .await;
}

async fn bodies_sent_to(upstream: &MockServer, route: &str) -> Vec<String> {
    upstream
        .received_requests()
        .await
        .expect("request recording is on")
        .into_iter()
        .filter(|request| request.url.path() == route)
        .map(|request| String::from_utf8_lossy(&request.body).into_owned())
        .collect()
}

#[tokio::test]
async fn openai_reflection_with_redacted_prompt() {
    let upstream = MockServer::start().await;
    mount(&upstream, OPENAI_PATH, openai_reply("That sounds like a lot to hold.")).await;
    let server = EchoTestServer::start(config_for_upstream(&upstream.uri(), Some("sk-test"), None)).await;

    let (status, body) = post_text(
        &server,
        "",
        "Contact me at jane.doe@example.com or Call 555-123-4567",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reflection"], "That sounds like a lot to hold.");
    assert_eq!(body["model"], "gpt-4o-mini-2024-07-18");
    assert_eq!(body["source"], "openai");

    let sent = bodies_sent_to(&upstream, OPENAI_PATH).await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("[redacted-email]"));
    assert!(sent[0].contains("[redacted-phone]"));
    assert!(!sent[0].contains("jane.doe@example.com"));
    assert!(!sent[0].contains("555-123-4567"));
    assert!(sent[0].contains("You are Echo, a gentle, empathetic assistant."));
}

#[tokio::test]
async fn huggingface_answers_first() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        HF_PATH,
        ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "You are heard."}])),
    )
    .await;
    mount(&upstream, OPENAI_PATH, openai_reply("unused")).await;
    let server = EchoTestServer::start(config_for_upstream(
        &upstream.uri(),
        Some("sk-test"),
        Some("hf_test"),
    ))
    .await;

    let (status, body) = post_text(&server, "", "write to me at a.b@example.org").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "huggingface");
    assert_eq!(body["model"], "tiiuae/falcon-7b-instruct");
    assert_eq!(body["reflection"], "You are heard.");
    assert!(bodies_sent_to(&upstream, OPENAI_PATH).await.is_empty());

    let hf_sent = bodies_sent_to(&upstream, HF_PATH).await;
    assert!(hf_sent[0].contains("[redacted-email]"));
    assert!(!hf_sent[0].contains("a.b@example.org"));
}

#[tokio::test]
async fn huggingface_failure_falls_through_to_openai() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        HF_PATH,
        ResponseTemplate::new(503).set_body_string("model is loading"),
    )
    .await;
    mount(&upstream, OPENAI_PATH, openai_reply("Take it one hour at a time.")).await;
    let server = EchoTestServer::start(config_for_upstream(
        &upstream.uri(),
        Some("sk-test"),
        Some("hf_test"),
    ))
    .await;

    let (status, body) = post_text(&server, "", "overwhelmed").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "openai");
    assert!(body.get("hfError").is_none());
}

#[tokio::test]
async fn quota_error_downgrades_to_mock() {
    let upstream = MockServer::start().await;
    mount(&upstream, OPENAI_PATH, quota_reply()).await;
    let server = EchoTestServer::start(config_for_upstream(&upstream.uri(), Some("sk-test"), None)).await;

    let (status, body) = post_text(&server, "?debug=1", "hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "mock");
    assert_eq!(body["fallback"], true);
    // Debug is off by default, so the caller's opt-in is ignored.
    assert!(body.get("reason").is_none());
    assert!(body.get("hfError").is_none());
}

#[tokio::test]
async fn quota_detail_disclosed_on_request() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        HF_PATH,
        ResponseTemplate::new(503).set_body_string("model is loading"),
    )
    .await;
    mount(&upstream, OPENAI_PATH, quota_reply()).await;
    let mut config = config_for_upstream(&upstream.uri(), Some("sk-test"), Some("hf_test"));
    config.echo.debug = DebugDisclosure::OnRequest;
    let server = EchoTestServer::start(config).await;

    let (_, quiet) = post_text(&server, "", "hello").await;
    assert_eq!(quiet["fallback"], true);
    assert!(quiet.get("reason").is_none());

    let (status, loud) = post_text(&server, "?debug=true", "hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loud["reason"], "openai_insufficient_quota");
    assert!(
        loud["hfError"]
            .as_str()
            .is_some_and(|e| e.contains("model is loading"))
    );
}

#[tokio::test]
async fn unrelated_openai_failure_is_500() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        OPENAI_PATH,
        ResponseTemplate::new(500).set_body_string("network timeout upstream"),
    )
    .await;
    let server = EchoTestServer::start(config_for_upstream(&upstream.uri(), Some("sk-test"), None)).await;

    let (status, body) = post_text(&server, "", "hello").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|e| e.contains("network timeout upstream"))
    );
    assert!(body.get("fallback").is_none());
    assert!(body.get("reflection").is_none());
}

#[tokio::test]
async fn forced_mock_never_calls_upstream() {
    let upstream = MockServer::start().await;
    mount(&upstream, OPENAI_PATH, openai_reply("unused")).await;
    let mut config = config_for_upstream(&upstream.uri(), Some("sk-test"), Some("hf_test"));
    config.echo.mode = Some("\"mock\"".into());
    let server = EchoTestServer::start(config).await;

    let (status, body) = post_text(&server, "", "hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "mock");
    assert!(upstream.received_requests().await.unwrap().is_empty());
}
