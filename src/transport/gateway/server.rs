use super::handlers::{handle_echo, handle_health, handle_method_not_allowed, handle_preflight};
use super::reply::EchoReply;
use super::{AppState, ECHO_PATH, HEALTH_PATH, MAX_BODY_SIZE};

use crate::config::Config;
use anyhow::{Context, Result};
use crate::error::RequestError;
use axum::{
    Router,
    http::{HeaderValue, StatusCode, header},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the HTTP gateway on `host:port`.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    // ── Security: refuse public bind without explicit opt-in ──
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the echo endpoint would be exposed to the internet.\n\
             Fix: use --host 127.0.0.1 (default), or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("parse gateway bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind gateway socket")?;

    run_gateway_with_listener(listener, config).await
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let local_addr = listener
        .local_addr()
        .context("get gateway listener local address")?;

    let state = AppState::new(Arc::clone(&config));
    print_gateway_banner(local_addr, &config);

    let app = build_app(state).context("build gateway router")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP gateway")?;

    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %error, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}

fn print_gateway_banner(addr: SocketAddr, config: &Config) {
    println!("Kindred Echo listening on http://{addr}");
    println!("  POST {ECHO_PATH}");
    println!("  GET  {HEALTH_PATH}");
    println!("  Allowed origin: {}", config.gateway.allowed_origin);
    tracing::info!(
        %addr,
        openai = config.has_openai_key(),
        huggingface = config.has_huggingface_key(),
        "gateway started"
    );
}

/// The router with its CORS, body-limit and panic layers applied.
pub fn build_app(state: AppState) -> Result<Router> {
    let allowed_origin = HeaderValue::from_str(&state.config.gateway.allowed_origin)
        .context("allowed_origin is not a valid header value")?;

    let app = Router::new()
        .route(
            ECHO_PATH,
            post(handle_echo)
                .options(handle_preflight)
                .fallback(handle_method_not_allowed),
        )
        .route(
            HEALTH_PATH,
            // axum serves HEAD from the GET handler unless HEAD is routed.
            get(handle_health)
                .head(handle_method_not_allowed)
                .fallback(handle_method_not_allowed),
        )
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(map_response(json_payload_too_large))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            allowed_origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::VARY,
            HeaderValue::from_static("Origin"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Ok(app)
}

/// The body limit layer answers oversized `Content-Length` requests with
/// plain text before any handler runs.
async fn json_payload_too_large(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE && !is_json {
        tracing::warn!("request body over limit");
        return EchoReply::from(RequestError::PayloadTooLarge).into_response();
    }
    response
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = message, "handler panicked");

    EchoReply::failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Internal server error: {message}"),
    )
    .into_response()
}
