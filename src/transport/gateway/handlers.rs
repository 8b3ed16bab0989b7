use super::AppState;
use super::reply::EchoReply;
use crate::echo::{ReflectionRequest, StatusReport};
use crate::error::RequestError;
use axum::{
    body::Bytes,
    extract::{Query, State, rejection::BytesRejection, rejection::QueryRejection},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::Instrument;

/// Query string of `POST /api/echo`.
#[derive(Debug, Default, Deserialize)]
pub struct EchoQuery {
    #[serde(default)]
    pub debug: Option<String>,
}

impl EchoQuery {
    /// `?debug=1` or `?debug=true`.
    pub fn debug_requested(&self) -> bool {
        matches!(self.debug.as_deref(), Some("1" | "true"))
    }
}

/// POST /api/echo
pub(super) async fn handle_echo(
    State(state): State<AppState>,
    query: Result<Query<EchoQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> EchoReply {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("echo", %request_id);

    async move {
        let body = match body {
            Ok(body) => body,
            Err(rejection) => {
                tracing::warn!(status = %rejection.status(), "request body rejected");
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    return RequestError::PayloadTooLarge.into();
                }
                return EchoReply::failure(rejection.status(), rejection.body_text());
            }
        };
        // A garbled query string only costs the caller their debug opt-in.
        let debug_requested = query.is_ok_and(|Query(query)| query.debug_requested());

        let request = match ReflectionRequest::from_body(&body) {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(bytes = body.len(), "invalid request JSON");
                return error.into();
            }
        };
        let Some(text) = request.text() else {
            tracing::warn!("request without text");
            return RequestError::MissingText.into();
        };

        match state.echo.reflect(text, debug_requested).await {
            Ok(reflection) => EchoReply::Reflection(reflection),
            Err(failure) => {
                EchoReply::Failure(StatusCode::INTERNAL_SERVER_ERROR, failure.into())
            }
        }
    }
    .instrument(span)
    .await
}

/// GET /api/echo/health
pub(super) async fn handle_health(State(state): State<AppState>) -> EchoReply {
    EchoReply::Status(StatusReport::from_config(&state.config))
}

/// OPTIONS /api/echo
pub(super) async fn handle_preflight() -> EchoReply {
    EchoReply::Preflight
}

pub(super) async fn handle_method_not_allowed() -> EchoReply {
    RequestError::MethodNotAllowed.into()
}
