use crate::echo::{ErrorBody, ReflectionResponse, StatusReport};
use crate::error::RequestError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Every outcome an echo route can produce.
///
/// All variants except `Preflight` render a JSON body; CORS headers are
/// added by the router layers, not here.
#[derive(Debug)]
pub enum EchoReply {
    Reflection(ReflectionResponse),
    Status(StatusReport),
    Failure(StatusCode, ErrorBody),
    Preflight,
}

impl EchoReply {
    pub fn failure(status: StatusCode, error: impl Into<String>) -> Self {
        Self::Failure(status, ErrorBody::new(error))
    }
}

impl From<RequestError> for EchoReply {
    fn from(error: RequestError) -> Self {
        Self::failure(error.status(), error.to_string())
    }
}

impl IntoResponse for EchoReply {
    fn into_response(self) -> Response {
        match self {
            Self::Reflection(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Status(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Failure(status, body) => (status, Json(body)).into_response(),
            Self::Preflight => StatusCode::NO_CONTENT.into_response(),
        }
    }
}
