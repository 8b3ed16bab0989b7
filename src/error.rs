use reqwest::StatusCode;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Kindred Echo.
///
/// Library code returns these typed errors so the gateway can decide between
/// a fallback reflection and an error response; binary glue uses
/// `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum EchoError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("provider: {0}")]
    Provider(#[from] ProviderError),

    // ── Inbound request ─────────────────────────────────────────────────
    #[error("request: {0}")]
    Request(#[from] RequestError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} API key not set")]
    MissingApiKey { provider: &'static str },

    #[error("{provider} request failed: {message}")]
    Request {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} API error ({status}): {body}")]
    Status {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("{provider} response decode failed: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned an empty completion")]
    EmptyOutput { provider: &'static str },
}

impl ProviderError {
    pub fn provider(&self) -> &'static str {
        match self {
            Self::MissingApiKey { provider }
            | Self::Request { provider, .. }
            | Self::Status { provider, .. }
            | Self::Decode { provider, .. }
            | Self::EmptyOutput { provider } => provider,
        }
    }

    /// HTTP status reported by the upstream, when the transport exposed one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this failure means the account is out of quota or throttled.
    ///
    /// A structured 429 wins; the message scan only covers text the upstream
    /// itself sent, never transport errors.
    pub fn is_quota_or_rate_limit(&self) -> bool {
        match self {
            Self::Status { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS => true,
            Self::Status { body, .. } => message_indicates_quota(body),
            Self::Decode { message, .. } => message_indicates_quota(message),
            Self::MissingApiKey { .. } | Self::Request { .. } | Self::EmptyOutput { .. } => false,
        }
    }
}

/// Case-insensitive scan for quota and rate-limit wording.
pub fn message_indicates_quota(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("quota")
        || lower.contains("insufficient_quota")
        || lower.contains("429")
        || lower.contains("rate limit")
}

// ─── Inbound request errors ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid request JSON")]
    InvalidJson,

    #[error("Missing text field in body")]
    MissingText,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request body too large")]
    PayloadTooLarge,
}

impl RequestError {
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidJson | Self::MissingText => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, EchoError>;
