//! The reflection pipeline behind `/api/echo`.
//!
//! Text is redacted, then offered to Hugging Face, then OpenAI, with the
//! canned mock reflection as the floor whenever no live answer exists.

pub mod mode;
pub mod prompt;
pub mod redact;
pub mod service;
pub mod status;
pub mod types;

pub use mode::{EchoMode, effective_mode, resolve_override, sanitize_mode};
pub use prompt::{MOCK_MODEL, MOCK_REFLECTION, SYSTEM_PROMPT};
pub use redact::redact_pii;
pub use service::{EchoService, QUOTA_FALLBACK_REASON, ReflectionFailure};
pub use status::StatusReport;
pub use types::{ErrorBody, ReflectionRequest, ReflectionResponse, ReflectionSource, Safety};
