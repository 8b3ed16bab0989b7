// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod scrub;
pub mod traits;
pub mod types;

// ── Provider construction ───────────────────────────────────────────────────
pub mod factory;

// ── Provider implementations ────────────────────────────────────────────────
pub mod huggingface;
pub mod openai;

pub use factory::{ProviderSet, create_providers};
pub use http_client::{build_provider_client, build_provider_client_with_timeout};
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::{Provider, ProviderFuture};
pub use types::{Completion, CompletionRequest};

pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;
