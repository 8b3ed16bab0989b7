use super::types::{Completion, CompletionRequest};
use crate::error::ProviderError;
use std::future::Future;
use std::pin::Pin;

pub type ProviderFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Completion, ProviderError>> + Send + 'a>>;

/// An upstream text-generation backend.
///
/// Implementations make exactly one HTTP call per `complete` and never
/// retry; the reflection pipeline owns fallback ordering.
pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "openai", "huggingface").
    fn name(&self) -> &str;

    /// Model the provider is configured to call.
    fn model(&self) -> &str;

    fn complete<'a>(&'a self, request: CompletionRequest<'a>) -> ProviderFuture<'a>;
}
