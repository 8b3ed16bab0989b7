use super::mode::{EchoMode, resolve_override};
use super::prompt::{SYSTEM_PROMPT, chat_prompt, inference_prompt, normalize_reflection};
use super::redact::redact_pii;
use super::types::{ErrorBody, ReflectionResponse, ReflectionSource};
use crate::config::{Config, DebugDisclosure};
use crate::error::ProviderError;
use crate::llm::{CompletionRequest, Provider, ProviderSet, create_providers};

/// Reason attached to a quota downgrade when debug disclosure applies.
pub const QUOTA_FALLBACK_REASON: &str = "openai_insufficient_quota";

/// A reflection that could not be produced and has no safe default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionFailure {
    pub error: String,
    pub hf_error: Option<String>,
}

impl From<ReflectionFailure> for ErrorBody {
    fn from(failure: ReflectionFailure) -> Self {
        Self {
            error: failure.error,
            hf_error: failure.hf_error,
        }
    }
}

/// The reflection pipeline: redaction, mode gate and provider fallback.
///
/// Built once from [`Config`]; holds no per-request state.
#[derive(Debug, Clone)]
pub struct EchoService {
    mode_override: Option<EchoMode>,
    debug: DebugDisclosure,
    providers: ProviderSet,
}

impl EchoService {
    pub fn new(
        mode_override: Option<EchoMode>,
        debug: DebugDisclosure,
        providers: ProviderSet,
    ) -> Self {
        Self {
            mode_override,
            debug,
            providers,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            resolve_override(config.echo.mode.as_deref()),
            config.echo.debug,
            create_providers(config),
        )
    }

    /// Produce a reflection for `text`.
    ///
    /// Quota exhaustion is absorbed into the mock reflection; any other
    /// OpenAI failure is returned as a [`ReflectionFailure`].
    pub async fn reflect(
        &self,
        text: &str,
        debug_requested: bool,
    ) -> Result<ReflectionResponse, ReflectionFailure> {
        if self.mode_override == Some(EchoMode::Mock) {
            tracing::debug!("mock mode forced, skipping providers");
            return Ok(ReflectionResponse::mock());
        }

        let disclose = self.debug.allows(debug_requested);
        let clean = redact_pii(text);

        let mut hf_error = None;
        if let Some(hf) = &self.providers.huggingface {
            let prompt = inference_prompt(&clean);
            match attempt(hf.as_ref(), "HuggingFace", CompletionRequest::new(&prompt)).await {
                Ok((reflection, model)) => {
                    tracing::info!(model = %model, "reflection from huggingface");
                    return Ok(ReflectionResponse::from_provider(
                        reflection,
                        model,
                        ReflectionSource::HuggingFace,
                    ));
                }
                Err(error) => {
                    tracing::warn!(
                        provider = error.provider(),
                        error = %error,
                        "huggingface failed, falling back"
                    );
                    hf_error = Some(error.to_string());
                }
            }
        }
        let hf_error = hf_error.filter(|_| disclose);

        let Some(openai) = &self.providers.openai else {
            tracing::info!("no OpenAI credential, returning mock reflection");
            return Ok(ReflectionResponse {
                hf_error,
                ..ReflectionResponse::mock()
            });
        };

        let prompt = chat_prompt(&clean);
        let request = CompletionRequest::new(&prompt).with_system(SYSTEM_PROMPT);
        match attempt(openai.as_ref(), "OpenAI", request).await {
            Ok((reflection, model)) => {
                tracing::info!(model = %model, "reflection from openai");
                Ok(ReflectionResponse::from_provider(
                    reflection,
                    model,
                    ReflectionSource::OpenAi,
                ))
            }
            Err(error) if error.is_quota_or_rate_limit() => {
                tracing::warn!(
                    provider = error.provider(),
                    error = %error,
                    "openai quota exhausted, serving mock fallback"
                );
                Ok(ReflectionResponse {
                    fallback: Some(true),
                    reason: disclose.then(|| QUOTA_FALLBACK_REASON.to_string()),
                    hf_error,
                    ..ReflectionResponse::mock()
                })
            }
            Err(error) => {
                tracing::error!(provider = error.provider(), error = %error, "openai failed");
                Err(ReflectionFailure {
                    error: error.to_string(),
                    hf_error,
                })
            }
        }
    }
}

/// One provider call with output normalization. Text that is empty once
/// control characters are gone counts as a failure.
async fn attempt(
    provider: &dyn Provider,
    label: &'static str,
    request: CompletionRequest<'_>,
) -> Result<(String, String), ProviderError> {
    tracing::debug!(provider = provider.name(), model = provider.model(), "calling provider");
    let completion = provider.complete(request).await?;
    let reflection = normalize_reflection(&completion.text);
    if reflection.is_empty() {
        return Err(ProviderError::EmptyOutput { provider: label });
    }
    Ok((reflection, completion.model))
}
