use super::http_client::build_provider_client_with_timeout;
use super::huggingface::HuggingFaceProvider;
use super::openai::OpenAiProvider;
use super::traits::Provider;
use crate::config::Config;
use std::sync::Arc;

/// The upstream backends available to the reflection pipeline.
///
/// A slot is filled only when its credential is configured; an empty slot
/// is how the pipeline knows to skip that step.
#[derive(Clone, Default)]
pub struct ProviderSet {
    pub huggingface: Option<Arc<dyn Provider>>,
    pub openai: Option<Arc<dyn Provider>>,
}

impl ProviderSet {
    pub fn is_empty(&self) -> bool {
        self.huggingface.is_none() && self.openai.is_none()
    }
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet")
            .field("huggingface", &self.huggingface.as_ref().map(|p| p.model()))
            .field("openai", &self.openai.as_ref().map(|p| p.model()))
            .finish()
    }
}

/// Build providers once at startup from the loaded config.
pub fn create_providers(config: &Config) -> ProviderSet {
    let client = build_provider_client_with_timeout(config.echo.provider_timeout_secs);

    let huggingface = config.has_huggingface_key().then(|| {
        Arc::new(HuggingFaceProvider::from_config(
            &config.huggingface,
            client.clone(),
        )) as Arc<dyn Provider>
    });

    let openai = config.has_openai_key().then(|| {
        Arc::new(OpenAiProvider::from_config(&config.openai, client.clone())) as Arc<dyn Provider>
    });

    let set = ProviderSet {
        huggingface,
        openai,
    };
    if set.is_empty() {
        tracing::info!("no provider credentials, reflections will use the mock");
    } else {
        tracing::debug!(providers = ?set, "reflection providers configured");
    }
    set
}
