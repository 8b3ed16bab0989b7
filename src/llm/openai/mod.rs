pub(super) mod types;

use super::scrub::api_error;
use super::traits::{Provider, ProviderFuture};
use super::types::{Completion, CompletionRequest};
use crate::config::OpenAiConfig;
use crate::error::ProviderError;
use reqwest::Client;
use types::{ChatRequest, ChatResponse, Message};

const PROVIDER_NAME: &str = "OpenAI";

pub struct OpenAiProvider {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    chat_completions_url: String,
    model: String,
    max_tokens: u32,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(
        api_key: Option<&str>,
        api_base: &str,
        model: &str,
        max_tokens: u32,
        client: Client,
    ) -> Self {
        Self {
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            chat_completions_url: format!("{}/chat/completions", api_base.trim_end_matches('/')),
            model: model.to_string(),
            max_tokens,
            client,
        }
    }

    pub fn from_config(config: &OpenAiConfig, client: Client) -> Self {
        Self::new(
            config.api_key(),
            &config.api_base,
            &config.model,
            config.max_tokens,
            client,
        )
    }

    fn build_request(
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        max_tokens: u32,
    ) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);

        if let Some(sys) = system_prompt {
            messages.push(Message {
                role: "system",
                content: sys.to_string(),
            });
        }

        messages.push(Message {
            role: "user",
            content: message.to_string(),
        });

        ChatRequest {
            model: model.to_string(),
            messages,
            max_tokens,
        }
    }

    fn extract_completion(
        chat_response: ChatResponse,
        fallback_model: &str,
    ) -> Result<Completion, ProviderError> {
        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyOutput {
                provider: PROVIDER_NAME,
            })?;

        Ok(Completion {
            text,
            model: chat_response
                .model
                .unwrap_or_else(|| fallback_model.to_string()),
        })
    }

    async fn call_api(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError> {
        let auth_header = self
            .cached_auth_header
            .as_ref()
            .ok_or(ProviderError::MissingApiKey {
                provider: PROVIDER_NAME,
            })?;

        let response = self
            .client
            .post(&self.chat_completions_url)
            .header("Authorization", auth_header)
            .json(request)
            .send()
            .await
            .map_err(|error| ProviderError::Request {
                provider: PROVIDER_NAME,
                message: error.without_url().to_string(),
            })?;

        if !response.status().is_success() {
            return Err(api_error(PROVIDER_NAME, response).await);
        }

        response
            .json()
            .await
            .map_err(|error| ProviderError::Decode {
                provider: PROVIDER_NAME,
                message: error.without_url().to_string(),
            })
    }
}

impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn complete<'a>(&'a self, request: CompletionRequest<'a>) -> ProviderFuture<'a> {
        Box::pin(async move {
            let chat_request = Self::build_request(
                request.system_prompt,
                request.prompt,
                &self.model,
                self.max_tokens,
            );
            let chat_response = self.call_api(&chat_request).await?;
            Self::extract_completion(chat_response, &self.model)
        })
    }
}
