use super::scrub::api_error;
use super::traits::{Provider, ProviderFuture};
use super::types::{Completion, CompletionRequest};
use crate::config::HuggingFaceConfig;
use crate::error::ProviderError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

const PROVIDER_NAME: &str = "HuggingFace";

/// Hugging Face router inference client for text-generation models.
pub struct HuggingFaceProvider {
    cached_auth_header: Option<String>,
    inference_url: String,
    model: String,
    max_new_tokens: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
}

impl HuggingFaceProvider {
    pub fn new(
        api_key: Option<&str>,
        api_base: &str,
        model: &str,
        max_new_tokens: u32,
        client: Client,
    ) -> Self {
        Self {
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            inference_url: format!("{}/{}", api_base.trim_end_matches('/'), model),
            model: model.to_string(),
            max_new_tokens,
            client,
        }
    }

    pub fn from_config(config: &HuggingFaceConfig, client: Client) -> Self {
        Self::new(
            config.api_key(),
            &config.api_base,
            &config.model,
            config.max_new_tokens,
            client,
        )
    }

    fn build_request(request: CompletionRequest<'_>, max_new_tokens: u32) -> InferenceRequest {
        // Text-generation endpoints take one flat input.
        InferenceRequest {
            inputs: request.prompt.to_string(),
            parameters: InferenceParameters { max_new_tokens },
        }
    }

    /// Pull generated text out of the shapes the router returns:
    /// `{"generated_text": ..}`, `[{"generated_text": ..}]`, or any other
    /// array whose first element is then used verbatim as JSON.
    fn extract_generated_text(payload: &Value) -> String {
        let non_empty = |value: Option<&Value>| {
            value
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        non_empty(payload.get("generated_text"))
            .or_else(|| {
                let first = payload.as_array()?.first()?;
                non_empty(first.get("generated_text")).or_else(|| Some(first.to_string()))
            })
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }
}

impl Provider for HuggingFaceProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn complete<'a>(&'a self, request: CompletionRequest<'a>) -> ProviderFuture<'a> {
        Box::pin(async move {
            let auth_header = self
                .cached_auth_header
                .as_ref()
                .ok_or(ProviderError::MissingApiKey {
                    provider: PROVIDER_NAME,
                })?;

            let body = Self::build_request(request, self.max_new_tokens);
            let response = self
                .client
                .post(&self.inference_url)
                .header("Authorization", auth_header)
                .json(&body)
                .send()
                .await
                .map_err(|error| ProviderError::Request {
                    provider: PROVIDER_NAME,
                    message: error.without_url().to_string(),
                })?;

            if !response.status().is_success() {
                return Err(api_error(PROVIDER_NAME, response).await);
            }

            let payload: Value = response.json().await.map_err(|error| ProviderError::Decode {
                provider: PROVIDER_NAME,
                message: error.without_url().to_string(),
            })?;

            let text = Self::extract_generated_text(&payload);
            if text.is_empty() {
                return Err(ProviderError::EmptyOutput {
                    provider: PROVIDER_NAME,
                });
            }

            Ok(Completion {
                text,
                model: self.model.clone(),
            })
        })
    }
}
