use super::prompt::{MOCK_MODEL, MOCK_REFLECTION};
use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound body of `POST /api/echo`.
///
/// `text` is kept as raw JSON so a missing, null or non-string value can be
/// told apart from a malformed body.
#[derive(Debug, Default)]
pub struct ReflectionRequest {
    pub text: Option<Value>,
}

impl ReflectionRequest {
    /// Parse a raw request body. An empty body reads as `{}`; any valid JSON
    /// that is not an object simply has no `text`.
    pub fn from_body(body: &[u8]) -> Result<Self, RequestError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body).map_err(|_| RequestError::InvalidJson)?;
        Ok(Self {
            text: value.get("text").cloned(),
        })
    }

    /// The text to reflect on, when it is a non-empty string.
    pub fn text(&self) -> Option<&str> {
        self.text
            .as_ref()
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflectionSource {
    #[serde(rename = "huggingface")]
    HuggingFace,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Safety {
    pub flagged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionResponse {
    pub reflection: String,
    pub model: String,
    pub tokens_used: u32,
    pub safety: Safety,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ReflectionSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hf_error: Option<String>,
}

impl ReflectionResponse {
    pub fn mock() -> Self {
        Self {
            reflection: MOCK_REFLECTION.to_string(),
            model: MOCK_MODEL.to_string(),
            tokens_used: 0,
            safety: Safety::default(),
            source: None,
            fallback: None,
            reason: None,
            hf_error: None,
        }
    }

    pub fn from_provider(reflection: String, model: String, source: ReflectionSource) -> Self {
        Self {
            reflection,
            model,
            source: Some(source),
            ..Self::mock()
        }
    }

    pub fn is_mock(&self) -> bool {
        self.model == MOCK_MODEL
    }
}

/// JSON body of every non-2xx echo response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hf_error: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            hf_error: None,
        }
    }
}
