use super::mode::{EchoMode, effective_mode};
use crate::config::Config;
use serde::Serialize;

/// Body of `GET /api/echo/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    #[serde(rename = "hasOpenAIKey")]
    pub has_openai_key: bool,
    #[serde(rename = "hasHuggingFaceKey")]
    pub has_huggingface_key: bool,
    /// Raw configured toggle, unsanitized.
    #[serde(rename = "echoMode")]
    pub echo_mode: Option<String>,
    pub mode: EchoMode,
}

impl StatusReport {
    pub fn from_config(config: &Config) -> Self {
        Self {
            has_openai_key: config.has_openai_key(),
            has_huggingface_key: config.has_huggingface_key(),
            echo_mode: config.echo.mode.clone(),
            mode: effective_mode(config),
        }
    }
}
