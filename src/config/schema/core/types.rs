use super::super::{EchoConfig, GatewayConfig, HuggingFaceConfig, OpenAiConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-wide configuration, loaded once at startup and handed to the
/// gateway explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path the config was read from, if any - not serialized
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub echo: EchoConfig,

    #[serde(default)]
    pub openai: OpenAiConfig,

    #[serde(default)]
    pub huggingface: HuggingFaceConfig,
}

impl Config {
    pub fn has_openai_key(&self) -> bool {
        self.openai.api_key().is_some()
    }

    pub fn has_huggingface_key(&self) -> bool {
        self.huggingface.api_key().is_some()
    }
}
