use serde::{Deserialize, Serialize};

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_HF_API_BASE: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_HF_MODEL: &str = "tiiuae/falcon-7b-instruct";

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_openai_api_base")]
    pub api_base: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_max_tokens")]
    pub max_tokens: u32,
}

fn default_openai_api_base() -> String {
    DEFAULT_OPENAI_API_BASE.into()
}

fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}

fn default_openai_max_tokens() -> u32 {
    300
}

impl OpenAiConfig {
    /// Configured credential, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_ref())
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_openai_api_base(),
            model: default_openai_model(),
            max_tokens: default_openai_max_tokens(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_hf_api_base")]
    pub api_base: String,
    #[serde(default = "default_hf_model")]
    pub model: String,
    #[serde(default = "default_hf_max_new_tokens")]
    pub max_new_tokens: u32,
}

fn default_hf_api_base() -> String {
    DEFAULT_HF_API_BASE.into()
}

fn default_hf_model() -> String {
    DEFAULT_HF_MODEL.into()
}

fn default_hf_max_new_tokens() -> u32 {
    120
}

impl HuggingFaceConfig {
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_ref())
    }
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_hf_api_base(),
            model: default_hf_model(),
            max_new_tokens: default_hf_max_new_tokens(),
        }
    }
}
