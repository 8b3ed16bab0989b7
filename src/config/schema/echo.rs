use serde::{Deserialize, Serialize};

/// When internal failure detail (the Hugging Face error, the quota reason)
/// may appear in a response body.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DebugDisclosure {
    #[default]
    Off,
    /// Only when the caller asks with `?debug=1`.
    OnRequest,
    Always,
}

impl DebugDisclosure {
    /// Interpret an `ECHO_DEBUG`-style value.
    ///
    /// Any non-empty value other than an explicit "off" spelling turns
    /// disclosure on; `request` limits it to callers that ask for it.
    pub fn from_env_value(raw: &str) -> Self {
        let value = raw.trim().to_ascii_lowercase();
        match value.as_str() {
            "" | "0" | "false" | "off" | "no" => Self::Off,
            "request" | "on-request" | "on_request" => Self::OnRequest,
            _ => Self::Always,
        }
    }

    pub fn allows(self, caller_requested: bool) -> bool {
        match self {
            Self::Off => false,
            Self::OnRequest => caller_requested,
            Self::Always => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoConfig {
    /// Raw operator mode toggle (`mock` | `live`); kept verbatim for the
    /// health report.
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub debug: DebugDisclosure,
    /// Timeout applied by the provider HTTP client (seconds)
    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,
}

fn default_provider_timeout_secs() -> u64 {
    120
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            mode: None,
            debug: DebugDisclosure::Off,
            provider_timeout_secs: default_provider_timeout_secs(),
        }
    }
}
