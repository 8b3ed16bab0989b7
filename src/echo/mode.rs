use crate::config::Config;
use serde::Serialize;

/// Whether upstream providers are called at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EchoMode {
    Mock,
    Live,
}

/// Strip surrounding whitespace and quotes from a raw mode toggle and
/// lower-case it, so `"MOCK"` from a dashboard still counts.
pub fn sanitize_mode(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c.is_whitespace())
        .to_ascii_lowercase()
}

/// The operator override, if the toggle names a known mode.
pub fn resolve_override(raw: Option<&str>) -> Option<EchoMode> {
    raw.map(sanitize_mode)
        .and_then(|value| value.parse::<EchoMode>().ok())
}

/// Mode reported by the health endpoint: override first, otherwise live
/// exactly when an OpenAI credential is present.
pub fn effective_mode(config: &Config) -> EchoMode {
    resolve_override(config.echo.mode.as_deref()).unwrap_or(if config.has_openai_key() {
        EchoMode::Live
    } else {
        EchoMode::Mock
    })
}
