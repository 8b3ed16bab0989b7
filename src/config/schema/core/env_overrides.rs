use super::super::DebugDisclosure;
use super::Config;

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Layer deployment environment variables over the file config.
    ///
    /// Empty values are ignored so an exported-but-blank variable never
    /// clears a configured credential.
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = env_non_empty("OPENAI_API_KEY") {
            self.openai.api_key = Some(key);
        }

        if let Some(base) = env_non_empty("OPENAI_API_BASE") {
            self.openai.api_base = base;
        }

        if let Some(model) = env_non_empty("OPENAI_MODEL") {
            self.openai.model = model;
        }

        if let Some(key) = env_non_empty("HUGGINGFACE_API_KEY") {
            self.huggingface.api_key = Some(key);
        }

        if let Some(model) = env_non_empty("HF_MODEL") {
            self.huggingface.model = model;
        }

        if let Some(base) = env_non_empty("HF_API_BASE") {
            self.huggingface.api_base = base;
        }

        // Kept raw: the health report echoes the operator's exact value.
        if let Ok(mode) = std::env::var("ECHO_MODE")
            && !mode.trim().is_empty()
        {
            self.echo.mode = Some(mode);
        }

        if let Ok(debug) = std::env::var("ECHO_DEBUG") {
            self.echo.debug = DebugDisclosure::from_env_value(&debug);
        }

        if let Some(origin) = env_non_empty("ALLOWED_ORIGIN") {
            self.gateway.allowed_origin = origin;
        }

        if let Some(port_str) = env_non_empty("DEV_SERVER_PORT").or_else(|| env_non_empty("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Some(host) = env_non_empty("HOST") {
            self.gateway.host = host;
        }
    }
}
