use super::Config;
use crate::error::{ConfigError, EchoError};
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = ".kindred-echo";
const CONFIG_FILE_NAME: &str = "config.toml";

impl Config {
    /// `~/.kindred-echo/config.toml`, when a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        UserDirs::new().map(|dirs| {
            dirs.home_dir()
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME)
        })
    }

    /// Load configuration once for the whole process.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise. Environment overrides
    /// are layered on top and the result is validated.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path().filter(|path| path.exists()) {
                Some(path) => Self::load_from(&path)?,
                None => {
                    tracing::debug!("no config file found, using built-in defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::Io)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(e.to_string()))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        let origin = self.gateway.allowed_origin.trim();
        if origin.is_empty() || HeaderValue::from_str(origin).is_err() {
            return Err(invalid(format!(
                "gateway.allowed_origin is not a valid header value: {origin:?}"
            )));
        }

        validate_api_base("openai.api_base", &self.openai.api_base)?;
        validate_api_base("huggingface.api_base", &self.huggingface.api_base)?;

        if self.openai.max_tokens == 0 {
            return Err(invalid("openai.max_tokens must be greater than zero"));
        }
        if self.huggingface.max_new_tokens == 0 {
            return Err(invalid(
                "huggingface.max_new_tokens must be greater than zero",
            ));
        }
        if self.echo.provider_timeout_secs == 0 {
            return Err(invalid(
                "echo.provider_timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> EchoError {
    ConfigError::Validation(message.into()).into()
}

fn validate_api_base(field: &str, value: &str) -> std::result::Result<(), ConfigError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::Validation(format!("{field} is not a valid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Validation(format!(
            "{field} must use http or https, got {other}"
        ))),
    }
}
