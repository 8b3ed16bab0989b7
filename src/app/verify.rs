//! Post-deploy smoke check against a running echo endpoint.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub url: String,
    pub text: String,
    pub expect_model: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// A reflection from a model matching the expectation.
    Live { model: String, reflection: String },
    /// The endpoint answered, but with a mock or unexpected payload.
    Degraded { body: Value },
}

impl VerifyOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Live { .. })
    }
}

/// POST the probe text and classify the answer.
///
/// Transport failures and non-2xx statuses are errors; a 2xx answer that is
/// not from the expected model is a [`VerifyOutcome::Degraded`].
pub async fn verify_deployment(client: &Client, options: &VerifyOptions) -> Result<VerifyOutcome> {
    let response = client
        .post(&options.url)
        .json(&serde_json::json!({ "text": options.text }))
        .send()
        .await
        .with_context(|| format!("POST {}", options.url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("API returned HTTP {}", status.as_u16());
    }

    let body: Value = response
        .json()
        .await
        .context("decode echo response body")?;

    let reflection = body
        .get("reflection")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty());
    let model = body
        .get("model")
        .and_then(Value::as_str)
        .filter(|model| model.contains(&options.expect_model));

    Ok(match (reflection, model) {
        (Some(reflection), Some(model)) => VerifyOutcome::Live {
            model: model.to_string(),
            reflection: reflection.to_string(),
        },
        _ => VerifyOutcome::Degraded { body },
    })
}
