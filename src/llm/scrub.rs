use crate::error::ProviderError;
use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Markers after which a credential-shaped token is expected.
///
/// Only the credential families this service handles, plus the header and
/// query shapes upstream error bodies echo back.
const SECRET_MARKERS: [&str; 12] = [
    "sk-",
    "hf_",
    "eyJ",
    "Bearer ",
    "bearer ",
    "api_key=",
    "access_token=",
    "token=",
    "\"api_key\":\"",
    "\"access_token\":\"",
    "\"token\":\"",
    "\"authorization\":\"",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

/// Replace every `<marker><token>` occurrence; returns the rewritten text
/// only when something was found.
fn redact_after(input: &str, marker: &str) -> Option<String> {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    let mut changed = false;

    while let Some(at) = rest.find(marker) {
        let value_start = at + marker.len();
        let token_len: usize = rest[value_start..]
            .chars()
            .take_while(|c| is_secret_char(*c))
            .map(char::len_utf8)
            .sum();

        if token_len == 0 {
            output.push_str(&rest[..value_start]);
        } else {
            output.push_str(&rest[..at]);
            output.push_str(REDACTED);
            changed = true;
        }
        rest = &rest[value_start + token_len..];
    }

    changed.then(|| {
        output.push_str(rest);
        output
    })
}

/// Scrub credential-like tokens (`sk-...`, `hf_...`, bearer headers) from
/// text that may end up in logs or a response body.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(input);
    for marker in SECRET_MARKERS {
        if !current.contains(marker) {
            continue;
        }
        if let Some(rewritten) = redact_after(&current, marker) {
            current = Cow::Owned(rewritten);
        }
    }
    current
}

/// Sanitize API error text by scrubbing secrets and truncating length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    match scrubbed.char_indices().nth(MAX_API_ERROR_CHARS) {
        None => scrubbed.into_owned(),
        Some((cut, _)) => format!("{}...", &scrubbed[..cut]),
    }
}

/// Build a sanitized provider error from a failed HTTP response.
pub async fn api_error(provider: &'static str, response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read provider error body>".to_string());
    ProviderError::Status {
        provider,
        status,
        body: sanitize_api_error(body.trim()),
    }
}
