use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub const EMAIL_MARKER: &str = "[redacted-email]";
pub const PHONE_MARKER: &str = "[redacted-phone]";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("valid email regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s\-().]{6,}\d").expect("valid phone regex"));

/// Mask email- and phone-shaped substrings before text leaves the process.
///
/// Best effort only. Emails are masked first so the digits inside an
/// address never turn into a phone marker.
pub fn redact_pii(text: &str) -> Cow<'_, str> {
    match EMAIL_RE.replace_all(text, EMAIL_MARKER) {
        Cow::Borrowed(unchanged) => PHONE_RE.replace_all(unchanged, PHONE_MARKER),
        Cow::Owned(masked) => Cow::Owned(PHONE_RE.replace_all(&masked, PHONE_MARKER).into_owned()),
    }
}
