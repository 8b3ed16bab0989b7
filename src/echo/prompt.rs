//! Prompt text and the canned reflection.

/// Persona sent as the OpenAI system message.
pub const SYSTEM_PROMPT: &str = "You are Echo, a gentle, empathetic assistant. Keep replies brief, non-judgmental, and supportive.";

/// Returned whenever no live provider produced text.
pub const MOCK_REFLECTION: &str = "I hear you — it sounds like you're carrying a lot. Remember, it's okay to feel this way; you're doing your best and that matters.";

pub const MOCK_MODEL: &str = "mock";

/// User prompt for the chat completion call. `clean` must already be redacted.
pub fn chat_prompt(clean: &str) -> String {
    format!(
        "Read the user's reflection and produce a short compassionate reflection \
         (1-3 sentences) in a gentle tone. User text:\n\n{clean}\n\n\
         Respond empathetically and non-judgmentally."
    )
}

/// Single flat input for Hugging Face text generation.
pub fn inference_prompt(clean: &str) -> String {
    format!("Respond compassionately to this reflection:\n{clean}")
}

/// Trim and drop control characters other than newline and tab.
pub fn normalize_reflection(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect();
    kept.trim().to_string()
}
