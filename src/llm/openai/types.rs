use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(in crate::llm) struct ChatRequest {
    pub(in crate::llm) model: String,
    pub(in crate::llm) messages: Vec<Message>,
    pub(in crate::llm) max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(in crate::llm) struct Message {
    pub(in crate::llm) role: &'static str,
    pub(in crate::llm) content: String,
}

#[derive(Debug, Deserialize)]
pub(in crate::llm) struct ChatResponse {
    #[serde(default)]
    pub(in crate::llm) choices: Vec<Choice>,
    pub(in crate::llm) model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(in crate::llm) struct Choice {
    pub(in crate::llm) message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(in crate::llm) struct ResponseMessage {
    pub(in crate::llm) content: Option<String>,
}
