// src/services/relay.rs
use tracing::debug;

use crate::{
    error::AppError,
    message::{ChatMessage, Role},
    services::gemini::{GeminiClient, GenerateContentRequest},
};

const USER_LABEL: &str = "USER MESSAGE: ";
const CLOSING_INSTRUCTION: &str =
    "Please respond as AI assistant using the information provided above.";

/// Content of the last user turn, or `""` if there is none.
pub fn latest_user_message(messages: &[ChatMessage]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .unwrap_or("")
}

pub fn build_prompt(preamble: &str, user_msg: &str) -> String {
    format!("{preamble}\n\n{USER_LABEL}{user_msg}\n\n{CLOSING_INSTRUCTION}")
}

/// Runs one relay round trip and returns the text for the caller.
///
/// An empty history is not rejected: the provider is still asked, with an
/// empty user message.
pub async fn relay(
    client: &GeminiClient,
    api_key: Option<&str>,
    preamble: &str,
    messages: &[ChatMessage],
) -> Result<String, AppError> {
    let api_key = api_key.ok_or(AppError::MissingApiKey)?;

    let user_msg = latest_user_message(messages);
    debug!(history = messages.len(), user_chars = user_msg.chars().count(), "relaying chat turn");

    let request = GenerateContentRequest::user_turn(build_prompt(preamble, user_msg));
    let response = client.generate(api_key, &request).await?;

    Ok(response.text_or_placeholder())
}
