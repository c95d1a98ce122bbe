// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(deserialize_with = "lenient_role")]
    pub role: Role,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "lenient_messages")]
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Decodes a raw request body. Only a body that isn't JSON at all, or is
    /// `null`, is rejected; any other shape yields an empty history.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        match value {
            serde_json::Value::Object(_) => serde_json::from_value(value),
            serde_json::Value::Null => Err(serde::de::Error::custom("request body is null")),
            _ => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Any role present counts; only "user" and "assistant" are told apart.
fn lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some("user") => Role::User,
        Some("assistant") => Role::Assistant,
        _ => Role::Other,
    })
}

// Anything that isn't an array becomes an empty history. Entries that aren't
// objects, or have no role, are dropped.
fn lenient_messages<'de, D>(deserializer: D) -> Result<Vec<ChatMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
