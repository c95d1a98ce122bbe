// src/services/gemini.rs
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{error::AppError, lenient};

pub const NO_ANSWER_PLACEHOLDER: &str = "⚠️ ไม่มีคำตอบจาก Gemini";

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn carrying `text`.
    pub fn user_turn(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: Some(vec![Part { text: Some(text.into()) }]),
            }],
        }
    }
}

// Decoding is lenient throughout: a field of the wrong type reads as absent.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "lenient::option")]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Decodes a provider body. Fails only when the body isn't JSON; any JSON
    /// other than an object is an empty response.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if value.is_object() {
            serde_json::from_value(value)
        } else {
            Ok(Self::default())
        }
    }

    /// Joined text of the first candidate's parts, or `None` when the
    /// response carries no first candidate with parts.
    pub fn first_text(&self) -> Option<String> {
        let parts = self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?;
        Some(
            parts
                .iter()
                .map(|p| p.text.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    pub fn text_or_placeholder(&self) -> String {
        self.first_text()
            .unwrap_or_else(|| NO_ANSWER_PLACEHOLDER.to_string())
    }
}

/// Thin client for the `generateContent` endpoint. Cloning shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// One attempt, no retry. Non-2xx answers become `AppError::Upstream`
    /// with the body untouched.
    pub async fn generate(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AppError> {
        let resp = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.without_url()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AppError::Transport(e.without_url()))?;

        if !status.is_success() {
            warn!(%status, model = %self.model, "provider returned an error");
            return Err(AppError::Upstream { status, body });
        }

        debug!(%status, bytes = body.len(), "provider answered");
        GenerateContentResponse::from_body(&body).map_err(AppError::Decode)
    }
}
