use axum::{Json, body::Bytes, extract::State};
use tracing::{error, warn};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::relay::relay,
    state::SharedState,
};

// Takes the raw body so that unparsable JSON maps to our 500 instead of
// axum's own rejection.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let result = async {
        let payload = ChatRequest::parse(&body).map_err(AppError::BadBody)?;
        relay(
            &state.provider,
            state.config.api_key.as_deref(),
            &state.preamble,
            &payload.messages,
        )
        .await
    }
    .await;

    match result {
        Ok(content) => Ok(Json(ChatResponse { content })),
        Err(AppError::MissingApiKey) => {
            warn!("GEMINI_API_KEY is not set, refusing chat request");
            Err(AppError::MissingApiKey)
        }
        // Already logged by the client.
        Err(err @ AppError::Upstream { .. }) => Err(err),
        Err(err) => {
            error!(error = %err, "chat relay failed");
            Err(err)
        }
    }
}
