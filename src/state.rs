// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::profile::ProfileContext;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state. Nothing here changes after startup.
pub struct AppState {
    pub config: Config,
    pub provider: GeminiClient,
    pub preamble: String,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_profile(config, &ProfileContext::builtin())
    }

    pub fn with_profile(config: Config, profile: &ProfileContext) -> Self {
        let provider = GeminiClient::new(config.api_base.clone(), config.model.clone());
        Self {
            preamble: profile.render_preamble(),
            provider,
            config,
        }
    }
}
