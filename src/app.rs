//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{AnalysisService, LlmGenerator};

/// Environment variable for the OpenAI API key
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Application state containing all services and shared resources
pub struct AppState {
    /// Trigger content analysis service
    pub analysis_service: AnalysisService,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. LLM generator initialization (requires OPENAI_API_KEY)
    /// 2. Analysis service construction around the shared generator
    pub fn new(config: Config) -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_OPENAI_API_KEY)
            .map_err(|_| AppError::MissingConfig(ENV_OPENAI_API_KEY))?;

        let generator = LlmGenerator::new(&api_key, config.analysis.clone())
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        let analysis_service = AnalysisService::new(Arc::new(generator), config.analysis);

        Ok(Self { analysis_service })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
