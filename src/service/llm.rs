//! Model invocation seam and the rig-backed production generator.
//!
//! The analysis pipeline only depends on the [`TextGenerator`] trait, so
//! tests can substitute a scripted backend for the real one.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

use crate::model::AnalysisConfig;
use crate::service::analysis::prompts::ANALYSIS_SYSTEM_PROMPT;

/// Environment variable overriding the analysis model
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Default model for trigger analysis
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// Rough character budget per input token, used to enforce
/// `max_input_tokens` without a client-side tokenizer
const APPROX_CHARS_PER_TOKEN: u64 = 4;

/// Error type for text generation
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Failed to create LLM client: {0}")]
    ClientBuild(String),

    #[error("Text generation failed: {0}")]
    GenerationFailed(String),
}

/// Trait for model backends that turn a prompt into generated text.
///
/// Implementations are treated as blocking and non-reentrant per instance;
/// callers issue one `generate` at a time.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Production generator backed by the OpenAI provider
pub struct LlmGenerator {
    client: openai::Client,
    model: String,
    config: AnalysisConfig,
}

impl LlmGenerator {
    /// Create a generator with the provided API key.
    ///
    /// The model is taken from `ANALYSIS_MODEL` (defaults to gpt-4o-mini);
    /// sampling parameters come from the analysis configuration.
    pub fn new(api_key: &str, config: AnalysisConfig) -> Result<Self, GenerationError> {
        let client = openai::Client::new(api_key);

        let model =
            std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(model = %model, "LLM generator initialized");

        Ok(Self {
            client,
            model,
            config,
        })
    }

    fn input_budget_chars(&self) -> usize {
        (self.config.max_input_tokens * APPROX_CHARS_PER_TOKEN) as usize
    }
}

#[async_trait]
impl TextGenerator for LlmGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let start = std::time::Instant::now();

        // Enforce the input budget, keeping the head of the prompt
        let budget = self.input_budget_chars();
        let prompt: String = if prompt.chars().count() > budget {
            tracing::warn!(
                budget_chars = budget,
                prompt_chars = prompt.chars().count(),
                "Prompt exceeds input budget, truncating"
            );
            prompt.chars().take(budget).collect()
        } else {
            prompt.to_string()
        };

        let agent = self
            .client
            .agent(&self.model)
            .preamble(ANALYSIS_SYSTEM_PROMPT)
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_output_tokens)
            .additional_params(serde_json::json!({
                "top_p": self.config.top_p,
                "repetition_penalty": self.config.repetition_penalty,
            }))
            .build();

        match agent.prompt(prompt.as_str()).await {
            Ok(output) => {
                tracing::debug!(
                    model = %self.model,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    output_length = output.len(),
                    "Generation completed"
                );
                Ok(output)
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "Generation failed"
                );
                Err(GenerationError::GenerationFailed(e.to_string()))
            }
        }
    }
}
