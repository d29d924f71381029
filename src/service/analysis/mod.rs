//! Trigger content analysis pipeline.
//!
//! Windows the input text, prompts the model backend once per window,
//! parses each free-text answer into per-category verdicts, and folds the
//! verdicts into the final report.

use std::sync::Arc;
use std::time::Instant;

use crate::model::{AggregateReport, AnalysisConfig, Category, CategoryStatus};
use crate::service::llm::{GenerationError, TextGenerator};

pub mod aggregate;
pub mod chunker;
pub mod extraction;
pub mod prompts;
pub mod response;

use aggregate::aggregate_verdicts;
use chunker::{chunk_windows, InvalidWindow};
use extraction::extract_verdicts;
use prompts::build_analysis_prompt;
use response::locate_answer;

/// Error type for trigger analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Nothing to analyze
    #[error("Input text is empty")]
    EmptyInput,

    /// Window misconfiguration, surfaced immediately and never retried
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidWindow),

    /// Backend failure aborts the whole analysis; no partial report
    #[error("Model invocation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Service for screening text against the trigger categories
pub struct AnalysisService {
    generator: Arc<dyn TextGenerator>,
    config: AnalysisConfig,
}

impl AnalysisService {
    /// Creates an analysis service around an injected model backend
    pub fn new(generator: Arc<dyn TextGenerator>, config: AnalysisConfig) -> Self {
        Self { generator, config }
    }

    /// Analyze `text` for trigger content across all categories.
    ///
    /// Windows are processed strictly sequentially: the backend is shared
    /// and treated as non-reentrant, one generation call per window. Any
    /// backend failure aborts the analysis.
    pub async fn analyze(&self, text: &str) -> Result<AggregateReport, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let start = Instant::now();
        let windows = chunk_windows(text, self.config.chunk_size, self.config.chunk_overlap)?;
        let total = windows.len();

        tracing::info!(
            windows = total,
            text_chars = text.chars().count(),
            "Starting trigger analysis"
        );

        let mut vectors = Vec::with_capacity(total);
        for (idx, window) in windows.iter().enumerate() {
            let window_start = Instant::now();
            let prompt = build_analysis_prompt(window, &Category::ALL, self.config.preview_chars);
            let output = self.generator.generate(&prompt).await?;
            let answer = locate_answer(&output);

            tracing::debug!(
                window = idx + 1,
                total,
                answer_preview = %answer.chars().take(120).collect::<String>(),
                elapsed_ms = window_start.elapsed().as_millis() as u64,
                "Window analyzed"
            );

            vectors.push(extract_verdicts(answer, &Category::ALL));
        }

        let report = aggregate_verdicts(&vectors, &Category::ALL);

        tracing::info!(
            windows = total,
            confirmed = report
                .findings
                .iter()
                .filter(|f| f.status == CategoryStatus::Confirmed)
                .count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Trigger analysis completed"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Backend that replays scripted responses in order
    struct ScriptedGenerator {
        responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    }

    impl ScriptedGenerator {
        fn new(responses: Vec<Result<String, GenerationError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("generator called more times than scripted")
        }
    }

    fn all_no_response() -> String {
        Category::ALL
            .iter()
            .map(|c| format!("{}: NO", c.name()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn service(
        responses: Vec<Result<String, GenerationError>>,
        config: AnalysisConfig,
    ) -> AnalysisService {
        AnalysisService::new(ScriptedGenerator::new(responses), config)
    }

    fn finding<'a>(report: &'a AggregateReport, category: Category) -> &'a crate::model::CategoryFinding {
        report
            .findings
            .iter()
            .find(|f| f.category == category)
            .unwrap()
    }

    #[tokio::test]
    async fn single_window_all_no_reports_nothing_found() {
        let svc = service(vec![Ok(all_no_response())], AnalysisConfig::default());

        let report = svc.analyze("a short, uneventful scene").await.unwrap();

        assert_eq!(report.total_chunks, 1);
        for f in &report.findings {
            assert_eq!(f.status, CategoryStatus::NotFound);
            assert_eq!(f.confirmations, 0);
        }
    }

    #[tokio::test]
    async fn conflicting_windows_confirm_with_partial_count() {
        let config = AnalysisConfig {
            chunk_size: 16,
            chunk_overlap: 4,
            ..AnalysisConfig::default()
        };
        let svc = service(
            vec![Ok("VIOLENCE: YES".to_string()), Ok("VIOLENCE: NO".to_string())],
            config,
        );

        // 20 chars with a 12-char step: exactly two windows
        let report = svc.analyze("abcdefghijklmnopqrst").await.unwrap();

        assert_eq!(report.total_chunks, 2);
        let violence = finding(&report, Category::Violence);
        assert_eq!(violence.status, CategoryStatus::Confirmed);
        assert_eq!(violence.confirmations, 1);
    }

    #[tokio::test]
    async fn backend_failure_aborts_without_partial_report() {
        let config = AnalysisConfig {
            chunk_size: 16,
            chunk_overlap: 4,
            ..AnalysisConfig::default()
        };
        let svc = service(
            vec![
                Ok("VIOLENCE: YES".to_string()),
                Err(GenerationError::GenerationFailed("backend down".to_string())),
            ],
            config,
        );

        let err = svc.analyze("abcdefghijklmnopqrst").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Generation(_)));
    }

    #[tokio::test]
    async fn empty_input_is_rejected() {
        let svc = service(vec![], AnalysisConfig::default());

        assert!(matches!(
            svc.analyze("").await.unwrap_err(),
            AnalysisError::EmptyInput
        ));
        assert!(matches!(
            svc.analyze("   \n\t").await.unwrap_err(),
            AnalysisError::EmptyInput
        ));
    }

    #[tokio::test]
    async fn bad_window_config_is_fatal() {
        let config = AnalysisConfig {
            chunk_size: 8,
            chunk_overlap: 8,
            ..AnalysisConfig::default()
        };
        let svc = service(vec![], config);

        assert!(matches!(
            svc.analyze("some text").await.unwrap_err(),
            AnalysisError::InvalidConfiguration(_)
        ));
    }

    #[tokio::test]
    async fn echoed_prompt_responses_still_parse() {
        let echoed = format!(
            "TEXT ANALYSIS:\nRespond ONLY with this exact format:\n\n\
             VIOLENCE: [YES/NO]\n\nText: he drew his sword...\n{}",
            "VIOLENCE: YES"
        );
        let svc = service(vec![Ok(echoed)], AnalysisConfig::default());

        let report = svc.analyze("he drew his sword").await.unwrap();
        assert_eq!(finding(&report, Category::Violence).status, CategoryStatus::Confirmed);
    }
}
