pub mod analysis;
pub mod llm;

pub use analysis::AnalysisService;
pub use llm::{LlmGenerator, TextGenerator};
