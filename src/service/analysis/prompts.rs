//! Prompt construction for per-window trigger analysis

use crate::model::Category;

/// System preamble for the analysis backend
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a content screening assistant. \
You label text excerpts for trigger content. \
Respond with one line per category in the exact requested format and nothing else.";

/// Delimiter introducing the text excerpt; the answer locator keys on it
pub(crate) const TEXT_DELIMITER: &str = "Text:";

/// Trailing marker after the truncated excerpt
pub(crate) const PREVIEW_ELLIPSIS: &str = "...";

/// Build the per-window analysis prompt.
///
/// The instruction header directs the model to answer with one
/// `<CATEGORY>: [YES/NO]` line per category, in order. Only the first
/// `preview_chars` characters of the window are embedded, to conserve
/// generation budget.
pub fn build_analysis_prompt(chunk: &str, categories: &[Category], preview_chars: usize) -> String {
    let category_lines = categories
        .iter()
        .map(|c| format!("{}: [YES/NO]", c.name()))
        .collect::<Vec<_>>()
        .join("\n");

    let preview: String = chunk.chars().take(preview_chars).collect();

    format!(
        "TEXT ANALYSIS:\nRespond ONLY with this exact format:\n\n{category_lines}\n\n{TEXT_DELIMITER} {preview}{PREVIEW_ELLIPSIS}"
    )
}
