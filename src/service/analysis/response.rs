//! Locating the model's answer within its own output.
//!
//! Completion-style backends echo the prompt before answering; chat
//! backends do not. The heuristic lives in one place so it can be swapped
//! or tested without touching extraction.

use super::prompts::{PREVIEW_ELLIPSIS, TEXT_DELIMITER};

/// Return the answer segment of a raw model output.
///
/// When the backend echoed the prompt, the answer follows the `Text:`
/// delimiter and the final `...` preview marker. Without an echo marker the
/// whole trimmed output is the answer.
pub fn locate_answer(output: &str) -> &str {
    let tail = match output.find(TEXT_DELIMITER) {
        Some(pos) => &output[pos + TEXT_DELIMITER.len()..],
        None => output,
    };
    tail.rsplit(PREVIEW_ELLIPSIS).next().unwrap_or(tail).trim()
}
