//! Free-text verdict extraction.
//!
//! An explicit scanner rather than a single pattern: the raw answer is
//! normalized and deduplicated line by line, joined into one buffer, and
//! scanned for `<CATEGORY>: <token>` pairs. Later matches for a category
//! overwrite earlier ones; anything unparseable defaults to NO. Extraction
//! never fails.

use std::collections::{HashMap, HashSet};

use crate::model::{Category, Verdict, VerdictVector};

/// Verdict tokens in match precedence order, longest forms first
const VERDICT_TOKENS: &[(&str, Verdict)] = &[
    ("YES", Verdict::Yes),
    ("NO", Verdict::No),
    ("MAYBE", Verdict::Maybe),
    ("Y", Verdict::Yes),
    ("N", Verdict::No),
    ("M", Verdict::Maybe),
];

/// Parse a raw model answer into one verdict per category, in
/// `expected_order`. Categories without a parseable verdict default to NO.
pub fn extract_verdicts(raw: &str, expected_order: &[Category]) -> VerdictVector {
    let buffer = normalize_lines(raw);

    let mut matches: Vec<(usize, Category, Verdict)> = Vec::new();
    for &category in expected_order {
        let phrase = category.display_phrase();
        for (pos, _) in buffer.match_indices(&phrase) {
            if !is_phrase_boundary(&buffer, pos, phrase.len()) {
                continue;
            }
            if let Some(verdict) = parse_verdict(&buffer[pos + phrase.len()..]) {
                matches.push((pos, category, verdict));
            }
        }
    }

    // Fold in scan order; later assignments overwrite earlier ones
    matches.sort_by_key(|&(pos, _, _)| pos);
    let mut resolved: HashMap<Category, Verdict> = HashMap::new();
    for (_, category, verdict) in matches {
        resolved.insert(category, verdict);
    }

    expected_order
        .iter()
        .map(|c| resolved.get(c).copied().unwrap_or(Verdict::No))
        .collect()
}

/// Uppercase and trim each line, drop empty lines and duplicates (first
/// occurrence kept), join the survivors with single spaces. Models that
/// repeat a line verbatim collapse to one occurrence here.
fn normalize_lines(raw: &str) -> String {
    let mut seen = HashSet::new();
    let mut lines = Vec::new();
    for line in raw.lines() {
        let normalized = line.trim().to_uppercase();
        if normalized.is_empty() || !seen.insert(normalized.clone()) {
            continue;
        }
        lines.push(normalized);
    }
    lines.join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-phrase check: the match may not extend a longer word on either side
fn is_phrase_boundary(buffer: &str, pos: usize, len: usize) -> bool {
    let before_ok = buffer[..pos]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c));
    let after_ok = buffer[pos + len..]
        .chars()
        .next()
        .map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

/// Parse the separator and verdict token following a category phrase:
/// optional whitespace, `:` or `=`, optional whitespace, optional `[`, then
/// one of the verdict tokens. The closing bracket is irrelevant.
fn parse_verdict(rest: &str) -> Option<Verdict> {
    let rest = rest.trim_start();
    let mut chars = rest.chars();
    match chars.next() {
        Some(':') | Some('=') => {}
        _ => return None,
    }
    let rest = chars.as_str().trim_start();
    let rest = rest.strip_prefix('[').unwrap_or(rest);

    VERDICT_TOKENS
        .iter()
        .find(|(token, _)| rest.starts_with(token))
        .map(|&(_, verdict)| verdict)
}
