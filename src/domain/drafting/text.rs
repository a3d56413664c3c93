//! Text normalization shared by the extractors and the turn resolver.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on characters considered from a single message.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 2_000;

static DIGIT_GROUPING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d),(\d{3})").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lower-cases, strips control characters, removes thousands separators,
/// collapses whitespace and truncates to `max_chars`.
pub fn normalize(text: &str, max_chars: usize) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .take(max_chars)
        .collect::<String>()
        .to_lowercase();

    // Applied twice so "1,000,000" loses both separators.
    let ungrouped = DIGIT_GROUPING.replace_all(&cleaned, "$1$2");
    let ungrouped = DIGIT_GROUPING.replace_all(&ungrouped, "$1$2");

    WHITESPACE.replace_all(ungrouped.trim(), " ").into_owned()
}

/// Capitalizes the first letter of every word and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trimmed answer text, or `None` when nothing meaningful was typed.
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim().trim_matches(|c: char| c == '.' || c == '!' || c == '"');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Renders an amount without a trailing `.0` for whole numbers.
pub fn format_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
