//! Input normalization shared by both translation directions.

use crate::settings::settings;

/// Lowercase `text`, drop the configured punctuation, and split on whitespace.
///
/// Empty or whitespace-only input yields no tokens.
pub fn sanitize(text: &str) -> Vec<String> {
    sanitize_with(text, &settings().sanitizer.strip_chars)
}

/// [`sanitize`] with an explicit set of characters to remove.
pub fn sanitize_with(text: &str, strip_chars: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !strip_chars.contains(*c))
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}
