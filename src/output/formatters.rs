//! Formatting utilities for terminal output

use crate::search::Query;

/// Describe the letter supply of a query, counting distinct letters
#[must_use]
pub fn describe_letters(query: &Query) -> String {
    if query.is_full_alphabet() {
        "Set of letters A-Z with unrestricted multiplicity".to_string()
    } else {
        format!(
            "Set of {} letters (multiplicity): {}",
            query.bag().distinct().count(),
            query.bag()
        )
    }
}

/// Describe which words a query generates
#[must_use]
pub fn describe_lengths(query: &Query) -> String {
    if let Some(template) = query.template() {
        format!("Generate words that match pattern: {template}")
    } else if query.min_len() == query.max_len() {
        format!("Generate words of length {}", query.min_len())
    } else {
        format!(
            "Generate words of lengths >= {} and <= {}",
            query.min_len(),
            query.max_len()
        )
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `part` in `total` as a percentage, zero when `total` is zero
#[must_use]
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
