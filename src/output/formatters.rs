//! Formatting utilities for terminal output

use crate::core::{RemoteErrorKind, ValidationOutcome};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Hive letters as one line, center letter bracketed
#[must_use]
pub fn hive_line(center: char, outer: &[char]) -> String {
    let mut parts: Vec<String> = outer
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    parts.insert(parts.len() / 2, format!("[{}]", center.to_ascii_uppercase()));
    parts.join(" ")
}

/// `found/total (NN%)`
#[must_use]
pub fn progress_label(found: usize, total: usize, progress: f64) -> String {
    format!("{found}/{total} ({:.0}%)", progress * 100.0)
}

/// Player-facing text for a validation result
///
/// Empty for a superseded validation, which the player never sees.
#[must_use]
pub fn outcome_text(outcome: &ValidationOutcome) -> String {
    match (outcome.message(), outcome) {
        (Some(message), ValidationOutcome::Accepted { word, .. }) => {
            format!("{message} {}", word.to_uppercase())
        }
        (Some(message), _) => message,
        (None, _) => String::new(),
    }
}

/// One-word status for `check` output
#[must_use]
pub fn check_status(result: Result<bool, RemoteErrorKind>) -> &'static str {
    match result {
        Ok(true) => "valid",
        Ok(false) => "invalid",
        Err(kind) => kind.code(),
    }
}
