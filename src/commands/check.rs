//! Dictionary check - run words through the dictionary client only
//!
//! No puzzle rules apply; useful for probing the dictionary and the cache.

use crate::core::{RemoteErrorKind, normalize};
use crate::dictionary::{CancellationToken, DictionaryClient, Lookup};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::info;

/// Per-word results of a check run
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub results: Vec<(String, Result<bool, RemoteErrorKind>)>,
    pub elapsed: Duration,
    /// Stopped early by cancellation
    pub cancelled: bool,
}

impl CheckReport {
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|(_, r)| *r == Ok(true)).count()
    }

    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.results.iter().filter(|(_, r)| *r == Ok(false)).count()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_err()).count()
    }
}

/// Progress bar for a run over `len` words
#[must_use]
pub fn check_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Check each word against the dictionary, in order
///
/// Blank entries are skipped. Cancelling `token` stops the run and keeps the
/// results gathered so far.
pub async fn run_check<L: Lookup>(
    client: &DictionaryClient<L>,
    words: &[String],
    token: &CancellationToken,
    pb: &ProgressBar,
) -> CheckReport {
    let start = Instant::now();
    let mut report = CheckReport::default();

    for raw in words {
        let word = normalize(raw);
        if word.is_empty() {
            pb.inc(1);
            continue;
        }
        pb.set_message(word.clone());

        let verdict = match client.cached(&word) {
            Some(is_valid) => Ok(Some(is_valid)),
            None => client.check(&word, token).await,
        };
        let result = match verdict {
            Ok(Some(is_valid)) => Ok(is_valid),
            Ok(None) => {
                report.cancelled = true;
                break;
            }
            Err(err) => Err(err.kind()),
        };
        report.results.push((word, result));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    report.elapsed = start.elapsed();
    info!(
        checked = report.results.len(),
        valid = report.valid_count(),
        errors = report.error_count(),
        "dictionary check finished"
    );
    report
}
