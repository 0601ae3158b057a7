//! Gameplay telemetry
//!
//! The core reports discrete events to a [`TelemetrySink`]; recording is
//! fire-and-forget and never affects validation.

use crate::core::{RejectReason, RemoteErrorKind};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Something worth recording about a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    WordAccepted { word: String, pangram: bool },
    WordRejected { word: String, reason: RejectReason },
    RemoteError { word: String, kind: RemoteErrorKind },
    /// Informational only: a newer submission superseded this one
    ValidationCancelled { word: String },
    ClueUnlocked { index: usize },
    /// Progress reached the final-challenge threshold
    FinalChallengeUnlocked,
    FinalChallengeShown,
    FinalChallengeCompleted { correct: bool },
}

/// Receiver of telemetry events
pub trait TelemetrySink: Send + Sync {
    fn record(&self, event: &TelemetryEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn record(&self, event: &TelemetryEvent) {
        match event {
            TelemetryEvent::WordAccepted { word, pangram } => {
                info!(target: "word_hive::telemetry", word = %word, pangram, "word accepted");
            }
            TelemetryEvent::WordRejected { word, reason } => {
                info!(
                    target: "word_hive::telemetry",
                    word = %word,
                    reason = reason.code(),
                    "word rejected"
                );
            }
            TelemetryEvent::RemoteError { word, kind } => {
                warn!(
                    target: "word_hive::telemetry",
                    word = %word,
                    kind = kind.code(),
                    "dictionary error"
                );
            }
            TelemetryEvent::ValidationCancelled { word } => {
                debug!(target: "word_hive::telemetry", word = %word, "validation superseded");
            }
            TelemetryEvent::ClueUnlocked { index } => {
                info!(target: "word_hive::telemetry", clue = index, "clue unlocked");
            }
            TelemetryEvent::FinalChallengeUnlocked => {
                info!(target: "word_hive::telemetry", "final challenge unlocked");
            }
            TelemetryEvent::FinalChallengeShown => {
                info!(target: "word_hive::telemetry", "final challenge shown");
            }
            TelemetryEvent::FinalChallengeCompleted { correct } => {
                info!(target: "word_hive::telemetry", correct, "final challenge completed");
            }
        }
    }
}

/// Drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn record(&self, _event: &TelemetryEvent) {}
}

/// Keeps events in memory, in arrival order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    #[must_use]
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TelemetrySink for RecordingSink {
    fn record(&self, event: &TelemetryEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.record(&TelemetryEvent::ClueUnlocked { index: 0 });
        sink.record(&TelemetryEvent::FinalChallengeShown);

        assert_eq!(
            sink.events(),
            vec![
                TelemetryEvent::ClueUnlocked { index: 0 },
                TelemetryEvent::FinalChallengeShown,
            ]
        );
    }

    #[test]
    fn tracing_sink_accepts_every_event() {
        let sink = TracingSink;
        sink.record(&TelemetryEvent::WordRejected {
            word: "cat".into(),
            reason: RejectReason::TooShort { min: 4, actual: 3 },
        });
        sink.record(&TelemetryEvent::RemoteError {
            word: "bagel".into(),
            kind: RemoteErrorKind::Timeout,
        });
        NullSink.record(&TelemetryEvent::FinalChallengeShown);
    }
}
