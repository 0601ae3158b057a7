//! Word validation for one puzzle session
//!
//! [`WordValidator`] is the boundary the UI talks to: it runs the local rules,
//! defers to the dictionary, applies accepted words to the session and derives
//! trivia progress from them.
//!
//! At most one dictionary check is in flight. Starting a validation cancels
//! the previous one, and a cancelled result is never applied, even if its
//! answer already arrived.

mod accepted;
pub mod rules;

pub use accepted::AcceptedWords;
pub use rules::{DEFAULT_MIN_LENGTH, ValidationRules};

use crate::core::{
    FinalChallenge, PuzzleDefinition, RejectReason, TriviaClue, ValidationOutcome, ValidatorPhase,
    Word,
};
use crate::dictionary::{CancellationToken, DictionaryClient, Lookup, LookupError};
use crate::progress::{ProgressEvent, ProgressThresholds, ProgressTracker};
use crate::telemetry::{TelemetryEvent, TelemetrySink, TracingSink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Mutable state of the active puzzle
struct Session {
    puzzle: PuzzleDefinition,
    accepted: AcceptedWords,
    tracker: ProgressTracker,
    phase: ValidatorPhase,
    /// Bumped for every submission and reset; identifies the current one
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl Session {
    fn supersede(&mut self) -> u64 {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.generation += 1;
        self.generation
    }
}

/// Outcome of a submission plus the milestones it crossed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: ValidationOutcome,
    /// Clue unlocks and the final-challenge opening, in threshold order
    pub events: Vec<ProgressEvent>,
}

impl From<ValidationOutcome> for Submission {
    fn from(outcome: ValidationOutcome) -> Self {
        Self {
            outcome,
            events: Vec::new(),
        }
    }
}

/// Validates candidate words and tracks the progress they produce
pub struct WordValidator<L: Lookup> {
    rules: ValidationRules,
    client: DictionaryClient<L>,
    session: Mutex<Session>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl<L: Lookup> WordValidator<L> {
    /// Create a validator for `puzzle` with default rules and thresholds
    pub fn new(puzzle: PuzzleDefinition, client: DictionaryClient<L>) -> Self {
        let tracker = ProgressTracker::new(puzzle.total_words(), ProgressThresholds::default());
        Self {
            rules: ValidationRules::default(),
            client,
            session: Mutex::new(Session {
                puzzle,
                accepted: AcceptedWords::new(),
                tracker,
                phase: ValidatorPhase::Idle,
                generation: 0,
                in_flight: None,
            }),
            telemetry: Arc::new(TracingSink),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the clue and final-challenge thresholds
    #[must_use]
    pub fn with_thresholds(self, thresholds: ProgressThresholds) -> Self {
        {
            let mut session = self.lock();
            session.tracker = ProgressTracker::new(session.puzzle.total_words(), thresholds);
        }
        self
    }

    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    #[must_use]
    pub const fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    #[must_use]
    pub const fn client(&self) -> &DictionaryClient<L> {
        &self.client
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, events: &[TelemetryEvent]) {
        for event in events {
            self.telemetry.record(event);
        }
    }

    /// Validate one candidate and apply it to the session if accepted
    ///
    /// Supersedes any validation still waiting on the dictionary.
    pub async fn validate_word(&self, candidate: &str) -> ValidationOutcome {
        self.submit(candidate).await.outcome
    }

    /// [`Self::validate_word`], also reporting the progress events it caused
    pub async fn submit(&self, candidate: &str) -> Submission {
        let word = Word::new(candidate);
        let token = CancellationToken::new();

        let (generation, local) = {
            let mut session = self.lock();
            let generation = session.supersede();
            session.in_flight = Some(token.clone());
            session.phase = ValidatorPhase::Local;
            let local = self
                .rules
                .check(&word, &session.puzzle, &session.accepted);
            if local.is_err() {
                session.phase = ValidatorPhase::Idle;
                session.in_flight = None;
            }
            (generation, local)
        };

        if let Err(reason) = local {
            debug!(word = %word, reason = reason.code(), "rejected by local rules");
            return self.reject(word, reason).into();
        }

        let verdict = match self.client.cached(word.text()) {
            Some(is_valid) => {
                debug!(word = %word, is_valid, "dictionary cache hit");
                Ok(Some(is_valid))
            }
            None => {
                {
                    let mut session = self.lock();
                    if session.generation == generation {
                        session.phase = ValidatorPhase::Remote;
                    }
                }
                self.client.check(word.text(), &token).await
            }
        };

        self.apply(word, generation, &token, verdict)
    }

    fn reject(&self, word: Word, reason: RejectReason) -> ValidationOutcome {
        self.telemetry.record(&TelemetryEvent::WordRejected {
            word: word.into_text(),
            reason: reason.clone(),
        });
        ValidationOutcome::Rejected(reason)
    }

    fn apply(
        &self,
        word: Word,
        generation: u64,
        token: &CancellationToken,
        verdict: Result<Option<bool>, LookupError>,
    ) -> Submission {
        let mut session = self.lock();

        if token.is_cancelled() || session.generation != generation {
            drop(session);
            self.telemetry.record(&TelemetryEvent::ValidationCancelled {
                word: word.into_text(),
            });
            return ValidationOutcome::Superseded.into();
        }
        session.phase = ValidatorPhase::Idle;
        session.in_flight = None;

        let is_valid = match verdict {
            Ok(Some(is_valid)) => is_valid,
            Ok(None) => {
                drop(session);
                self.telemetry.record(&TelemetryEvent::ValidationCancelled {
                    word: word.into_text(),
                });
                return ValidationOutcome::Superseded.into();
            }
            Err(err) => {
                drop(session);
                let kind = err.kind();
                self.telemetry.record(&TelemetryEvent::RemoteError {
                    word: word.into_text(),
                    kind,
                });
                return ValidationOutcome::Errored(kind).into();
            }
        };

        if !is_valid {
            drop(session);
            return self.reject(word, RejectReason::NotInDictionary).into();
        }

        // Another submission may have accepted the same word meanwhile
        if !session.accepted.insert(word.text()) {
            drop(session);
            return self.reject(word, RejectReason::DuplicateWord).into();
        }

        let pangram = word.is_pangram(&session.puzzle.letters());
        let found = session.accepted.len();
        let progress_events = session.tracker.record_found(found);
        drop(session);

        let text = word.into_text();
        let mut events = vec![TelemetryEvent::WordAccepted {
            word: text.clone(),
            pangram,
        }];
        events.extend(progress_events.iter().map(|event| match *event {
            ProgressEvent::ClueUnlocked { index } => TelemetryEvent::ClueUnlocked { index },
            ProgressEvent::FinalChallengeAvailable => TelemetryEvent::FinalChallengeUnlocked,
        }));
        self.emit(&events);

        Submission {
            outcome: ValidationOutcome::Accepted {
                word: text,
                pangram,
            },
            events: progress_events,
        }
    }

    /// Abandon whatever validation is waiting on the dictionary
    pub fn cancel_pending(&self) {
        let mut session = self.lock();
        session.supersede();
        session.phase = ValidatorPhase::Idle;
    }

    /// Load a new puzzle: cancels any pending check and clears progress
    ///
    /// The dictionary cache is kept.
    pub fn reset(&self, puzzle: PuzzleDefinition) {
        let mut session = self.lock();
        session.supersede();
        session.phase = ValidatorPhase::Idle;
        session.accepted.clear();
        session.tracker.reset(puzzle.total_words());
        debug!(puzzle = puzzle.id(), total = puzzle.total_words(), "puzzle loaded");
        session.puzzle = puzzle;
    }

    #[must_use]
    pub fn phase(&self) -> ValidatorPhase {
        self.lock().phase
    }

    #[must_use]
    pub fn puzzle(&self) -> PuzzleDefinition {
        self.lock().puzzle.clone()
    }

    /// Accepted words in discovery order
    #[must_use]
    pub fn accepted_words(&self) -> Vec<String> {
        self.lock().accepted.as_slice().to_vec()
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.lock().tracker.progress()
    }

    /// Clues unlocked against the given thresholds
    #[must_use]
    pub fn unlocked_clue_count(&self, thresholds: &[f64]) -> usize {
        self.lock().tracker.unlocked_clue_count(thresholds)
    }

    /// Clues unlocked so far under the configured thresholds
    #[must_use]
    pub fn unlocked_clues(&self) -> Vec<TriviaClue> {
        let session = self.lock();
        let count = session.tracker.unlocked_clues();
        session.puzzle.clues().iter().take(count).cloned().collect()
    }

    #[must_use]
    pub fn should_show_final_challenge(&self, threshold: f64) -> bool {
        self.lock().tracker.should_show_final_challenge(threshold)
    }

    /// Whether the final challenge is open under the configured threshold
    #[must_use]
    pub fn final_challenge_ready(&self) -> bool {
        self.lock().tracker.final_challenge_ready()
    }

    /// The final challenge, if it is due under the configured threshold
    ///
    /// The first call that returns it records `FinalChallengeShown`.
    pub fn final_challenge(&self) -> Option<FinalChallenge> {
        let (challenge, first_show) = {
            let mut session = self.lock();
            if !session.tracker.final_challenge_ready() {
                return None;
            }
            let first_show = session.tracker.mark_final_shown();
            (session.puzzle.final_challenge().clone(), first_show)
        };
        if first_show {
            self.telemetry.record(&TelemetryEvent::FinalChallengeShown);
        }
        Some(challenge)
    }

    /// Answer the final challenge
    ///
    /// Returns whether the answer was right, or `None` if the challenge is not
    /// open. Either way it will not be offered again this session.
    pub fn complete_final_challenge(&self, answer: &str) -> Option<bool> {
        let correct = {
            let mut session = self.lock();
            if !session.tracker.final_challenge_ready() {
                return None;
            }
            let correct = session.puzzle.final_challenge().is_correct(answer);
            session.tracker.complete_final_challenge();
            correct
        };
        self.telemetry
            .record(&TelemetryEvent::FinalChallengeCompleted { correct });
        Some(correct)
    }
}
