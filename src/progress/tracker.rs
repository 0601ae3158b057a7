//! Puzzle progress and trivia unlocks
//!
//! Everything here is derived from how many words have been found. Unlocks
//! are a pure function of the current ratio, so they can never re-lock.

/// Clue and final-challenge thresholds, as progress ratios
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressThresholds {
    /// Ascending ratios; clue `i` unlocks at `clues[i]`
    pub clues: Vec<f64>,
    pub final_challenge: f64,
}

impl Default for ProgressThresholds {
    fn default() -> Self {
        Self {
            clues: vec![0.25, 0.40, 0.60, 0.80],
            final_challenge: 0.90,
        }
    }
}

/// Milestone crossed by an accepted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Clue at this index became visible
    ClueUnlocked { index: usize },
    /// The final challenge can now be shown (emitted once per puzzle)
    FinalChallengeAvailable,
}

/// Number of thresholds at or below `progress`
#[must_use]
pub fn unlocked_clue_count(progress: f64, thresholds: &[f64]) -> usize {
    thresholds.iter().filter(|&&t| t <= progress).count()
}

/// Progress of one puzzle session
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total_words: usize,
    found: usize,
    thresholds: ProgressThresholds,
    clues_unlocked: usize,
    final_announced: bool,
    final_shown: bool,
    final_completed: bool,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(total_words: usize, thresholds: ProgressThresholds) -> Self {
        Self {
            total_words,
            found: 0,
            thresholds,
            clues_unlocked: 0,
            final_announced: false,
            final_shown: false,
            final_completed: false,
        }
    }

    /// Start over for a newly loaded puzzle, keeping the thresholds
    pub fn reset(&mut self, total_words: usize) {
        *self = Self::new(total_words, self.thresholds.clone());
    }

    #[must_use]
    pub const fn thresholds(&self) -> &ProgressThresholds {
        &self.thresholds
    }

    #[inline]
    #[must_use]
    pub const fn found(&self) -> usize {
        self.found
    }

    #[inline]
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    /// Found words over total words, in [0, 1]
    ///
    /// Zero when the puzzle declares no words.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        (self.found as f64 / self.total_words as f64).min(1.0)
    }

    /// Clues unlocked against an arbitrary threshold list
    #[must_use]
    pub fn unlocked_clue_count(&self, thresholds: &[f64]) -> usize {
        unlocked_clue_count(self.progress(), thresholds)
    }

    /// Clues unlocked against the configured thresholds
    #[must_use]
    pub const fn unlocked_clues(&self) -> usize {
        self.clues_unlocked
    }

    /// Whether the final challenge should be offered at `threshold`
    #[must_use]
    pub fn should_show_final_challenge(&self, threshold: f64) -> bool {
        !self.final_completed && self.progress() >= threshold
    }

    /// [`Self::should_show_final_challenge`] at the configured threshold
    #[must_use]
    pub fn final_challenge_ready(&self) -> bool {
        self.should_show_final_challenge(self.thresholds.final_challenge)
    }

    /// Record that the final challenge was put in front of the player
    ///
    /// Returns `true` the first time only.
    pub const fn mark_final_shown(&mut self) -> bool {
        let first = !self.final_shown;
        self.final_shown = true;
        first
    }

    /// Close the final challenge for the rest of the session
    pub const fn complete_final_challenge(&mut self) {
        self.final_completed = true;
    }

    #[must_use]
    pub const fn final_completed(&self) -> bool {
        self.final_completed
    }

    /// Update the found count and report newly crossed milestones
    ///
    /// The count never goes down within a session; a smaller value is ignored.
    pub fn record_found(&mut self, found: usize) -> Vec<ProgressEvent> {
        self.found = self.found.max(found);

        let mut events = Vec::new();
        let now_unlocked = self
            .unlocked_clue_count(&self.thresholds.clues)
            .max(self.clues_unlocked);
        for index in self.clues_unlocked..now_unlocked {
            events.push(ProgressEvent::ClueUnlocked { index });
        }
        self.clues_unlocked = now_unlocked;

        if !self.final_announced && self.final_challenge_ready() {
            self.final_announced = true;
            events.push(ProgressEvent::FinalChallengeAvailable);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(total: usize) -> ProgressTracker {
        ProgressTracker::new(total, ProgressThresholds::default())
    }

    #[test]
    fn empty_puzzle_has_zero_progress() {
        let mut t = tracker(0);
        assert!(t.progress().abs() < f64::EPSILON);
        t.record_found(3);
        assert!(t.progress().abs() < f64::EPSILON);
        assert!(!t.final_challenge_ready());
    }

    #[test]
    fn three_of_ten_unlocks_first_of_two() {
        let mut t = tracker(10);
        t.record_found(3);
        assert!((t.progress() - 0.3).abs() < 1e-12);
        assert_eq!(t.unlocked_clue_count(&[0.25, 0.5]), 1);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut t = tracker(4);
        t.record_found(1);
        assert_eq!(t.unlocked_clue_count(&[0.25]), 1);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut t = tracker(5);
        let mut last = t.progress();
        for found in [1, 2, 2, 1, 4, 5, 7, 3] {
            t.record_found(found);
            let p = t.progress();
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
        assert!((t.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn events_follow_threshold_order() {
        let mut t = tracker(10);
        assert!(t.record_found(1).is_empty());
        assert_eq!(
            t.record_found(3),
            vec![ProgressEvent::ClueUnlocked { index: 0 }]
        );
        assert!(t.record_found(3).is_empty());

        // Jumping past several thresholds reports each one
        assert_eq!(
            t.record_found(9),
            vec![
                ProgressEvent::ClueUnlocked { index: 1 },
                ProgressEvent::ClueUnlocked { index: 2 },
                ProgressEvent::ClueUnlocked { index: 3 },
                ProgressEvent::FinalChallengeAvailable,
            ]
        );
        assert_eq!(t.unlocked_clues(), 4);
        assert!(t.record_found(10).is_empty());
    }

    #[test]
    fn first_word_can_unlock_a_clue() {
        let mut t = tracker(2);
        assert_eq!(
            t.record_found(1),
            vec![
                ProgressEvent::ClueUnlocked { index: 0 },
                ProgressEvent::ClueUnlocked { index: 1 },
            ]
        );
    }

    #[test]
    fn final_challenge_is_one_shot() {
        let mut t = tracker(10);
        t.record_found(8);
        assert!(!t.should_show_final_challenge(0.9));

        t.record_found(9);
        assert!(t.should_show_final_challenge(0.9));
        assert!(t.mark_final_shown());
        assert!(!t.mark_final_shown());

        t.complete_final_challenge();
        assert!(!t.should_show_final_challenge(0.9));
        t.record_found(10);
        assert!(!t.should_show_final_challenge(0.9));
        assert!(!t.final_challenge_ready());
    }

    #[test]
    fn reset_keeps_thresholds() {
        let thresholds = ProgressThresholds {
            clues: vec![0.5],
            final_challenge: 1.0,
        };
        let mut t = ProgressTracker::new(2, thresholds.clone());
        t.record_found(2);
        t.complete_final_challenge();

        t.reset(4);
        assert_eq!(t.found(), 0);
        assert_eq!(t.total_words(), 4);
        assert_eq!(t.unlocked_clues(), 0);
        assert!(!t.final_completed());
        assert_eq!(t.thresholds(), &thresholds);
    }
}
