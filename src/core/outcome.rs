//! Validation outcomes and the reasons behind them

use std::fmt;

/// Why a candidate was turned down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Shorter than the configured minimum
    TooShort { min: usize, actual: usize },
    /// Does not contain the puzzle's center letter
    MissingCenterLetter(char),
    /// Uses a letter outside the hive (only when that rule is enabled)
    InvalidLetters,
    /// Already in the accepted word set
    DuplicateWord,
    /// Dictionary says it is not a word
    NotInDictionary,
}

impl RejectReason {
    /// Short code for logs and telemetry
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too_short",
            Self::MissingCenterLetter(_) => "missing_center_letter",
            Self::InvalidLetters => "invalid_letters",
            Self::DuplicateWord => "duplicate_word",
            Self::NotInDictionary => "not_in_dictionary",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min, .. } => write!(f, "Too short! Words need at least {min} letters"),
            Self::MissingCenterLetter(c) => {
                write!(f, "Missing center letter '{}'", c.to_ascii_uppercase())
            }
            Self::InvalidLetters => write!(f, "Only the letters in the hive can be used"),
            Self::DuplicateWord => write!(f, "Already found!"),
            Self::NotInDictionary => write!(f, "Not in word list"),
        }
    }
}

/// Failure kinds of the remote dictionary check
///
/// Closed set: transport details never reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteErrorKind {
    NetworkUnavailable,
    UpstreamUnavailable,
    Timeout,
    RateLimited,
    MalformedResponse,
}

impl RemoteErrorKind {
    /// Whether another attempt may succeed
    #[inline]
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::NetworkUnavailable | Self::UpstreamUnavailable | Self::Timeout
        )
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NetworkUnavailable => "network_unavailable",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::Timeout => "timeout",
            Self::RateLimited => "rate_limited",
            Self::MalformedResponse => "malformed_response",
        }
    }

    /// Message shown to the player
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::NetworkUnavailable | Self::UpstreamUnavailable | Self::Timeout => {
                "Couldn't check that word right now. Please try again."
            }
            Self::RateLimited => "Too many checks at once. Wait a moment and try again.",
            Self::MalformedResponse => "Something went wrong while validating that word.",
        }
    }
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of one `validate_word` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Appended to the accepted set
    Accepted { word: String, pangram: bool },
    Rejected(RejectReason),
    /// The dictionary could not give an answer
    Errored(RemoteErrorKind),
    /// A newer submission cancelled this one; nothing was applied
    Superseded,
}

impl ValidationOutcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Text for the player, `None` for superseded submissions
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Accepted { pangram: true, .. } => Some("Pangram!".to_string()),
            Self::Accepted { .. } => Some("Nice!".to_string()),
            Self::Rejected(reason) => Some(reason.to_string()),
            Self::Errored(kind) => Some(kind.user_message().to_string()),
            Self::Superseded => None,
        }
    }
}

/// Where a validator is in its per-submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidatorPhase {
    #[default]
    Idle,
    /// Running the local rules
    Local,
    /// Waiting on the dictionary
    Remote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_kinds() {
        assert!(RemoteErrorKind::NetworkUnavailable.is_retryable());
        assert!(RemoteErrorKind::UpstreamUnavailable.is_retryable());
        assert!(RemoteErrorKind::Timeout.is_retryable());
        assert!(!RemoteErrorKind::RateLimited.is_retryable());
        assert!(!RemoteErrorKind::MalformedResponse.is_retryable());
    }

    #[test]
    fn transient_kinds_share_a_message() {
        let msg = RemoteErrorKind::Timeout.user_message();
        assert_eq!(RemoteErrorKind::NetworkUnavailable.user_message(), msg);
        assert_eq!(RemoteErrorKind::UpstreamUnavailable.user_message(), msg);
        assert_ne!(RemoteErrorKind::RateLimited.user_message(), msg);
    }

    #[test]
    fn outcome_messages() {
        let too_short = ValidationOutcome::Rejected(RejectReason::TooShort { min: 4, actual: 3 });
        assert_eq!(
            too_short.message().as_deref(),
            Some("Too short! Words need at least 4 letters")
        );

        let missing = ValidationOutcome::Rejected(RejectReason::MissingCenterLetter('a'));
        assert_eq!(missing.message().as_deref(), Some("Missing center letter 'A'"));

        assert_eq!(ValidationOutcome::Superseded.message(), None);
        assert!(
            ValidationOutcome::Accepted {
                word: "cabbage".to_string(),
                pangram: false
            }
            .is_accepted()
        );
    }
}
