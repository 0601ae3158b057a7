//! Resilient dictionary client
//!
//! Wraps a [`Lookup`] with a per-attempt timeout, a bounded fixed-delay retry
//! loop, cooperative cancellation and write-through caching.

use super::cache::SharedCache;
use super::cancel::CancellationToken;
use super::lookup::{Lookup, LookupError};
use crate::core::normalize;
use std::sync::PoisonError;
use std::time::Duration;
use tracing::{debug, warn};

/// Attempt budget and pacing for one check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first (at least one is always made)
    pub max_attempts: u32,
    /// Pause between a failed attempt and the next
    pub retry_delay: Duration,
    /// Limit on a single attempt, measured from send
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
            attempt_timeout: Duration::from_secs(5),
        }
    }
}

/// Dictionary client shared by every submission of a session
pub struct DictionaryClient<L: Lookup> {
    lookup: L,
    cache: SharedCache,
    policy: RetryPolicy,
}

impl<L: Lookup> DictionaryClient<L> {
    /// Create a client with the default retry policy
    pub fn new(lookup: L, cache: SharedCache) -> Self {
        Self::with_policy(lookup, cache, RetryPolicy::default())
    }

    pub const fn with_policy(lookup: L, cache: SharedCache, policy: RetryPolicy) -> Self {
        Self {
            lookup,
            cache,
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn cache(&self) -> &SharedCache {
        &self.cache
    }

    #[must_use]
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Cached verdict for `word`, if any
    #[must_use]
    pub fn cached(&self, word: &str) -> Option<bool> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word)
    }

    fn remember(&self, word: &str, is_valid: bool) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(word, is_valid);
    }

    /// Ask the dictionary whether `word` is valid
    ///
    /// Returns `Ok(Some(valid))` for a definitive answer (also written to the
    /// cache) and `Ok(None)` if `token` was cancelled before an answer could be
    /// used. Cancellation is checked before every attempt and raced against
    /// every attempt and retry delay; it never triggers a retry.
    ///
    /// # Errors
    ///
    /// Returns the last `LookupError` once a non-retryable kind occurs or the
    /// attempt budget is spent.
    pub async fn check(
        &self,
        word: &str,
        token: &CancellationToken,
    ) -> Result<Option<bool>, LookupError> {
        let word = normalize(word);
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            if token.is_cancelled() {
                debug!(word = %word, attempt, "lookup abandoned before send");
                return Ok(None);
            }

            debug!(word = %word, attempt, max_attempts, "dictionary lookup");
            let pending =
                tokio::time::timeout(self.policy.attempt_timeout, self.lookup.lookup(&word));
            let result = tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!(word = %word, attempt, "lookup cancelled in flight");
                    return Ok(None);
                }
                result = pending => {
                    result.unwrap_or(Err(LookupError::Timeout))
                }
            };

            match result {
                Ok(is_valid) => {
                    if token.is_cancelled() {
                        debug!(word = %word, "discarding result of cancelled lookup");
                        return Ok(None);
                    }
                    self.remember(&word, is_valid);
                    debug!(word = %word, is_valid, attempt, "dictionary answered");
                    return Ok(Some(is_valid));
                }
                Err(err) if err.is_retryable() && attempt < max_attempts => {
                    warn!(word = %word, attempt, error = %err, "lookup failed, retrying");
                    tokio::select! {
                        biased;
                        () = token.cancelled() => return Ok(None),
                        () = tokio::time::sleep(self.policy.retry_delay) => {}
                    }
                    attempt += 1;
                }
                Err(err) => {
                    warn!(word = %word, attempt, error = %err, "lookup failed");
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryCache;
    use crate::dictionary::testing::FakeLookup;
    use std::sync::Arc;

    fn make_client(lookup: FakeLookup) -> (DictionaryClient<Arc<FakeLookup>>, Arc<FakeLookup>) {
        let lookup = Arc::new(lookup);
        let client = DictionaryClient::new(Arc::clone(&lookup), DictionaryCache::new().shared());
        (client, lookup)
    }

    #[tokio::test]
    async fn definitive_answers_are_cached() {
        let (client, lookup) = make_client(FakeLookup::valid(["cabbage"]));
        let token = CancellationToken::new();

        assert_eq!(client.check("Cabbage", &token).await, Ok(Some(true)));
        assert_eq!(client.check("abcd", &token).await, Ok(Some(false)));

        assert_eq!(client.cached("cabbage"), Some(true));
        assert_eq!(client.cached("abcd"), Some(false));
        assert_eq!(lookup.calls(), vec!["cabbage", "abcd"]);
    }

    #[tokio::test(start_paused = true)]
    async fn retryable_failure_makes_three_attempts() {
        let fake = FakeLookup::default()
            .script("bagel", vec![Err(LookupError::UpstreamUnavailable(503))]);
        let (client, lookup) = make_client(fake);

        let started = tokio::time::Instant::now();
        let result = client.check("bagel", &CancellationToken::new()).await;

        assert_eq!(result, Err(LookupError::UpstreamUnavailable(503)));
        assert_eq!(lookup.call_count("bagel"), 3);
        // Two fixed one-second pauses between three attempts
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_secs(3));
        assert_eq!(client.cached("bagel"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_recovers_after_transient_failure() {
        let fake = FakeLookup::default().script(
            "bagel",
            vec![
                Err(LookupError::NetworkUnavailable("reset".into())),
                Ok(true),
            ],
        );
        let (client, lookup) = make_client(fake);

        let result = client.check("bagel", &CancellationToken::new()).await;
        assert_eq!(result, Ok(Some(true)));
        assert_eq!(lookup.call_count("bagel"), 2);
        assert_eq!(client.cached("bagel"), Some(true));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_attempts_time_out_and_retry() {
        let fake = FakeLookup::valid(["bagel"]).delay("bagel", Duration::from_secs(10));
        let (client, lookup) = make_client(fake);

        let started = tokio::time::Instant::now();
        let result = client.check("bagel", &CancellationToken::new()).await;

        assert_eq!(result, Err(LookupError::Timeout));
        assert_eq!(lookup.call_count("bagel"), 3);
        // 3 × 5s timeouts + 2 × 1s delays
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(17) && elapsed < Duration::from_secs(18));
    }

    #[tokio::test]
    async fn non_retryable_kinds_fail_immediately() {
        let fake = FakeLookup::default()
            .script("rate", vec![Err(LookupError::RateLimited)])
            .script("junk", vec![Err(LookupError::MalformedResponse("html".into()))]);
        let (client, lookup) = make_client(fake);
        let token = CancellationToken::new();

        assert_eq!(client.check("rate", &token).await, Err(LookupError::RateLimited));
        assert!(matches!(
            client.check("junk", &token).await,
            Err(LookupError::MalformedResponse(_))
        ));
        assert_eq!(lookup.call_count("rate"), 1);
        assert_eq!(lookup.call_count("junk"), 1);
    }

    #[tokio::test]
    async fn cancelled_token_issues_no_request() {
        let (client, lookup) = make_client(FakeLookup::valid(["bagel"]));
        let token = CancellationToken::new();
        token.cancel();

        assert_eq!(client.check("bagel", &token).await, Ok(None));
        assert!(lookup.calls().is_empty());
        assert_eq!(client.cached("bagel"), None);
    }

    #[tokio::test]
    async fn cancellation_in_flight_is_silent_and_uncached() {
        let (fake, _gate) = FakeLookup::valid(["bagel"]).gate("bagel");
        let (client, lookup) = make_client(fake);
        let token = CancellationToken::new();

        let check = client.check("bagel", &token);
        let cancel = async {
            tokio::task::yield_now().await;
            token.cancel();
        };
        let (result, ()) = tokio::join!(check, cancel);

        assert_eq!(result, Ok(None));
        assert_eq!(lookup.call_count("bagel"), 1);
        assert_eq!(client.cached("bagel"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_during_retry_delay_stops_retrying() {
        let fake = FakeLookup::default().script("bagel", vec![Err(LookupError::Timeout)]);
        let (client, lookup) = make_client(fake);
        let token = CancellationToken::new();

        let check = client.check("bagel", &token);
        let cancel = async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            token.cancel();
        };
        let (result, ()) = tokio::join!(check, cancel);

        assert_eq!(result, Ok(None));
        assert_eq!(lookup.call_count("bagel"), 1);
    }

    #[test]
    fn default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.retry_delay, Duration::from_secs(1));
        assert_eq!(policy.attempt_timeout, Duration::from_secs(5));
    }
}
