//! Single-attempt dictionary lookups
//!
//! A [`Lookup`] performs exactly one request. Timeouts, retries, caching and
//! cancellation are layered on top by [`super::DictionaryClient`].

use crate::core::{RemoteErrorKind, normalize};
use async_trait::async_trait;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use thiserror::Error;

/// Default public dictionary endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Why a lookup attempt failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),
    #[error("dictionary service unavailable (status {0})")]
    UpstreamUnavailable(u16),
    #[error("lookup timed out")]
    Timeout,
    #[error("rate limited by dictionary service")]
    RateLimited,
    #[error("malformed dictionary response: {0}")]
    MalformedResponse(String),
}

impl LookupError {
    /// Collapse into the closed kind set exposed to callers
    #[must_use]
    pub const fn kind(&self) -> RemoteErrorKind {
        match self {
            Self::NetworkUnavailable(_) => RemoteErrorKind::NetworkUnavailable,
            Self::UpstreamUnavailable(_) => RemoteErrorKind::UpstreamUnavailable,
            Self::Timeout => RemoteErrorKind::Timeout,
            Self::RateLimited => RemoteErrorKind::RateLimited,
            Self::MalformedResponse(_) => RemoteErrorKind::MalformedResponse,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }
}

/// One outbound dictionary check
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Ask whether `word` (already normalized) is a dictionary word
    async fn lookup(&self, word: &str) -> Result<bool, LookupError>;
}

#[async_trait]
impl<T: Lookup + ?Sized> Lookup for Arc<T> {
    async fn lookup(&self, word: &str) -> Result<bool, LookupError> {
        (**self).lookup(word).await
    }
}

/// Decide validity from an HTTP status and body
///
/// - 404, or 2xx with an empty array → not a word
/// - 2xx with a non-empty array → a word
/// - 429 → rate limited, 5xx → upstream unavailable
/// - anything else → malformed
///
/// # Errors
///
/// Returns the `LookupError` for the status class, or `MalformedResponse` if a
/// success body is not a JSON array.
pub fn interpret_response(status: u16, body: &str) -> Result<bool, LookupError> {
    match status {
        404 => Ok(false),
        429 => Err(LookupError::RateLimited),
        500..=599 => Err(LookupError::UpstreamUnavailable(status)),
        200..=299 => {
            let value: serde_json::Value = serde_json::from_str(body)
                .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;
            match value {
                serde_json::Value::Array(entries) => Ok(!entries.is_empty()),
                other => Err(LookupError::MalformedResponse(format!(
                    "expected an array of entries, got {}",
                    json_kind(&other)
                ))),
            }
        }
        _ => Err(LookupError::MalformedResponse(format!(
            "unexpected status {status}"
        ))),
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// HTTP lookup against a `{base_url}/{word}` REST dictionary
pub struct HttpLookup {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLookup {
    /// Create a lookup for the given endpoint
    ///
    /// No request timeout is set here; the client bounds each attempt.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a lookup that sends through an already configured client
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL with `word` as one percent-encoded path segment
    ///
    /// `#`, `?` and `/` in the word stay inside the segment, so the request is
    /// always about the whole word.
    fn url_for(&self, word: &str) -> Result<reqwest::Url, LookupError> {
        let invalid = |reason: String| {
            LookupError::MalformedResponse(format!(
                "invalid dictionary URL '{}': {reason}",
                self.base_url
            ))
        };

        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot take path segments".to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }
}

impl Default for HttpLookup {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn transport_error(err: &reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else if err.is_decode() {
        LookupError::MalformedResponse(err.to_string())
    } else {
        LookupError::NetworkUnavailable(err.to_string())
    }
}

#[async_trait]
impl Lookup for HttpLookup {
    async fn lookup(&self, word: &str) -> Result<bool, LookupError> {
        let response = self
            .client
            .get(self.url_for(word)?)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| transport_error(&e))?;
        interpret_response(status, &body)
    }
}

/// Offline lookup backed by a fixed word list
///
/// Used by the CLI's `--offline` mode and as a deterministic stand-in.
#[derive(Debug, Clone, Default)]
pub struct WordListLookup {
    words: FxHashSet<String>,
}

impl WordListLookup {
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| normalize(w.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl Lookup for WordListLookup {
    async fn lookup(&self, word: &str) -> Result<bool, LookupError> {
        Ok(self.words.contains(&normalize(word)))
    }
}
