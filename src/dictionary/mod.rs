//! Dictionary access
//!
//! Cache, cancellation and the resilient client that sits between the word
//! validator and the external dictionary.

pub mod cache;
mod cancel;
mod client;
pub mod lookup;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::{DictionaryCache, SharedCache};
pub use cancel::CancellationToken;
pub use client::{DictionaryClient, RetryPolicy};
pub use lookup::{HttpLookup, Lookup, LookupError, WordListLookup};
