//! Scripted lookup used by the client and validator tests

use super::lookup::{Lookup, LookupError};
use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Lookup whose answers, delays and gates are set up per word
///
/// Words without a script answer from the `valid` set. A script replays its
/// results in order and keeps repeating the last one.
#[derive(Default)]
pub struct FakeLookup {
    valid: FxHashSet<String>,
    scripts: Mutex<FxHashMap<String, VecDeque<Result<bool, LookupError>>>>,
    gates: FxHashMap<String, Arc<Notify>>,
    delays: FxHashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeLookup {
    pub fn valid<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn script(self, word: &str, results: Vec<Result<bool, LookupError>>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(word.to_string(), results.into());
        self
    }

    /// Hold lookups of `word` until the returned gate is notified
    pub fn gate(mut self, word: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gates.insert(word.to_string(), Arc::clone(&gate));
        (self, gate)
    }

    pub fn delay(mut self, word: &str, delay: Duration) -> Self {
        self.delays.insert(word.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, word: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|w| *w == word).count()
    }

    fn next_scripted(&self, word: &str) -> Option<Result<bool, LookupError>> {
        let mut scripts = self.scripts.lock().unwrap();
        let queue = scripts.get_mut(word)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl Lookup for FakeLookup {
    async fn lookup(&self, word: &str) -> Result<bool, LookupError> {
        self.calls.lock().unwrap().push(word.to_string());

        if let Some(gate) = self.gates.get(word) {
            gate.notified().await;
        }
        if let Some(delay) = self.delays.get(word) {
            tokio::time::sleep(*delay).await;
        }

        self.next_scripted(word)
            .unwrap_or_else(|| Ok(self.valid.contains(word)))
    }
}

/// Client that ignores proxy settings from the environment
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Local HTTP dictionary with canned answers keyed by the last path segment
///
/// `bagel` is a word, `empty` answers `[]`, `garbled` answers HTML, `busy` is
/// rate limited, `down` is a 503, and anything else is a 404.
pub async fn dictionary_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let mut read = 0;
                while read < buf.len() {
                    let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let request = String::from_utf8_lossy(&buf[..read]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = match path.rsplit('/').next().unwrap_or("") {
                    "bagel" => (200, r#"[{"word":"bagel"}]"#),
                    "empty" => (200, "[]"),
                    "garbled" => (200, "<html>"),
                    "busy" => (429, ""),
                    "down" => (503, ""),
                    _ => (404, r#"{"title":"No Definitions Found"}"#),
                };
                let response = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    format!("http://{addr}/api/v2/entries/en")
}
