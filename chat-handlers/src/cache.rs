//! Exact-match reply cache: message text → previously produced reply text.
//! Unbounded, no eviction, lives for the process lifetime. A memoization table,
//! not a real cache.

use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory mapping from raw message text to the reply it produced.
/// Keys compare by literal string equality.
#[derive(Debug, Default)]
pub struct ReplyCache {
    entries: RwLock<HashMap<String, String>>,
}

impl ReplyCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the stored reply for `text`, if any.
    pub async fn get(&self, text: &str) -> Option<String> {
        self.entries.read().await.get(text).cloned()
    }

    /// Stores `reply` under `text`, replacing any previous entry.
    pub async fn insert(&self, text: String, reply: String) {
        self.entries.write().await.insert(text, reply);
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
