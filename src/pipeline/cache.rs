//! Memoization cache for analysis results.
//!
//! Keyed by a fingerprint of the subject plus a fixed-length prefix of the
//! raw body. Unbounded and process-lifetime by design: there is no TTL,
//! no eviction and no invalidation path. Concurrent misses on the same
//! key may both compute; computation is deterministic, so last write wins
//! with an equal value.

use std::sync::Arc;

use dashmap::DashMap;

use crate::pipeline::types::AnalysisResult;

/// How many leading characters of the raw body enter the fingerprint.
///
/// Known data-quality risk: two distinct emails sharing a subject and a
/// 100-character body prefix collide and the second silently receives the
/// first one's cached result.
const FINGERPRINT_PREFIX_CHARS: usize = 100;

/// Compute the cache fingerprint for a raw message.
pub fn fingerprint(body: &str, subject: &str) -> String {
    let prefix: String = body.chars().take(FINGERPRINT_PREFIX_CHARS).collect();
    format!("{subject}:{prefix}")
}

/// Thread-safe result cache. Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct AnalysisCache {
    entries: Arc<DashMap<String, Arc<AnalysisResult>>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Arc<AnalysisResult>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: String, result: Arc<AnalysisResult>) {
        self.entries.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
