//! Priority detection — case-insensitive keyword presence over the
//! cleaned body and the subject line.

use crate::config::default_priority_keywords;

/// Flags messages containing urgency keywords.
///
/// Pure substring matching, no scoring. The keyword list is supplied at
/// construction so deployments can tune it without touching pipeline code.
pub struct PriorityDetector {
    keywords: Vec<String>,
}

impl PriorityDetector {
    /// Build a detector from a keyword list. Keywords are matched
    /// case-insensitively; multi-word phrases are allowed.
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Detector with the built-in keyword list.
    pub fn with_defaults() -> Self {
        Self::new(&default_priority_keywords())
    }

    /// True if any keyword appears in either the body or the subject.
    pub fn is_priority(&self, cleaned: &str, subject: &str) -> bool {
        let body = cleaned.to_lowercase();
        let subject = subject.to_lowercase();
        self.keywords
            .iter()
            .any(|k| body.contains(k.as_str()) || subject.contains(k.as_str()))
    }
}
