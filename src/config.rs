//! Analyzer configuration and built-in defaults.
//!
//! Everything behavior-shaping — training exemplars, priority keywords,
//! sentiment lexicons, the summary budget — is plain data supplied at
//! construction time. The defaults reproduce the canonical pipeline; a
//! deployment can swap any of them without touching pipeline code.

use std::path::Path;

use crate::error::ConfigError;
use crate::pipeline::summarize::DEFAULT_SUMMARY_MAX_LEN;
use crate::pipeline::types::{Category, TrainingExample};

/// Configuration for [`EmailAnalyzer`](crate::pipeline::analyzer::EmailAnalyzer).
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Training corpus: exactly one exemplar per category.
    pub training: Vec<TrainingExample>,
    /// Keywords that flag a message as priority.
    pub priority_keywords: Vec<String>,
    /// Positive sentiment lexicon.
    pub positive_words: Vec<String>,
    /// Negative sentiment lexicon.
    pub negative_words: Vec<String>,
    /// Character budget for summaries.
    pub summary_max_len: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            training: default_training_set(),
            priority_keywords: default_priority_keywords(),
            positive_words: default_positive_words(),
            negative_words: default_negative_words(),
            summary_max_len: DEFAULT_SUMMARY_MAX_LEN,
        }
    }
}

/// The built-in training corpus: one hand-written exemplar per category.
///
/// Exemplar wording leans on each category's signature vocabulary so the
/// model stays self-consistent (every exemplar classifies to its own
/// category).
pub fn default_training_set() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new(
            "Project meeting this week, the deadline for the client report moved, \
             please review the agenda before the meeting",
            Category::Work,
        ),
        TrainingExample::new(
            "Happy birthday! The family is planning a holiday together and a friend \
             may join the personal celebration",
            Category::Personal,
        ),
        TrainingExample::new(
            "Congratulations winner! Claim your prize now, this limited time offer \
             expires soon, act fast",
            Category::Spam,
        ),
        TrainingExample::new(
            "You are invited to the party, an event invitation from your social \
             network, see who else is attending",
            Category::Social,
        ),
        TrainingExample::new(
            "Big sale this weekend, use the discount code at checkout for an extra \
             promotion on every deal",
            Category::Promotions,
        ),
        TrainingExample::new(
            "Monthly newsletter update, an announcement about notification changes \
             rolling out to the service",
            Category::Updates,
        ),
        TrainingExample::new(
            "Your invoice is ready, the payment for this bill and the transaction \
             appear on your financial statement",
            Category::Finance,
        ),
        TrainingExample::new(
            "We received your help request, the support team is investigating the \
             issue and the problem, assistance is on the way",
            Category::Support,
        ),
        TrainingExample::new(
            "Your flight is confirmed, the hotel booking and the reservation \
             details for your travel are attached",
            Category::Travel,
        ),
        TrainingExample::new(
            "The course begins next week, class lecture notes and the first \
             assignment are posted by the school",
            Category::Education,
        ),
    ]
}

/// Default urgency keywords for the priority detector.
pub fn default_priority_keywords() -> Vec<String> {
    [
        "urgent",
        "important",
        "asap",
        "deadline",
        "critical",
        "immediate attention",
        "time-sensitive",
        "priority",
    ]
    .map(String::from)
    .to_vec()
}

/// Default positive sentiment lexicon.
pub fn default_positive_words() -> Vec<String> {
    ["good", "great", "excellent", "happy", "pleased", "thanks", "appreciate"]
        .map(String::from)
        .to_vec()
}

/// Default negative sentiment lexicon.
pub fn default_negative_words() -> Vec<String> {
    ["bad", "poor", "unhappy", "disappointed", "frustrated", "sorry", "issue"]
        .map(String::from)
        .to_vec()
}

/// Load an alternate training set from a JSON file.
///
/// The file holds an array of `{"text": ..., "category": ...}` objects.
/// Failures are explicit, checked errors — there is no fall-back to the
/// built-in corpus.
pub fn load_training_set(path: impl AsRef<Path>) -> Result<Vec<TrainingExample>, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_training_set_covers_every_category_once() {
        let set = default_training_set();
        assert_eq!(set.len(), 10);
        for category in Category::ALL {
            assert_eq!(
                set.iter().filter(|e| e.category == category).count(),
                1,
                "category {category} must appear exactly once"
            );
        }
    }

    #[test]
    fn default_keyword_list_is_complete() {
        let keywords = default_priority_keywords();
        assert_eq!(keywords.len(), 8);
        assert!(keywords.contains(&"immediate attention".to_string()));
    }

    #[test]
    fn load_training_set_parses_json() {
        let dir = std::env::temp_dir();
        let path = dir.join("mail_insight_training_test.json");
        std::fs::write(
            &path,
            r#"[{"text": "flight hotel", "category": "Travel"}]"#,
        )
        .unwrap();
        let set = load_training_set(&path).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].category, Category::Travel);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_training_set_reports_missing_file() {
        let err = load_training_set("/nonexistent/training.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_training_set_reports_bad_json() {
        let dir = std::env::temp_dir();
        let path = dir.join("mail_insight_bad_training_test.json");
        std::fs::write(&path, "not json").unwrap();
        let err = load_training_set(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        std::fs::remove_file(&path).ok();
    }
}
