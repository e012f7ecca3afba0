//! Pipeline orchestrator.
//!
//! Flow per message:
//! 1. Fingerprint lookup — cache hit returns immediately
//! 2. Sanitize → classify / priority / sentiment / summarize
//! 3. Assemble the result, store it, return it
//!
//! Every call returns either a cached value or a freshly computed,
//! fully-populated result. No retries, no partial results.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::error::Error;
use crate::pipeline::cache::{AnalysisCache, fingerprint};
use crate::pipeline::classify::CategoryModel;
use crate::pipeline::priority::PriorityDetector;
use crate::pipeline::sanitize::ContentSanitizer;
use crate::pipeline::sentiment::SentimentAnalyzer;
use crate::pipeline::summarize::{Summarize, TfIdfSummarizer};
use crate::pipeline::types::AnalysisResult;

/// The email analysis pipeline.
///
/// All state is built at construction and read-only afterward, so the
/// analyzer can be shared across threads freely. Concurrent calls with
/// the same fingerprint may both compute; the computation is
/// deterministic and the cache keeps whichever write lands last.
pub struct EmailAnalyzer {
    sanitizer: ContentSanitizer,
    model: CategoryModel,
    priority: PriorityDetector,
    sentiment: SentimentAnalyzer,
    summarizer: Arc<dyn Summarize>,
    cache: AnalysisCache,
    summary_max_len: usize,
}

impl EmailAnalyzer {
    /// Build an analyzer with the default TF-IDF summarizer.
    ///
    /// Trains the category model up front; an invalid training set is a
    /// construction error, never a degraded default.
    pub fn new(config: AnalyzerConfig) -> Result<Self, Error> {
        Self::with_summarizer(config, Arc::new(TfIdfSummarizer::new()))
    }

    /// Build an analyzer with a custom summarizer implementation.
    pub fn with_summarizer(
        config: AnalyzerConfig,
        summarizer: Arc<dyn Summarize>,
    ) -> Result<Self, Error> {
        let model = CategoryModel::train(&config.training)?;
        Ok(Self {
            sanitizer: ContentSanitizer::new(),
            model,
            priority: PriorityDetector::new(&config.priority_keywords),
            sentiment: SentimentAnalyzer::new(&config.positive_words, &config.negative_words),
            summarizer,
            cache: AnalysisCache::new(),
            summary_max_len: config.summary_max_len,
        })
    }

    /// Analyze one email body and subject into a structured verdict.
    pub fn analyze(&self, body: &str, subject: &str) -> Arc<AnalysisResult> {
        let key = fingerprint(body, subject);
        if let Some(hit) = self.cache.get(&key) {
            debug!(subject, "analysis cache hit");
            return hit;
        }

        let cleaned_body = self.sanitizer.sanitize(body);
        let category = self.model.classify(&cleaned_body, subject);
        let is_priority = self.priority.is_priority(&cleaned_body, subject);
        let sentiment = self.sentiment.analyze(&cleaned_body);
        let summary = self
            .summarizer
            .summarize(&cleaned_body, subject, self.summary_max_len);

        info!(
            category = %category,
            is_priority,
            ?sentiment,
            "email analysis complete"
        );

        let result = Arc::new(AnalysisResult {
            category,
            is_priority,
            summary,
            sentiment,
            cleaned_body,
        });
        self.cache.insert(key, Arc::clone(&result));
        result
    }

    /// Number of memoized results (observability and tests).
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }
}
