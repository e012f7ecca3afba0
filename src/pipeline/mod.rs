//! Email content analysis pipeline.
//!
//! Raw body and subject flow through:
//! 1. `AnalysisCache` — fingerprint lookup (fast path)
//! 2. `ContentSanitizer` — HTML → clean plain text
//! 3. `CategoryModel` / `PriorityDetector` / `SentimentAnalyzer` /
//!    `Summarize` — independent verdicts over the cleaned text
//! 4. Assembled `AnalysisResult`, memoized and returned
//!
//! The pipeline performs no I/O and never mutates mailbox state: it is a
//! pure function of `(body, subject, trained model)` modulo the cache.

pub mod analyzer;
pub mod cache;
pub mod classify;
pub mod preprocess;
pub mod priority;
pub mod sanitize;
pub mod sentiment;
pub mod summarize;
pub mod types;

pub use analyzer::EmailAnalyzer;
pub use types::{AnalysisResult, Category, Sentiment, TrainingExample};
