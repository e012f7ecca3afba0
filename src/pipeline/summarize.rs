//! Extractive summarization — TF-IDF ranked sentence selection under a
//! character budget, biased toward subject-line terms.
//!
//! Each sentence of the cleaned body is one document in a small TF-IDF
//! corpus; the subject (repeated three times) is injected as one extra
//! pseudo-document so subject terms influence the weighting. Top-ranked
//! sentences are appended greedily until the budget would overflow.

use std::collections::HashMap;

use regex::Regex;

/// Default character budget for summaries.
pub const DEFAULT_SUMMARY_MAX_LEN: usize = 100;

/// Returned when nothing at all can be summarized.
const NO_SUMMARY: &str = "No summary available";

/// Summarization seam.
///
/// The pipeline ships one synchronous implementation ([`TfIdfSummarizer`]).
/// Heavier summarizers can be plugged in at analyzer construction — always
/// explicitly, never initialized in the background.
pub trait Summarize: Send + Sync {
    /// Produce a summary of `cleaned`. Sentences are appended greedily
    /// and the cumulative length (subject prefix included) never crosses
    /// `max_len`, though the prefix alone may already exceed it.
    fn summarize(&self, cleaned: &str, subject: &str, max_len: usize) -> String;
}

/// Deterministic TF-IDF extractive summarizer.
pub struct TfIdfSummarizer {
    word_re: Regex,
}

impl TfIdfSummarizer {
    pub fn new() -> Self {
        Self {
            word_re: Regex::new(r"[a-z0-9]+").unwrap(),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for TfIdfSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarize for TfIdfSummarizer {
    fn summarize(&self, cleaned: &str, subject: &str, max_len: usize) -> String {
        let subject = subject.trim();

        let sentences: Vec<&str> = cleaned
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            if subject.is_empty() {
                return NO_SUMMARY.to_string();
            }
            return format!("Subject: {subject}");
        }

        // Corpus: one document per sentence, plus the subject tripled as a
        // pseudo-document so its terms weigh on the statistics.
        let mut docs: Vec<Vec<String>> = sentences.iter().map(|s| self.tokenize(s)).collect();
        if !subject.is_empty() {
            let subject_tokens = self.tokenize(subject);
            let mut pseudo = Vec::with_capacity(subject_tokens.len() * 3);
            for _ in 0..3 {
                pseudo.extend(subject_tokens.iter().cloned());
            }
            docs.push(pseudo);
        }

        // Document frequency per term.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in &docs {
            let mut seen: Vec<&str> = Vec::new();
            for token in doc {
                if !seen.contains(&token.as_str()) {
                    seen.push(token);
                    *df.entry(token).or_insert(0) += 1;
                }
            }
        }
        let corpus_size = docs.len() as f64;

        // Score each sentence against its own position in the corpus.
        let scores: Vec<f64> = sentences
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let mut tf: HashMap<&str, usize> = HashMap::new();
                for token in &docs[i] {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf.iter()
                    .map(|(token, &count)| {
                        let idf = (corpus_size / df[token] as f64).ln();
                        count as f64 * idf
                    })
                    .sum()
            })
            .collect();

        // Rank descending; sort_by is stable, so equal scores keep the
        // original sentence order.
        let mut order: Vec<usize> = (0..sentences.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut out = if subject.is_empty() {
            String::new()
        } else {
            format!("Subject: {subject}. ")
        };
        let mut used = out.chars().count();
        for &i in &order {
            let addition = sentences[i].chars().count() + 2;
            if used + addition > max_len {
                break;
            }
            out.push_str(sentences[i]);
            out.push_str(". ");
            used += addition;
        }

        let out = out.trim();
        if out.is_empty() {
            NO_SUMMARY.to_string()
        } else {
            out.to_string()
        }
    }
}
