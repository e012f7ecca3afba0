//! Text preprocessing for classification: case-fold, stopword removal,
//! Porter-style stemming. The summarizer deliberately does *not* use
//! this — it ranks raw sentences so the output stays readable.

use std::collections::HashSet;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// Low-information words dropped before classification.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can",
    "did", "do", "for", "from", "had", "has", "have", "he", "her", "him",
    "his", "how", "i", "if", "in", "is", "it", "its", "may", "me", "my",
    "no", "not", "of", "on", "or", "our", "she", "so", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "to", "us", "was", "we", "were", "what", "when", "where",
    "which", "who", "will", "with", "would", "you", "your",
];

/// Normalizes text into the classifier's token representation.
pub struct TextPreprocessor {
    word_re: Regex,
    stemmer: Stemmer,
    stopwords: HashSet<&'static str>,
}

impl TextPreprocessor {
    pub fn new() -> Self {
        Self {
            word_re: Regex::new(r"[a-z0-9]+").unwrap(),
            stemmer: Stemmer::create(Algorithm::English),
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Lowercase, tokenize on word boundaries, drop stopwords, stem,
    /// and re-join with single spaces, preserving order.
    pub fn preprocess(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    /// Token stream form of [`preprocess`](Self::preprocess).
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_re
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| !self.stopwords.contains(word))
            .map(|word| self.stemmer.stem(word).into_owned())
            .collect()
    }
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_tokenizes() {
        let p = TextPreprocessor::new();
        assert_eq!(p.preprocess("Meeting Tomorrow"), "meet tomorrow");
    }

    #[test]
    fn removes_stopwords() {
        let p = TextPreprocessor::new();
        let out = p.preprocess("the project is on the track");
        assert!(!out.contains("the"));
        assert!(out.contains("project"));
        assert!(out.contains("track"));
    }

    #[test]
    fn stems_words() {
        let p = TextPreprocessor::new();
        assert_eq!(p.preprocess("running runs"), "run run");
    }

    #[test]
    fn punctuation_splits_tokens() {
        let p = TextPreprocessor::new();
        assert_eq!(p.preprocess("hello,world! q3-report"), "hello world q3 report");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let p = TextPreprocessor::new();
        assert_eq!(p.preprocess(""), "");
        assert_eq!(p.preprocess("the and of"), "");
    }

    #[test]
    fn preserves_token_order() {
        let p = TextPreprocessor::new();
        assert_eq!(p.preprocess("invoice payment receipt"), "invoic payment receipt");
    }
}
