//! Lexicon-based sentiment scoring for the cleaned body.

use std::collections::HashSet;

use crate::config::{default_negative_words, default_positive_words};
use crate::pipeline::types::Sentiment;

/// Counts positive and negative lexicon hits over lowercased tokens.
///
/// Deliberately simple: a positive word adds one, a negative word
/// subtracts one, and the sign of the total decides the verdict. No
/// stemming — the lexicons hold surface forms.
pub struct SentimentAnalyzer {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentAnalyzer {
    pub fn new(positive: &[String], negative: &[String]) -> Self {
        Self {
            positive: positive.iter().map(|w| w.to_lowercase()).collect(),
            negative: negative.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&default_positive_words(), &default_negative_words())
    }

    /// Score the cleaned body text.
    pub fn analyze(&self, cleaned: &str) -> Sentiment {
        let lowered = cleaned.to_lowercase();
        let mut score = 0i32;
        for token in lowered.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            if self.positive.contains(token) {
                score += 1;
            }
            if self.negative.contains(token) {
                score -= 1;
            }
        }

        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_words_win() {
        let s = SentimentAnalyzer::with_defaults();
        assert_eq!(
            s.analyze("Thanks for the great work, really pleased with it"),
            Sentiment::Positive
        );
    }

    #[test]
    fn negative_words_win() {
        let s = SentimentAnalyzer::with_defaults();
        assert_eq!(
            s.analyze("Sorry, the delivery was bad and I am disappointed"),
            Sentiment::Negative
        );
    }

    #[test]
    fn balanced_or_empty_is_neutral() {
        let s = SentimentAnalyzer::with_defaults();
        assert_eq!(s.analyze(""), Sentiment::Neutral);
        assert_eq!(s.analyze("The meeting is at noon"), Sentiment::Neutral);
        // one positive, one negative
        assert_eq!(s.analyze("good but bad"), Sentiment::Neutral);
    }

    #[test]
    fn matching_is_whole_word() {
        let s = SentimentAnalyzer::with_defaults();
        // "goodness" must not count as "good"
        assert_eq!(s.analyze("goodness gracious"), Sentiment::Neutral);
    }
}
