//! Naive Bayes category classifier.
//!
//! The model compiles a small training corpus — one exemplar document per
//! category — into per-category token frequency tables. Scoring walks the
//! preprocessed input once per category and sums Laplace-smoothed log
//! probabilities, so unseen vocabulary degrades scores evenly instead of
//! zeroing them out.

use std::collections::{HashMap, HashSet};

use crate::error::TrainingError;
use crate::pipeline::preprocess::TextPreprocessor;
use crate::pipeline::types::{Category, TrainingExample};

/// Additive smoothing constant (Laplace).
const SMOOTHING: f64 = 1.0;

/// Per-category token frequency table.
struct CategoryTable {
    category: Category,
    counts: HashMap<String, u32>,
    total: u32,
}

impl CategoryTable {
    /// Smoothed log-likelihood of the token stream under this category.
    fn score(&self, tokens: &[String], vocab_size: usize) -> f64 {
        let denominator = f64::from(self.total) + SMOOTHING * vocab_size as f64;
        tokens
            .iter()
            .map(|token| {
                let count = self.counts.get(token).copied().unwrap_or(0);
                ((f64::from(count) + SMOOTHING) / denominator).ln()
            })
            .sum()
    }
}

/// Trained category model. Built once at startup, read-only afterward.
///
/// Construction validates the training set: exactly one exemplar per
/// category, and every exemplar must survive preprocessing. Rebuilding
/// requires re-supplying the full training set.
pub struct CategoryModel {
    preprocessor: TextPreprocessor,
    tables: Vec<CategoryTable>,
    vocab_size: usize,
}

impl CategoryModel {
    /// Train a model from a list of exemplars.
    pub fn train(examples: &[TrainingExample]) -> Result<Self, TrainingError> {
        if examples.is_empty() {
            return Err(TrainingError::EmptySet);
        }

        let preprocessor = TextPreprocessor::new();
        let mut by_category: HashMap<Category, Vec<String>> = HashMap::new();

        for example in examples {
            let tokens = preprocessor.tokens(&example.text);
            if tokens.is_empty() {
                return Err(TrainingError::EmptyExample(example.category));
            }
            if by_category.insert(example.category, tokens).is_some() {
                return Err(TrainingError::DuplicateCategory(example.category));
            }
        }

        for category in Category::ALL {
            if !by_category.contains_key(&category) {
                return Err(TrainingError::MissingCategory(category));
            }
        }

        let vocab: HashSet<&str> = by_category
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        let vocab_size = vocab.len();

        // Tables in fixed category order so ties resolve deterministically.
        let tables = Category::ALL
            .iter()
            .map(|&category| {
                let mut counts: HashMap<String, u32> = HashMap::new();
                let tokens = &by_category[&category];
                for token in tokens {
                    *counts.entry(token.clone()).or_insert(0) += 1;
                }
                CategoryTable {
                    category,
                    total: tokens.len() as u32,
                    counts,
                }
            })
            .collect();

        Ok(Self {
            preprocessor,
            tables,
            vocab_size,
        })
    }

    /// Classify cleaned body text plus subject line.
    ///
    /// Total function: always returns one of the ten labels. Empty or
    /// fully out-of-vocabulary input scores every category identically
    /// and resolves to the first category in declaration order.
    pub fn classify(&self, cleaned: &str, subject: &str) -> Category {
        let input = format!("{cleaned} {subject}");
        let tokens = self.preprocessor.tokens(&input);

        // Zero-hit input carries no category evidence; the smoothed
        // scores would differ only by exemplar length, so resolve it to
        // the first category directly.
        let any_known = tokens
            .iter()
            .any(|token| self.tables.iter().any(|t| t.counts.contains_key(token)));
        if !any_known {
            return Category::ALL[0];
        }

        let mut best = Category::ALL[0];
        let mut best_score = f64::NEG_INFINITY;
        for table in &self.tables {
            let score = table.score(&tokens, self.vocab_size);
            // Strictly greater: earlier categories win exact ties.
            if score > best_score {
                best = table.category;
                best_score = score;
            }
        }
        best
    }
}

// Stemmer holds a bare function pointer and has no Debug of its own.
impl std::fmt::Debug for CategoryModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryModel")
            .field("categories", &self.tables.len())
            .field("vocab_size", &self.vocab_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_training_set;

    fn model() -> CategoryModel {
        CategoryModel::train(&default_training_set()).unwrap()
    }

    #[test]
    fn training_examples_classify_to_their_own_category() {
        let model = model();
        for example in default_training_set() {
            let got = model.classify(&example.text, "");
            assert_eq!(
                got, example.category,
                "exemplar for {} classified as {}",
                example.category, got
            );
        }
    }

    #[test]
    fn work_email_classifies_as_work() {
        let model = model();
        let got = model.classify("The project deadline is Friday.", "Project Update");
        assert_eq!(got, Category::Work);
    }

    #[test]
    fn travel_email_classifies_as_travel() {
        let model = model();
        let got = model.classify(
            "Your flight to Lisbon is confirmed, hotel booking attached.",
            "Itinerary",
        );
        assert_eq!(got, Category::Travel);
    }

    #[test]
    fn empty_input_defaults_to_work() {
        let model = model();
        assert_eq!(model.classify("", ""), Category::Work);
    }

    #[test]
    fn out_of_vocabulary_input_defaults_to_work() {
        let model = model();
        // No token matches any exemplar: exemplar length must not pick a
        // winner, the first category in declaration order does.
        assert_eq!(model.classify("xylophone zephyr quux", ""), Category::Work);
        assert_eq!(model.classify("", "qwyjibo"), Category::Work);
    }

    #[test]
    fn single_known_token_still_drives_classification() {
        let model = model();
        // One in-vocabulary token amid unknowns is enough evidence.
        assert_eq!(model.classify("xylophone zephyr flight", ""), Category::Travel);
    }

    #[test]
    fn empty_training_set_is_rejected() {
        let err = CategoryModel::train(&[]).unwrap_err();
        assert!(matches!(err, TrainingError::EmptySet));
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let mut examples = default_training_set();
        examples.push(TrainingExample::new("extra work words", Category::Work));
        let err = CategoryModel::train(&examples).unwrap_err();
        assert!(matches!(err, TrainingError::DuplicateCategory(Category::Work)));
    }

    #[test]
    fn missing_category_is_rejected() {
        let mut examples = default_training_set();
        examples.retain(|e| e.category != Category::Education);
        let err = CategoryModel::train(&examples).unwrap_err();
        assert!(matches!(
            err,
            TrainingError::MissingCategory(Category::Education)
        ));
    }

    #[test]
    fn stopword_only_example_is_rejected() {
        let mut examples = default_training_set();
        for example in &mut examples {
            if example.category == Category::Spam {
                example.text = "the and of to".into();
            }
        }
        let err = CategoryModel::train(&examples).unwrap_err();
        assert!(matches!(err, TrainingError::EmptyExample(Category::Spam)));
    }
}
