//! Shared types for the email analysis pipeline.

use serde::{Deserialize, Serialize};

// ── Categories ──────────────────────────────────────────────────────

/// Topical category assigned to an email.
///
/// The set of categories is closed and fixed. Declaration order matters:
/// when two categories score identically, the classifier returns the one
/// declared first, so `Work` is the default for empty or fully
/// out-of-vocabulary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Spam,
    Social,
    Promotions,
    Updates,
    Finance,
    Support,
    Travel,
    Education,
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Category; 10] = [
        Category::Work,
        Category::Personal,
        Category::Spam,
        Category::Social,
        Category::Promotions,
        Category::Updates,
        Category::Finance,
        Category::Support,
        Category::Travel,
        Category::Education,
    ];

    /// Display name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Spam => "Spam",
            Category::Social => "Social",
            Category::Promotions => "Promotions",
            Category::Updates => "Updates",
            Category::Finance => "Finance",
            Category::Support => "Support",
            Category::Travel => "Travel",
            Category::Education => "Education",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Training data ───────────────────────────────────────────────────

/// One labeled exemplar document for the classifier.
///
/// The model is trained from a list of these at construction time —
/// exactly one per category. Supplying an alternate list changes
/// classifier behavior without touching pipeline code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Exemplar text for the category.
    pub text: String,
    /// The category this text represents.
    pub category: Category,
}

impl TrainingExample {
    /// Convenience constructor.
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

// ── Sentiment ───────────────────────────────────────────────────────

/// Overall tone of the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

// ── Analysis result ─────────────────────────────────────────────────

/// Structured verdict for one email, produced by [`EmailAnalyzer::analyze`].
///
/// Immutable once returned; identical inputs produce identical results.
///
/// [`EmailAnalyzer::analyze`]: crate::pipeline::analyzer::EmailAnalyzer::analyze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Best-matching topical category.
    pub category: Category,
    /// Whether a priority keyword appeared in the body or subject.
    pub is_priority: bool,
    /// Extractive summary, bounded by the configured character budget.
    pub summary: String,
    /// Lexicon-based tone of the cleaned body.
    pub sentiment: Sentiment,
    /// Sanitized plain text of the body, retained for display.
    pub cleaned_body: String,
}
