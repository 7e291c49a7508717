//! Keyword scoring over the category taxonomy.

use serde::{Deserialize, Serialize};

use super::{ExpenseCategory, CATEGORY_KEYWORDS};

/// One category scored against a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    /// Category label.
    pub name: ExpenseCategory,

    /// Fraction of the category's keywords found in the search text.
    pub confidence: f32,

    /// The keywords that matched.
    pub keywords: Vec<String>,
}

impl CategorySuggestion {
    fn fallback() -> Self {
        Self {
            name: ExpenseCategory::Other,
            confidence: 0.0,
            keywords: Vec::new(),
        }
    }
}

/// Return the single best-scoring category.
///
/// Ties are broken by table order (first encountered wins, via strict
/// greater-than). When nothing scores above zero the result is `Other`
/// with zero confidence.
pub fn suggest(merchant: &str, items: &[String]) -> CategorySuggestion {
    let text = search_text(merchant, items);
    let mut best = CategorySuggestion::fallback();

    for (category, keywords) in CATEGORY_KEYWORDS {
        let scored = score(*category, keywords, &text);
        if scored.confidence > best.confidence {
            best = scored;
        }
    }

    best
}

/// Score every category, sorted non-increasing by confidence.
///
/// The sort is stable, so equal-confidence entries keep table order.
pub fn suggest_all(merchant: &str, items: &[String]) -> Vec<CategorySuggestion> {
    let text = search_text(merchant, items);

    let mut all: Vec<CategorySuggestion> = CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| score(*category, keywords, &text))
        .collect();

    all.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    all
}

fn search_text(merchant: &str, items: &[String]) -> String {
    format!("{} {}", merchant, items.join(" ")).to_lowercase()
}

fn score(category: ExpenseCategory, keywords: &[&str], text: &str) -> CategorySuggestion {
    let matched: Vec<String> = keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    let confidence = if keywords.is_empty() {
        0.0
    } else {
        matched.len() as f32 / keywords.len() as f32
    };

    CategorySuggestion {
        name: category,
        confidence,
        keywords: matched,
    }
}
