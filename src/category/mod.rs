//! Expense category taxonomy and keyword-based suggestion.

mod suggest;

pub use suggest::{suggest, suggest_all, CategorySuggestion};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of expense categories shown in the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    Healthcare,
    Utilities,
    Travel,
    Education,
    Other,
}

impl ExpenseCategory {
    /// Display label, as rendered in the expense form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Utilities => "Utilities",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword table: category to lowercase keywords, matched as substrings of
/// the search text. Table order defines tie-break order when scoring.
/// `Other` carries no keywords and can never score above zero; it is the
/// fallback, not a possible winner.
pub const CATEGORY_KEYWORDS: &[(ExpenseCategory, &[&str])] = &[
    (
        ExpenseCategory::FoodAndDining,
        &[
            "restaurant", "cafe", "food", "pizza", "burger", "coffee", "starbucks", "mcdonalds",
            "subway", "dining", "meal", "lunch", "dinner", "breakfast",
        ],
    ),
    (
        ExpenseCategory::Transportation,
        &[
            "gas", "fuel", "uber", "lyft", "taxi", "bus", "train", "metro", "parking", "toll",
            "car", "vehicle", "transport",
        ],
    ),
    (
        ExpenseCategory::Shopping,
        &[
            "store", "mall", "retail", "amazon", "target", "walmart", "costco", "shopping",
            "purchase", "buy",
        ],
    ),
    (
        ExpenseCategory::Entertainment,
        &[
            "movie", "cinema", "theater", "concert", "game", "entertainment", "netflix",
            "spotify", "ticket", "show",
        ],
    ),
    (
        ExpenseCategory::Healthcare,
        &[
            "doctor", "hospital", "pharmacy", "medical", "health", "medicine", "clinic",
            "dental", "prescription",
        ],
    ),
    (
        ExpenseCategory::Utilities,
        &[
            "electric", "water", "gas", "internet", "phone", "cable", "utility", "bill",
            "service",
        ],
    ),
    (
        ExpenseCategory::Travel,
        &["hotel", "flight", "airline", "booking", "travel", "vacation", "trip", "airbnb"],
    ),
    (
        ExpenseCategory::Education,
        &["school", "university", "course", "book", "education", "tuition", "class", "learning"],
    ),
    (ExpenseCategory::Other, &[]),
];
