//! Receipt data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::CategorySuggestion;

/// Structured fields extracted from one receipt image.
///
/// Every field has a documented fallback, so a parse always produces a
/// complete value the user can edit before saving the expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    /// Best-guess merchant name.
    pub merchant: String,

    /// Best-guess transaction total, non-negative.
    pub amount: Decimal,

    /// Transaction date; serializes as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Candidate line items in scan order, at most [`Self::MAX_ITEMS`].
    pub items: Vec<String>,

    /// Heuristic quality score in [0, 1] for the parse as a whole.
    pub confidence: f32,
}

impl ParsedReceipt {
    /// Merchant sentinel used when no line qualified.
    pub const UNKNOWN_MERCHANT: &'static str = "Unknown Merchant";

    /// Upper bound on extracted line items.
    pub const MAX_ITEMS: usize = 5;
}

/// Complete output of one scan: parsed fields plus category ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// The parsed (or fabricated) receipt.
    pub receipt: ParsedReceipt,

    /// Highest-confidence category, pre-selected in the expense draft.
    pub category: CategorySuggestion,

    /// Every category ranked by confidence, for the quick-pick list.
    pub suggestions: Vec<CategorySuggestion>,
}
