//! Line-oriented heuristic parser from raw OCR text to structured fields.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::ParsedReceipt;
use crate::ocr::RawText;

use super::rules::{amount_candidate, contains_amount, contains_date, date_candidate};

/// Fixed quality score attached to every heuristic parse. This is a
/// best-effort flag, not a calibrated per-field score.
const PARSE_CONFIDENCE: f32 = 0.8;

/// Heuristic receipt parser.
///
/// Pure and infallible: the same lines always produce the same output
/// (modulo the current-date fallback), and every field degrades to its
/// documented default when no candidate is found.
///
/// Known weaknesses, kept on purpose since the expense draft is edited by
/// the user anyway: a large non-total number wins when no line carries a
/// total/amount label, a spurious date late in the receipt overwrites an
/// earlier correct one, and merchant joining only looks one line ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptParser;

impl ReceiptParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw OCR lines into structured receipt fields.
    pub fn parse(&self, raw: &RawText) -> ParsedReceipt {
        let lines = raw.lines();

        // Merchant: first line, joined with the second when that second
        // line is neither an amount nor a date line (two-line headers such
        // as store name + store number).
        let mut merchant = String::new();
        if let Some(first) = lines.first() {
            merchant.clone_from(first);
            if let Some(second) = lines.get(1) {
                if !contains_amount(second) && !contains_date(second) {
                    merchant.push(' ');
                    merchant.push_str(second);
                }
            }
        }

        let mut amount = Decimal::ZERO;
        let mut date = None;
        let mut items = Vec::new();

        for line in lines {
            // Total/amount-labeled lines always win; among unlabeled
            // candidates the largest seen so far is retained.
            if let Some(candidate) = amount_candidate(line) {
                let lower = line.to_lowercase();
                if lower.contains("total") || lower.contains("amount") || candidate > amount {
                    amount = candidate;
                }
            }

            // Last matching line wins.
            if let Some(candidate) = date_candidate(line) {
                date = Some(candidate);
            }

            // Item lines: no amount, no date, not the merchant string, and
            // a plausible length.
            if !contains_amount(line)
                && !contains_date(line)
                && *line != merchant
                && line.len() > 3
                && line.len() < 50
            {
                items.push(line.clone());
            }
        }

        items.truncate(ParsedReceipt::MAX_ITEMS);

        let receipt = ParsedReceipt {
            merchant: if merchant.is_empty() {
                ParsedReceipt::UNKNOWN_MERCHANT.to_string()
            } else {
                merchant
            },
            amount,
            date: date.unwrap_or_else(|| Utc::now().date_naive()),
            items,
            confidence: PARSE_CONFIDENCE,
        };

        debug!(
            "Parsed receipt: merchant={:?} amount={} items={}",
            receipt.merchant,
            receipt.amount,
            receipt.items.len()
        );

        receipt
    }
}
