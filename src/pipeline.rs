//! Scan orchestration: extraction, parsing, and category suggestion.

use image::DynamicImage;
use tracing::{info, warn};

use crate::category;
use crate::models::{ParsedReceipt, ScanResult};
use crate::ocr::{MockReceiptSource, TextExtractor};
use crate::receipt::ReceiptParser;

/// End-to-end receipt scanner.
///
/// Extraction runs first and is the only suspending step; parsing and
/// categorization are synchronous pure computations on its output. Engine
/// failures are absorbed by a deterministic mock receipt, so a scan never
/// fails: the user always gets an editable draft. Concurrent scans share
/// nothing mutable beyond the fallback rotation cursor.
pub struct ReceiptScanner<E> {
    extractor: E,
    parser: ReceiptParser,
    fallback: MockReceiptSource,
}

impl<E: TextExtractor> ReceiptScanner<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            parser: ReceiptParser::new(),
            fallback: MockReceiptSource::new(),
        }
    }

    /// Scan one receipt image into an editable result.
    pub async fn scan(&self, image: &DynamicImage) -> ScanResult {
        let receipt = match self.extractor.extract(image).await {
            Ok(raw) => self.parser.parse(&raw),
            Err(err) => {
                warn!("OCR engine failed, substituting mock receipt: {err}");
                self.fallback.next_receipt()
            }
        };

        self.finish(receipt)
    }

    fn finish(&self, receipt: ParsedReceipt) -> ScanResult {
        let suggestions = category::suggest_all(&receipt.merchant, &receipt.items);
        let best = category::suggest(&receipt.merchant, &receipt.items);

        info!(
            "Scan complete: merchant={:?} category={} ({:.2})",
            receipt.merchant, best.name, best.confidence
        );

        ScanResult {
            receipt,
            category: best,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use crate::category::ExpenseCategory;
    use crate::error::OcrError;
    use crate::ocr::RawText;

    use super::*;

    /// Extractor returning canned text, standing in for a real engine.
    struct FixedExtractor(&'static str);

    impl TextExtractor for FixedExtractor {
        async fn extract(&self, _image: &DynamicImage) -> Result<RawText, OcrError> {
            Ok(RawText::from_text(self.0))
        }
    }

    /// Extractor that always fails, as a crashed engine would.
    struct BrokenExtractor;

    impl TextExtractor for BrokenExtractor {
        async fn extract(&self, _image: &DynamicImage) -> Result<RawText, OcrError> {
            Err(OcrError::Recognition("engine crashed".into()))
        }
    }

    fn blank_image() -> DynamicImage {
        DynamicImage::new_rgb8(1, 1)
    }

    #[tokio::test]
    async fn successful_extraction_is_parsed_and_categorized() {
        let scanner = ReceiptScanner::new(FixedExtractor(
            "STARBUCKS #1234\nGrande Latte 4.50\nTotal $7.75\n01/15/2024",
        ));

        let result = scanner.scan(&blank_image()).await;

        assert!(result.receipt.merchant.starts_with("STARBUCKS"));
        assert_eq!(result.category.name, ExpenseCategory::FoodAndDining);
        assert!(result.category.confidence > 0.0);
        assert_eq!(result.suggestions[0].name, ExpenseCategory::FoodAndDining);
    }

    #[tokio::test]
    async fn engine_failure_falls_back_to_mock_receipt() {
        let scanner = ReceiptScanner::new(BrokenExtractor);

        let result = scanner.scan(&blank_image()).await;

        // Fallback receipt is complete and editable, never an error.
        assert!(!result.receipt.merchant.is_empty());
        assert!(result.receipt.amount > Decimal::ZERO);
        assert!(!result.receipt.items.is_empty());
        assert_eq!(result.suggestions.len(), 9);
    }

    #[tokio::test]
    async fn repeated_failures_rotate_through_mock_receipts() {
        let scanner = ReceiptScanner::new(BrokenExtractor);
        let image = blank_image();

        let first = scanner.scan(&image).await;
        let second = scanner.scan(&image).await;

        assert_ne!(first.receipt.merchant, second.receipt.merchant);
    }

    #[tokio::test]
    async fn unmatched_text_yields_other_with_zero_confidence() {
        let scanner = ReceiptScanner::new(FixedExtractor("ZZZZ\nTotal $5.00"));

        let result = scanner.scan(&blank_image()).await;

        assert_eq!(result.category.name, ExpenseCategory::Other);
        assert_eq!(result.category.confidence, 0.0);
    }
}
