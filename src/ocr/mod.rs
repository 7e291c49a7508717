//! Text extraction layer: raw OCR text and the engine seam.

mod mock;

pub use mock::MockReceiptSource;

use std::future::Future;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{OcrError, Result};

/// Ordered, trimmed, non-empty lines recognized from one receipt image.
///
/// Transient: discarded once the parser has consumed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawText {
    lines: Vec<String>,
}

impl RawText {
    /// Split engine output into trimmed, non-empty lines.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// An OCR engine able to recognize text in a receipt image.
///
/// Recognition may take on the order of seconds, so the call is modeled as
/// a suspending operation the caller awaits. The engine itself is an
/// external collaborator; this crate ships no real implementation.
pub trait TextExtractor: Send + Sync {
    /// Recognize text in the image.
    fn extract(
        &self,
        image: &DynamicImage,
    ) -> impl Future<Output = std::result::Result<RawText, OcrError>> + Send;
}

/// Decode raw image bytes ahead of extraction.
///
/// Validating the upload is the caller's responsibility; this helper
/// surfaces decode failures before the engine is ever invoked.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn raw_text_trims_and_drops_blank_lines() {
        let raw = RawText::from_text("  STARBUCKS #1234  \n\n   \n  Total $7.75\n");

        assert_eq!(raw.lines(), ["STARBUCKS #1234", "Total $7.75"]);
    }

    #[test]
    fn raw_text_preserves_line_order() {
        let raw = RawText::from_text("first\nsecond\nthird");

        assert_eq!(raw.lines(), ["first", "second", "third"]);
        assert!(!raw.is_empty());
    }

    #[test]
    fn decode_image_rejects_garbage() {
        assert!(decode_image(b"definitely not an image").is_err());
    }
}
