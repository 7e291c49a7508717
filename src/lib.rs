//! Receipt scanning pipeline for expense capture.
//!
//! This crate provides:
//! - A text-extraction seam over an external OCR engine ([`TextExtractor`])
//! - Heuristic field parsing from raw receipt text ([`ReceiptParser`])
//! - Keyword-based expense category suggestion ([`category`])
//! - Scan orchestration with a deterministic fallback when the engine fails
//!   ([`ReceiptScanner`])
//!
//! The pipeline is a pure-function chain: extraction is the only suspending
//! step, and every field degrades to a documented default rather than an
//! error, so a scan always yields an editable [`ParsedReceipt`].

pub mod category;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pipeline;
pub mod receipt;

pub use category::{CategorySuggestion, ExpenseCategory};
pub use error::{OcrError, Result, ScanError};
pub use models::{ParsedReceipt, ScanResult};
pub use ocr::{MockReceiptSource, RawText, TextExtractor};
pub use pipeline::ReceiptScanner;
pub use receipt::ReceiptParser;
