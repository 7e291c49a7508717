//! Error types for the receipt-scan library.

use thiserror::Error;

/// Main error type for the receipt scanning pipeline.
///
/// The pipeline itself never surfaces errors past its boundary: engine
/// failures are absorbed by the mock fallback. These variants exist for the
/// caller-side image decoding step and for engine implementations.
#[derive(Error, Debug)]
pub enum ScanError {
    /// OCR engine error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors raised by a text extraction engine.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine could not be initialized.
    #[error("failed to initialize engine: {0}")]
    Init(String),

    /// Text recognition failed on this image.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The image cannot be processed by the engine.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the receipt-scan library.
pub type Result<T> = std::result::Result<T, ScanError>;
