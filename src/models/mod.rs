//! Data models produced by the scanning pipeline.

pub mod receipt;

pub use receipt::{ParsedReceipt, ScanResult};
