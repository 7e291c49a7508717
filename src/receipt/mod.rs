//! Heuristic receipt field parsing.

pub mod parser;
pub mod rules;

pub use parser::ReceiptParser;
