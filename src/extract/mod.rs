//! Image extraction from document containers
//!
//! This module provides functionality to pull embedded images out of
//! different document formats using a strategy pattern. Every strategy
//! delegates the actual decoding to an external, format-specialized tool.

mod strategy;
mod pdf_strategy;
mod zip_strategy;
mod doc_strategy;
mod djvu_strategy;
mod tests;

// Public exports
pub use strategy::{DocumentExtractor, ExtractionConfig, ExtractionOutcome, ExtractionStrategy, StrategyFactory};
pub use pdf_strategy::PdfStrategy;
pub use zip_strategy::ZipStrategy;
pub use doc_strategy::DocStrategy;
pub use djvu_strategy::DjvuStrategy;
