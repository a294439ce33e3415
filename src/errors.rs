//! Custom error types for document image extraction

use std::fmt;
use std::io;

/// Extraction-specific error types
#[derive(Debug)]
pub enum ExtractError {
    /// I/O error
    IoError(io::Error),
    /// Batch started with no input files
    EmptyBatch,
    /// Batch started with no output root chosen
    MissingOutputRoot,
    /// A required external tool is not installed
    ToolMissing(String),
    /// Page count could not be determined for a DjVu document
    PageCountUnavailable(String),
    /// Office-suite conversion produced no output file
    ConversionFailed(String),
    /// An external extraction tool failed
    ExtractionFailed(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::IoError(e) => write!(f, "I/O error: {}", e),
            ExtractError::EmptyBatch => write!(f, "Input files are not chosen!"),
            ExtractError::MissingOutputRoot => write!(f, "Output folder is not chosen!"),
            ExtractError::ToolMissing(tool) => write!(f, "Command not found: {}", tool),
            ExtractError::PageCountUnavailable(path) => {
                write!(f, "Could not determine page count for {}", path)
            }
            ExtractError::ConversionFailed(path) => {
                write!(f, "Conversion produced no output for {}", path)
            }
            ExtractError::ExtractionFailed(msg) => write!(f, "Extraction failed: {}", msg),
            ExtractError::GenericError(msg) => write!(f, "Extraction error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::IoError(error)
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

impl From<String> for ExtractError {
    fn from(msg: String) -> Self {
        ExtractError::GenericError(msg)
    }
}
