//! Content-based document type classification
//!
//! Files are classified by what they contain, never by their extension.

mod classifier;
mod tests;

pub use classifier::{map_mime, DocumentType, MimeClassifier};
