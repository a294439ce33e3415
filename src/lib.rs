pub mod errors;
pub mod runner;
pub mod probe;
pub mod classify;
pub mod extract;
pub mod batch;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ImageSieve;

pub use batch::{BatchReport, BatchRouter};
pub use classify::{DocumentType, MimeClassifier};
pub use extract::{DocumentExtractor, ExtractionConfig};
pub use probe::{CapabilitySet, DependencyProber, Format};
pub use runner::{CommandRunner, SystemRunner};
