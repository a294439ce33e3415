//! Extraction strategy definitions
//!
//! This module defines the strategy pattern for the per-format extractors,
//! plus the facade the router uses to dispatch a classified document.

use std::fs;
use std::path::Path;

use log::{error, info, warn};

use crate::classify::DocumentType;
use crate::errors::{ExtractError, ExtractResult};
use crate::runner::CommandRunner;

/// Tunable knobs shared by the strategies
///
/// The DjVu thresholds are heuristics, not format requirements, so they are
/// carried as configuration rather than constants.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionConfig {
    /// Background-layer artifacts at or below this many bytes mark a blank page
    pub blank_threshold: u64,
    /// Rendered pages must exceed this many bytes to be counted
    pub min_render_size: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            blank_threshold: 200,
            min_render_size: 1000,
        }
    }
}

/// Result of one strategy invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionOutcome {
    /// Number of images the strategy believes it extracted
    pub extracted: usize,
}

/// Strategy for extracting images from one document format
///
/// Each implementation creates the output folder if absent (a creation
/// failure is not fatal in itself, the following tool call fails visibly
/// instead) and invokes its external tools with output suppressed.
pub trait ExtractionStrategy {
    /// Extract images from `input` into `output_folder`
    ///
    /// # Arguments
    /// * `input` - Path to the source document
    /// * `output_folder` - Folder that will receive the extracted images
    ///
    /// # Returns
    /// The extraction outcome, or an error describing why this job failed.
    /// Errors are job-scoped; the caller decides whether to continue.
    fn extract(&self, input: &Path, output_folder: &Path) -> ExtractResult<ExtractionOutcome>;
}

/// Factory for creating the strategy matching a document type
pub struct StrategyFactory<'a> {
    /// Runner the strategies invoke their tools through
    runner: &'a dyn CommandRunner,
    /// Shared tuning knobs
    config: ExtractionConfig,
}

impl<'a> StrategyFactory<'a> {
    /// Create a new factory instance
    ///
    /// # Arguments
    /// * `runner` - Process runner handed to every strategy
    /// * `config` - Tuning knobs, mostly for the DjVu strategy
    pub fn new(runner: &'a dyn CommandRunner, config: ExtractionConfig) -> Self {
        StrategyFactory { runner, config }
    }

    /// Create the strategy handling `doc_type`
    ///
    /// # Returns
    /// A boxed strategy, or an error for [`DocumentType::Unknown`]
    pub fn create_strategy(&self, doc_type: DocumentType) -> ExtractResult<Box<dyn ExtractionStrategy + 'a>> {
        match doc_type {
            DocumentType::Pdf => Ok(Box::new(super::pdf_strategy::PdfStrategy::new(self.runner))),
            DocumentType::Djvu => Ok(Box::new(super::djvu_strategy::DjvuStrategy::new(
                self.runner,
                self.config,
            ))),
            DocumentType::ZipContainer => Ok(Box::new(super::zip_strategy::ZipStrategy::new(self.runner))),
            DocumentType::DocLegacy => Ok(Box::new(super::doc_strategy::DocStrategy::new(self.runner))),
            DocumentType::Unknown => {
                error!("No extraction strategy for unknown document type");
                Err(ExtractError::GenericError(
                    "No extraction strategy for unknown document type".to_string(),
                ))
            }
        }
    }
}

/// Main extractor that delegates to the appropriate format strategy
///
/// This facade gives the router a single entry point without exposing the
/// individual strategy types.
pub struct DocumentExtractor<'a> {
    factory: StrategyFactory<'a>,
}

impl<'a> DocumentExtractor<'a> {
    /// Create a new document extractor
    pub fn new(runner: &'a dyn CommandRunner, config: ExtractionConfig) -> Self {
        DocumentExtractor {
            factory: StrategyFactory::new(runner, config),
        }
    }

    /// Extract images from a classified document
    ///
    /// # Arguments
    /// * `doc_type` - Type resolved by the classifier
    /// * `input` - Path to the source document
    /// * `output_folder` - Folder that will receive the extracted images
    pub fn extract(
        &self,
        doc_type: DocumentType,
        input: &Path,
        output_folder: &Path,
    ) -> ExtractResult<ExtractionOutcome> {
        info!("Extracting from {} to {}", input.display(), output_folder.display());

        let strategy = self.factory.create_strategy(doc_type)?;
        strategy.extract(input, output_folder)
    }
}

/// Create `folder` if it does not exist yet
///
/// Failure is logged but not propagated: the tool invocation that follows
/// will fail visibly on its own.
pub(crate) fn ensure_output_folder(folder: &Path) {
    if let Err(e) = fs::create_dir_all(folder) {
        warn!("Could not create {}: {}", folder.display(), e);
    }
}
