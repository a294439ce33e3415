//! Batch dispatcher / router
//!
//! Takes an ordered list of input paths and one output root, resolves each
//! path to a document type, gates it against the capability set and hands it
//! to the matching strategy. Every failure is contained at the single-file
//! boundary; only the two batch preconditions (inputs chosen, output root
//! chosen) abort before any job runs.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::classify::MimeClassifier;
use crate::errors::{ExtractError, ExtractResult};
use crate::extract::{DocumentExtractor, ExtractionConfig};
use crate::probe::CapabilitySet;
use crate::runner::CommandRunner;
use crate::utils::path_utils;
use crate::utils::progress::ProgressTracker;

/// Aggregate counts for one processed batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of input paths in the batch
    pub total: usize,
    /// Jobs actually handed to a strategy
    pub attempted: usize,
    /// Jobs whose strategy reported failure
    pub failed: usize,
    /// Inputs skipped because they could not be found on disk
    pub skipped_missing: usize,
    /// Inputs skipped as unknown or capability-disabled
    pub skipped_unsupported: usize,
    /// Total images extracted across all jobs
    pub images_extracted: usize,
}

/// Routes each input file to the strategy matching its content type
pub struct BatchRouter<'a> {
    runner: &'a dyn CommandRunner,
    capabilities: &'a CapabilitySet,
    config: ExtractionConfig,
}

impl<'a> BatchRouter<'a> {
    /// Create a router with default extraction tuning
    pub fn new(runner: &'a dyn CommandRunner, capabilities: &'a CapabilitySet) -> Self {
        BatchRouter {
            runner,
            capabilities,
            config: ExtractionConfig::default(),
        }
    }

    /// Create a router with explicit extraction tuning
    pub fn with_config(
        runner: &'a dyn CommandRunner,
        capabilities: &'a CapabilitySet,
        config: ExtractionConfig,
    ) -> Self {
        BatchRouter {
            runner,
            capabilities,
            config,
        }
    }

    /// Process every input file in order, writing under `output_root`
    ///
    /// Each accepted file gets its own subfolder of `output_root`, named
    /// after the file's stem; a stem already used in this batch gets a
    /// numeric suffix instead of overwriting the earlier job's output.
    ///
    /// # Returns
    /// Aggregate counts, or an error when a batch precondition is violated
    /// or the output root cannot be created
    pub fn process(&self, inputs: &[PathBuf], output_root: &Path) -> ExtractResult<BatchReport> {
        if inputs.is_empty() {
            return Err(ExtractError::EmptyBatch);
        }
        if output_root.as_os_str().is_empty() {
            return Err(ExtractError::MissingOutputRoot);
        }
        fs::create_dir_all(output_root)?;

        let classifier = MimeClassifier::new(self.runner);
        let extractor = DocumentExtractor::new(self.runner, self.config);
        let progress = ProgressTracker::new(inputs.len() as u64, "Extracting images");

        let mut report = BatchReport {
            total: inputs.len(),
            ..BatchReport::default()
        };
        let mut used_stems: HashSet<String> = HashSet::new();
        let mut processed = 0;

        for input in inputs {
            self.process_one(input, output_root, &classifier, &extractor, &mut used_stems, &mut report);

            processed += 1;
            info!("Progress: {}/{}", processed, report.total);
            progress.increment(1);
        }

        progress.finish();
        info!("Extraction completed!");

        Ok(report)
    }

    fn process_one(
        &self,
        input: &Path,
        output_root: &Path,
        classifier: &MimeClassifier<'_>,
        extractor: &DocumentExtractor<'_>,
        used_stems: &mut HashSet<String>,
        report: &mut BatchReport,
    ) {
        if !input.is_file() {
            debug!("File not found: {}", input.display());
            report.skipped_missing += 1;
            return;
        }

        let doc_type = match classifier.classify(input) {
            Ok(doc_type) => doc_type,
            Err(e) => {
                error!("Could not classify {}: {}", input.display(), e);
                report.failed += 1;
                return;
            }
        };

        let format = match doc_type.format() {
            Some(format) => format,
            None => {
                info!("Unsupported or unknown type: {}", input.display());
                report.skipped_unsupported += 1;
                return;
            }
        };
        if !self.capabilities.supports(format) {
            info!(
                "Skipping {}: no capability for {} documents",
                input.display(),
                format
            );
            report.skipped_unsupported += 1;
            return;
        }

        let stem = path_utils::file_stem(input);
        let folder_name = path_utils::unique_folder_name(&stem, used_stems);
        let output_folder = output_root.join(folder_name);

        info!("Processing: {} -> {:?}", input.display(), doc_type);
        report.attempted += 1;

        match extractor.extract(doc_type, input, &output_folder) {
            Ok(outcome) => {
                report.images_extracted += outcome.extracted;
            }
            Err(e) => {
                // One bad file never stops the rest of the batch
                error!("Extraction failed for {}: {}", input.display(), e);
                report.failed += 1;
            }
        }
    }
}
