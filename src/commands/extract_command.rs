//! Batch extraction command
//!
//! This module implements the command for extracting images from a batch
//! of documents: probe the environment, then route every input file to the
//! strategy matching its content type.

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::errors::{ExtractError, ExtractResult};
use crate::extract::ExtractionConfig;
use crate::probe::ProbeOutcome;
use crate::utils::logger::Logger;

/// Command for extracting images from a batch of documents
pub struct ExtractCommand<'a> {
    /// Input document paths, in batch order
    inputs: Vec<PathBuf>,
    /// Root directory receiving one subfolder per document
    output_root: PathBuf,
    /// Extraction tuning knobs
    config: ExtractionConfig,
    /// Abort instead of continuing when only some tools are present
    strict_deps: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance, or a validation error when no inputs
    /// or no output folder were chosen
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Self> {
        let inputs: Vec<PathBuf> = args
            .get_many::<String>("inputs")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();
        if inputs.is_empty() {
            return Err(ExtractError::EmptyBatch);
        }
        info!("Input files: {}", inputs.len());

        let output_root = args
            .get_one::<String>("output")
            .map(PathBuf::from)
            .ok_or(ExtractError::MissingOutputRoot)?;
        info!("Output folder: {}", output_root.display());

        let mut config = ExtractionConfig::default();
        if let Some(threshold) = args.get_one::<String>("blank-threshold") {
            config.blank_threshold = threshold.parse::<u64>().map_err(|_| {
                ExtractError::GenericError(format!("Invalid blank threshold: {}", threshold))
            })?;
        }
        if let Some(floor) = args.get_one::<String>("min-render-size") {
            config.min_render_size = floor.parse::<u64>().map_err(|_| {
                ExtractError::GenericError(format!("Invalid minimum render size: {}", floor))
            })?;
        }

        Ok(ExtractCommand {
            inputs,
            output_root,
            config,
            strict_deps: args.get_flag("strict-deps"),
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        let api = crate::api::ImageSieve::new(Some("imagesieve.log"))?.with_config(self.config);

        let report = api.check_dependencies()?;
        match report.outcome() {
            ProbeOutcome::AllFound => info!("All dependencies found!"),
            ProbeOutcome::Partial if self.strict_deps => {
                return Err(ExtractError::GenericError(
                    "Some dependencies were not found".to_string(),
                ));
            }
            ProbeOutcome::Partial => {
                warn!("Some dependencies were not found. Continuing with reduced format support.");
            }
            ProbeOutcome::NoneFound => {
                return Err(ExtractError::GenericError(
                    "No dependencies found. Please install dependencies and try again.".to_string(),
                ));
            }
        }

        let batch = api.extract_batch(&self.inputs, &self.output_root, &report.capabilities)?;

        self.logger.log(&format!(
            "Attempted {} of {} file(s), {} image(s) extracted, {} failed, {} skipped",
            batch.attempted,
            batch.total,
            batch.images_extracted,
            batch.failed,
            batch.skipped_missing + batch.skipped_unsupported
        ))?;

        Ok(())
    }
}
