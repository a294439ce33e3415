use std::path::{Path, PathBuf};

use log::info;

use crate::batch::{BatchReport, BatchRouter};
use crate::classify::{DocumentType, MimeClassifier};
use crate::errors::ExtractResult;
use crate::extract::ExtractionConfig;
use crate::probe::{CapabilitySet, DependencyProber, ProbeReport};
use crate::runner::SystemRunner;
use crate::utils::logger::Logger;

/// Main interface to the imagesieve library
pub struct ImageSieve {
    logger: Logger,
    runner: SystemRunner,
    config: ExtractionConfig,
}

impl ImageSieve {
    /// Create a new ImageSieve instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "imagesieve.log"
    ///
    /// # Returns
    /// An ImageSieve instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExtractResult<Self> {
        let log_path = log_file.unwrap_or("imagesieve.log");
        let logger = Logger::new(log_path).map_err(crate::errors::ExtractError::from)?;
        Ok(ImageSieve {
            logger,
            runner: SystemRunner::new(),
            config: ExtractionConfig::default(),
        })
    }

    /// Override the default extraction tuning
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Probe the environment for the external tools
    ///
    /// # Returns
    /// The probe report with capability flags and found/total counts
    pub fn check_dependencies(&self) -> ExtractResult<ProbeReport> {
        DependencyProber::new(&self.runner).probe()
    }

    /// Classify a single file by its content
    pub fn classify(&self, path: &Path) -> ExtractResult<DocumentType> {
        MimeClassifier::new(&self.runner).classify(path)
    }

    /// Extract images from every input file under pre-probed capabilities
    ///
    /// Each accepted document gets its own subfolder of `output_root` named
    /// after the file's stem. Unsupported, unreadable and failing inputs are
    /// skipped without aborting the rest of the batch.
    ///
    /// # Arguments
    /// * `inputs` - Ordered batch of document paths
    /// * `output_root` - Directory receiving the per-document subfolders
    /// * `capabilities` - Format flags from a prior dependency probe
    ///
    /// # Returns
    /// Aggregate batch counts, or an error when a batch precondition fails
    pub fn extract_batch(
        &self,
        inputs: &[PathBuf],
        output_root: &Path,
        capabilities: &CapabilitySet,
    ) -> ExtractResult<BatchReport> {
        let router = BatchRouter::with_config(&self.runner, capabilities, self.config);
        let batch = router.process(inputs, output_root)?;

        self.logger
            .log(&format!(
                "Batch finished: {} attempted, {} image(s) extracted",
                batch.attempted, batch.images_extracted
            ))
            .map_err(crate::errors::ExtractError::from)?;

        Ok(batch)
    }

    /// Probe the environment, then extract images from every input file
    pub fn process(&self, inputs: &[PathBuf], output_root: &Path) -> ExtractResult<BatchReport> {
        let report = self.check_dependencies()?;
        info!("Dependencies available: {}/{}", report.found, report.total);

        self.extract_batch(inputs, output_root, &report.capabilities)
    }
}
