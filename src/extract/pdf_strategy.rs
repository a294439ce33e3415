//! PDF extraction strategy
//!
//! A single `pdfimages` call dumps every embedded raster image into the
//! output folder under a fixed `img` prefix. The tool numbers the files
//! itself; no further validation is done on its output.

use std::path::Path;

use log::{debug, info};

use crate::errors::{ExtractError, ExtractResult};
use crate::runner::CommandRunner;
use crate::utils::path_utils;

use super::strategy::{ensure_output_folder, ExtractionOutcome, ExtractionStrategy};

/// Extracts embedded raster images from PDF documents
pub struct PdfStrategy<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> PdfStrategy<'a> {
    /// Create a new PDF strategy
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        PdfStrategy { runner }
    }
}

impl<'a> ExtractionStrategy for PdfStrategy<'a> {
    fn extract(&self, input: &Path, output_folder: &Path) -> ExtractResult<ExtractionOutcome> {
        ensure_output_folder(output_folder);

        let prefix = output_folder.join("img");
        let input_str = input.to_string_lossy();
        let prefix_str = prefix.to_string_lossy();

        let output = self
            .runner
            .run("pdfimages", &["-all", input_str.as_ref(), prefix_str.as_ref()])?;

        if output.is_not_found() {
            return Err(ExtractError::ToolMissing("pdfimages".to_string()));
        }
        if !output.success() {
            // pdfimages grumbles about malformed files but usually still
            // writes what it could recover
            debug!("pdfimages exited with {:?} for {}", output.code(), input.display());
        }

        let extracted = path_utils::count_files(output_folder);
        info!("Extracted {} image(s) from {}", extracted, input.display());

        Ok(ExtractionOutcome { extracted })
    }
}
