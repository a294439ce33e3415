//! Legacy .doc extraction strategy
//!
//! The legacy binary format is never parsed directly. The office suite
//! converts it headlessly to .docx inside a private temp subdirectory, and
//! the converted file is handed to the zip-container strategy. The temp
//! subdirectory is removed on every exit path.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::{ExtractError, ExtractResult};
use crate::runner::CommandRunner;

use super::strategy::{ensure_output_folder, ExtractionOutcome, ExtractionStrategy};
use super::zip_strategy::ZipStrategy;

/// Name of the private conversion subdirectory inside the output folder
const TEMP_DIR_NAME: &str = "_temp_doc";

/// Extracts images from legacy .doc files via office-suite conversion
pub struct DocStrategy<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> DocStrategy<'a> {
    /// Create a new legacy-doc strategy
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        DocStrategy { runner }
    }

    /// First .docx file found in `dir`, if the conversion produced one
    fn find_converted(dir: &Path) -> Option<PathBuf> {
        let entries = fs::read_dir(dir).ok()?;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let is_docx = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("docx"))
                .unwrap_or(false);
            if path.is_file() && is_docx {
                return Some(path);
            }
        }
        None
    }

    fn convert_and_extract(&self, input: &Path, output_folder: &Path, temp_dir: &Path) -> ExtractResult<ExtractionOutcome> {
        let input_str = input.to_string_lossy();
        let temp_str = temp_dir.to_string_lossy();

        let output = self.runner.run(
            "soffice",
            &[
                "--headless",
                "--convert-to",
                "docx",
                "--outdir",
                temp_str.as_ref(),
                input_str.as_ref(),
            ],
        )?;

        if output.is_not_found() {
            return Err(ExtractError::ToolMissing("soffice".to_string()));
        }
        if !output.success() {
            debug!("soffice exited with {:?} for {}", output.code(), input.display());
        }

        match Self::find_converted(temp_dir) {
            Some(converted) => {
                debug!("Converted {} to {}", input.display(), converted.display());
                ZipStrategy::new(self.runner).extract(&converted, output_folder)
            }
            None => {
                warn!("Conversion failed: no .docx produced for {}", input.display());
                Err(ExtractError::ConversionFailed(input.display().to_string()))
            }
        }
    }
}

impl<'a> ExtractionStrategy for DocStrategy<'a> {
    fn extract(&self, input: &Path, output_folder: &Path) -> ExtractResult<ExtractionOutcome> {
        ensure_output_folder(output_folder);

        let temp_dir = output_folder.join(TEMP_DIR_NAME);
        ensure_output_folder(&temp_dir);

        let result = self.convert_and_extract(input, output_folder, &temp_dir);

        // The temp dir goes away whether or not the conversion worked
        let _ = fs::remove_dir_all(&temp_dir);

        result
    }
}
