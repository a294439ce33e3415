//! Zip-container extraction strategy
//!
//! Handles every zip-based document container (.docx, .odt, .epub, plain
//! .zip) with one `unzip` invocation that pulls out only image entries,
//! flattens the directory structure and overwrites existing outputs, so a
//! re-run yields the same file set instead of suffixed duplicates.

use std::path::Path;

use log::{debug, info};

use crate::errors::{ExtractError, ExtractResult};
use crate::runner::CommandRunner;
use crate::utils::path_utils;

use super::strategy::{ensure_output_folder, ExtractionOutcome, ExtractionStrategy};

/// Case-insensitive glob patterns for the image entries worth extracting
const IMAGE_GLOBS: &[&str] = &[
    "*.[pP][nN][gG]",
    "*.[jJ][pP][gG]",
    "*.[jJ][pP][eE][gG]",
    "*.[gG][iI][fF]",
    "*.[bB][mM][pP]",
    "*.[tT][iI][fF]*",
    "*.[sS][vV][gG]",
    "*.[wW][mM][fF]",
    "*.[eE][mM][fF]",
];

/// Entry paths matching this pattern are never extracted
const THUMBNAIL_EXCLUDE: &str = "*/thumbnail*";

/// Extracts image entries from zip-based document containers
pub struct ZipStrategy<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> ZipStrategy<'a> {
    /// Create a new zip-container strategy
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        ZipStrategy { runner }
    }
}

impl<'a> ExtractionStrategy for ZipStrategy<'a> {
    fn extract(&self, input: &Path, output_folder: &Path) -> ExtractResult<ExtractionOutcome> {
        ensure_output_folder(output_folder);

        let input_str = input.to_string_lossy();
        let output_str = output_folder.to_string_lossy();

        // -j flattens paths, -o overwrites without asking
        let mut args: Vec<&str> = vec!["-j", "-o", input_str.as_ref()];
        args.extend_from_slice(IMAGE_GLOBS);
        args.extend_from_slice(&["-x", THUMBNAIL_EXCLUDE, "-d", output_str.as_ref()]);

        let output = self.runner.run("unzip", &args)?;

        if output.is_not_found() {
            return Err(ExtractError::ToolMissing("unzip".to_string()));
        }
        if !output.success() {
            // Exit 11 just means no entry matched the globs
            debug!("unzip exited with {:?} for {}", output.code(), input.display());
        }

        let extracted = path_utils::count_files(output_folder);
        info!("Extracted {} image(s) from {}", extracted, input.display());

        Ok(ExtractionOutcome { extracted })
    }
}
