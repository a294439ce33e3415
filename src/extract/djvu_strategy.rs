//! DjVu extraction strategy
//!
//! Scanned DjVu documents are full of blank or near-blank pages, and
//! rendering a full page is expensive. Each page therefore gets a cheap
//! probe first: only its background layer is extracted, and the size of
//! that compressed artifact decides whether the page carries real content.
//! A nearly empty background compresses to almost nothing, while a page of
//! scanned material produces a substantially larger artifact. Only pages
//! that pass the probe are rendered in full.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::errors::{ExtractError, ExtractResult};
use crate::runner::{CommandRunner, RunOutput};

use super::strategy::{ensure_output_folder, ExtractionConfig, ExtractionOutcome, ExtractionStrategy};

/// Name of the private artifact subdirectory inside the output folder
const TEMP_DIR_NAME: &str = "_djvu_temp";

/// Extracts non-blank pages of DjVu documents as full-quality images
pub struct DjvuStrategy<'a> {
    runner: &'a dyn CommandRunner,
    /// Background artifacts at or below this size mark a blank page
    blank_threshold: u64,
    /// Rendered pages must exceed this size to be counted
    min_render_size: u64,
}

impl<'a> DjvuStrategy<'a> {
    /// Create a new DjVu strategy with the given thresholds
    pub fn new(runner: &'a dyn CommandRunner, config: ExtractionConfig) -> Self {
        DjvuStrategy {
            runner,
            blank_threshold: config.blank_threshold,
            min_render_size: config.min_render_size,
        }
    }

    /// Page count as reported by the page-info tool, 0 when unparseable
    fn page_count(&self, input: &Path) -> ExtractResult<i64> {
        let input_str = input.to_string_lossy();
        let output = self.runner.run("djvused", &["-e", "n", input_str.as_ref()])?;

        if output.is_not_found() {
            return Err(ExtractError::ToolMissing("djvused".to_string()));
        }

        Ok(output.stdout.trim().parse::<i64>().unwrap_or(0))
    }

    /// Extract the background layer of one page into `artifact`
    fn extract_background(&self, input: &Path, artifact: &Path, page: i64) -> ExtractResult<RunOutput> {
        let input_str = input.to_string_lossy();
        let bg_arg = format!("BG44={}", artifact.display());
        let page_arg = format!("-page={}", page);

        self.runner
            .run("djvuextract", &[input_str.as_ref(), &bg_arg, &page_arg])
    }

    /// Render one full original page into `output_file`
    fn render_page(&self, input: &Path, output_file: &Path, page: i64) -> ExtractResult<RunOutput> {
        let input_str = input.to_string_lossy();
        let output_str = output_file.to_string_lossy();
        let page_arg = format!("-page={}", page);

        self.runner.run(
            "ddjvu",
            &["-format=tiff", &page_arg, input_str.as_ref(), output_str.as_ref()],
        )
    }

    fn file_size(path: &Path) -> u64 {
        fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }

    /// Probe and render every page, returning the accepted-page count
    ///
    /// May bail out mid-document on a runner failure; the caller owns the
    /// temp dir and removes it whatever happens here.
    fn extract_pages(
        &self,
        input: &Path,
        output_folder: &Path,
        temp_dir: &Path,
        pages: i64,
    ) -> ExtractResult<usize> {
        let mut extracted: usize = 0;

        for page in 1..=pages {
            let artifact = temp_dir.join(format!("page_{}.iw44", page));

            let probe = self.extract_background(input, &artifact, page)?;
            if !probe.success() {
                // No background layer on this page: routine blank-page case
                debug!("Page {} of {} has no background layer, skipping", page, input.display());
                continue;
            }

            if Self::file_size(&artifact) <= self.blank_threshold {
                debug!("Page {} of {} is blank, skipping", page, input.display());
                let _ = fs::remove_file(&artifact);
                continue;
            }

            // Output numbering is dense over accepted pages, not source pages
            let output_file = output_folder.join(format!("page_{:04}.tiff", extracted + 1));
            self.render_page(input, &output_file, page)?;

            if Self::file_size(&output_file) > self.min_render_size {
                extracted += 1;
            } else {
                debug!(
                    "Rendered page {} of {} is implausibly small, not counting it",
                    page,
                    input.display()
                );
            }

            let _ = fs::remove_file(&artifact);
        }

        Ok(extracted)
    }
}

impl<'a> ExtractionStrategy for DjvuStrategy<'a> {
    fn extract(&self, input: &Path, output_folder: &Path) -> ExtractResult<ExtractionOutcome> {
        ensure_output_folder(output_folder);

        let pages = self.page_count(input)?;
        if pages <= 0 {
            warn!("Could not determine page count for {}", input.display());
            // Don't leave an empty folder behind for a job that produced nothing
            let _ = fs::remove_dir(output_folder);
            return Err(ExtractError::PageCountUnavailable(input.display().to_string()));
        }

        let temp_dir = output_folder.join(TEMP_DIR_NAME);
        ensure_output_folder(&temp_dir);

        let result = self.extract_pages(input, output_folder, &temp_dir, pages);

        // The artifact dir goes away whether or not the page loop survived
        let _ = fs::remove_dir_all(&temp_dir);

        match result {
            Ok(extracted) => {
                if extracted == 0 {
                    let _ = fs::remove_dir(output_folder);
                }
                info!("Extracted {} page(s) from {}", extracted, input.display());
                Ok(ExtractionOutcome { extracted })
            }
            Err(e) => {
                // Only removes the folder when the aborted job wrote nothing
                let _ = fs::remove_dir(output_folder);
                Err(e)
            }
        }
    }
}
