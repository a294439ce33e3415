//! Dependency check command
//!
//! Probes the environment for the external tools and reports which
//! document formats this installation can handle.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{ExtractError, ExtractResult};
use crate::probe::{DependencyProber, Format, ProbeOutcome};
use crate::runner::SystemRunner;
use crate::utils::logger::Logger;

/// Command that runs the dependency probe and reports the result
pub struct CheckDepsCommand<'a> {
    /// Treat a partial environment as a failure
    strict: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CheckDepsCommand<'a> {
    /// Create a new dependency check command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Self> {
        Ok(CheckDepsCommand {
            strict: args.get_flag("strict-deps"),
            logger,
        })
    }
}

impl<'a> Command for CheckDepsCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        let runner = SystemRunner::new();
        let report = DependencyProber::new(&runner).probe()?;

        for format in [Format::Pdf, Format::Djvu, Format::Doc, Format::EpubZip] {
            let state = if report.capabilities.supports(format) {
                "supported"
            } else {
                "unavailable"
            };
            self.logger.log(&format!("  {}: {}", format, state))?;
        }

        match report.outcome() {
            ProbeOutcome::AllFound => {
                info!("All dependencies found!");
                Ok(())
            }
            ProbeOutcome::Partial if self.strict => Err(ExtractError::GenericError(
                "Some dependencies were not found".to_string(),
            )),
            ProbeOutcome::Partial => {
                info!("Some dependencies were not found. Format support is reduced.");
                Ok(())
            }
            ProbeOutcome::NoneFound => Err(ExtractError::GenericError(
                "No dependencies found. Please install dependencies and try again.".to_string(),
            )),
        }
    }
}
