//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod check_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use check_command::CheckDepsCommand;
pub use extract_command::ExtractCommand;

use clap::ArgMatches;
use crate::errors::ExtractResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct ImagesieveCommandFactory;

impl ImagesieveCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ImagesieveCommandFactory
    }
}

impl Default for ImagesieveCommandFactory {
    fn default() -> Self {
        ImagesieveCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for ImagesieveCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Box<dyn Command + 'a>> {
        if args.get_flag("check-deps") {
            Ok(Box::new(CheckDepsCommand::new(args, logger)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}
