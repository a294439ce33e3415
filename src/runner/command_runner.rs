//! Process runner trait definitions
//!
//! Commands are always invoked with an argument vector, never through a
//! shell, so filenames containing quotes or spaces need no escaping.

use crate::errors::ExtractResult;

/// How an external command invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The process ran and exited with this code
    Exited(i32),
    /// The program could not be found on the system
    NotFound,
}

/// Captured result of one external command invocation
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Termination status of the command
    pub status: RunStatus,
    /// Captured standard output, with stderr discarded
    pub stdout: String,
}

impl RunOutput {
    /// Build an output for a command that exited with `code` and wrote nothing
    pub fn exit(code: i32) -> Self {
        RunOutput {
            status: RunStatus::Exited(code),
            stdout: String::new(),
        }
    }

    /// Build an output for a command that exited with `code` and wrote `stdout`
    pub fn with_stdout(code: i32, stdout: &str) -> Self {
        RunOutput {
            status: RunStatus::Exited(code),
            stdout: stdout.to_string(),
        }
    }

    /// Build an output for a program that is not installed
    pub fn not_found() -> Self {
        RunOutput {
            status: RunStatus::NotFound,
            stdout: String::new(),
        }
    }

    /// Exit code, if the process actually ran
    pub fn code(&self) -> Option<i32> {
        match self.status {
            RunStatus::Exited(code) => Some(code),
            RunStatus::NotFound => None,
        }
    }

    /// True when the command ran and exited with code zero
    pub fn success(&self) -> bool {
        self.status == RunStatus::Exited(0)
    }

    /// True when the program was not found at all
    pub fn is_not_found(&self) -> bool {
        self.status == RunStatus::NotFound
    }
}

/// Runs external commands and captures their outcome
///
/// This is the seam between the extraction logic and the operating system.
/// Production code uses [`super::SystemRunner`]; tests substitute a
/// [`super::ScriptedRunner`] so no real binaries are ever spawned.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing stdout and discarding stderr
    ///
    /// # Arguments
    /// * `program` - Name or path of the executable
    /// * `args` - Argument vector, passed through unescaped
    ///
    /// # Returns
    /// The captured outcome, or an error for I/O failures other than
    /// "program not found" (which is reported through [`RunStatus::NotFound`])
    fn run(&self, program: &str, args: &[&str]) -> ExtractResult<RunOutput>;
}
