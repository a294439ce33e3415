//! Process runner backed by std::process

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use log::debug;

use crate::errors::ExtractResult;

use super::command_runner::{CommandRunner, RunOutput, RunStatus};

/// Runs external commands as real subprocesses
///
/// Invocations are synchronous: the call blocks until the tool exits.
/// Standard error is routed to the null device so external tools never
/// write over the interactive surface.
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        SystemRunner
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        SystemRunner::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> ExtractResult<RunOutput> {
        debug!("Running: {} {}", program, args.join(" "));

        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match result {
            Ok(output) => {
                // A killed process has no exit code; fold it into -1 so
                // callers only deal with integers.
                let code = output.status.code().unwrap_or(-1);
                Ok(RunOutput {
                    status: RunStatus::Exited(code),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(RunOutput::not_found()),
            Err(e) => Err(e.into()),
        }
    }
}
