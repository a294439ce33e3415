//! Scripted process runner for tests
//!
//! Responds to command invocations from a fixed script instead of spawning
//! real processes. Responders are closures, so a script can also fake the
//! filesystem side effects a real tool would have (writing artifact files).

use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::ExtractResult;

use super::command_runner::{CommandRunner, RunOutput};

type Responder = Box<dyn Fn(&[&str]) -> RunOutput + Send + Sync>;

/// One recorded command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Program that was invoked
    pub program: String,
    /// Arguments it was invoked with
    pub args: Vec<String>,
}

/// Command runner that answers from a script and records every call
///
/// Programs without a registered responder behave as if they were not
/// installed, which is exactly what a missing dependency looks like to
/// the prober.
pub struct ScriptedRunner {
    responders: HashMap<String, Responder>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    /// Create a runner with an empty script
    pub fn new() -> Self {
        ScriptedRunner {
            responders: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register a responder for `program`
    ///
    /// The responder receives the argument vector and returns the outcome
    /// the fake tool should report.
    pub fn on<F>(mut self, program: &str, responder: F) -> Self
    where
        F: Fn(&[&str]) -> RunOutput + Send + Sync + 'static,
    {
        self.responders.insert(program.to_string(), Box::new(responder));
        self
    }

    /// All calls recorded so far, in invocation order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded calls to one specific program
    pub fn calls_to(&self, program: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.program == program)
            .collect()
    }
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        ScriptedRunner::new()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> ExtractResult<RunOutput> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });

        match self.responders.get(program) {
            Some(responder) => Ok(responder(args)),
            None => Ok(RunOutput::not_found()),
        }
    }
}
