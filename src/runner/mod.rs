//! External command invocation
//!
//! Every piece of real work in this application is delegated to an external
//! tool, so the process boundary is modelled as a narrow trait that can be
//! swapped out for a scripted fake in tests.

mod command_runner;
mod system_runner;
mod scripted_runner;

pub use command_runner::{CommandRunner, RunOutput, RunStatus};
pub use system_runner::SystemRunner;
pub use scripted_runner::{RecordedCall, ScriptedRunner};
