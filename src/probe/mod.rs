//! Environment capability probing
//!
//! Checks which external tools are installed and derives from that the set
//! of document formats this installation can actually handle.

mod capability;
mod prober;
mod tests;

pub use capability::{CapabilitySet, Format};
pub use prober::{DependencyProber, ProbeOutcome, ProbeReport};
