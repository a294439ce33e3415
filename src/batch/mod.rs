//! Batch dispatch across a list of input documents

mod router;
mod tests;

pub use router::{BatchReport, BatchRouter};
