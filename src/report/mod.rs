//! Result reporting.
//!
//! - [`SolveResult`]: the contract returned by every solve entry point
//! - [`ResultReporter`]: assembles results from solver outcomes

mod reporter;
mod result;

pub use reporter::ResultReporter;
pub use result::{Algorithm, SolveResult, Termination};
