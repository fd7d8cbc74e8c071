//! Library facade for the `job-ctl` demo so integration tests can reuse the
//! command tree and report writers.

pub mod cli;
pub mod error;
pub mod report;
