//! Error types for the `job-ctl` demo.
//!
//! Parse failures stay as `clap` errors so they render through `clap` and
//! exit with its usage status. Everything after parsing is wrapped here and
//! reported through `color-eyre`.
use thiserror::Error;

/// Errors raised by the demo after argument parsing succeeds.
#[derive(Debug, Error)]
pub enum JobCtlError {
    /// Shared options could not be read or resolved.
    #[error(transparent)]
    Options(#[from] job_options::OptionError),
    /// Writing a report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// Encoding a report as JSON failed.
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    /// Matches carried no subcommand.
    #[error("no subcommand supplied")]
    MissingSubcommand,
    /// `clap` produced matches for a subcommand the demo does not know.
    #[error("unknown subcommand '{0}'")]
    UnknownSubcommand(String),
}

/// Convenience alias for fallible demo operations.
pub type Result<T, E = JobCtlError> = std::result::Result<T, E>;
