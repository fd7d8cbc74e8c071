//! Shared command-line options for job tooling.
//!
//! This crate layers two kinds of validation over plain [`clap::Arg`]
//! declarations: mutual exclusivity between options, checked once after
//! parsing, and value validators such as the GCS location check. It also
//! provides the job directory, config file, override, and template options
//! used across job commands, plus helpers to resolve the parsed paths.
//!
//! ```
//! use clap::Command;
//! use job_options::{ValidatedCommand, options};
//!
//! let cli = ValidatedCommand::new(Command::new("run"))
//!     .option(options::job_dir_with(["config_file"]))
//!     .option(options::config_file_with(["job_dir"]));
//! let err = cli
//!     .try_get_matches_from(["run", "--job-dir", ".", "--config-file", "x.yaml"])
//!     .expect_err("exclusive options rejected");
//! assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
//! ```

mod command;
mod error;
mod exclusive;
mod flag;
pub mod gcs;
pub mod options;
mod paths;

pub use command::{ValidatedCommand, supplied_ids};
pub use error::{OptionError, OptionErrorKind, is_display_request};
pub use exclusive::{Exclusivity, check_exclusive};
pub use flag::{format_flag_list, long_flag};
pub use options::SharedOption;
pub use paths::{DEFAULT_CONFIG_FILE, JobOptions, JobPaths};
