//! Command tree for the `job-ctl` demo.
//!
//! `run` declares `--job-dir` and `--config-file` exclusive in both
//! directions. `show` declares the rule on `--job-dir` only, so supplying
//! both is rejected with the error naming `--job-dir`. `verify` demonstrates
//! the GCS location validator.
use std::ffi::OsString;

use clap::{ArgMatches, Command};
use job_options::{JobOptions, ValidatedCommand, gcs, options};

use crate::error::{JobCtlError, Result};

/// Binary name used in usage output.
pub const BIN_NAME: &str = "job-ctl";

/// Identifier of the `verify --location` argument.
pub const LOCATION: &str = "location";

/// A parsed and typed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the resolved job paths and raw overrides.
    Run(JobOptions),
    /// Check an output location for the job.
    Verify {
        /// Shared options supplied to the subcommand.
        job: JobOptions,
        /// Location supplied with `--location`, already validated.
        location: Option<String>,
    },
    /// Dump the shared options and resolved paths as JSON.
    Show(JobOptions),
}

/// Builds the full command tree.
#[must_use]
pub fn command() -> ValidatedCommand {
    ValidatedCommand::new(
        Command::new(BIN_NAME)
            .bin_name(BIN_NAME)
            .about("Inspect job options the way job tooling parses them")
            .version(env!("CARGO_PKG_VERSION")),
    )
    .subcommand(run_command())
    .subcommand(verify_command())
    .subcommand(show_command())
    .map_command(|root| root.subcommand_required(true).arg_required_else_help(true))
}

fn run_command() -> ValidatedCommand {
    ValidatedCommand::new(Command::new("run").about("Resolve and print the job paths"))
        .option(options::job_dir_with([options::CONFIG_FILE]))
        .option(options::config_file_with([options::JOB_DIR]))
        .option(options::override_opt())
        .option(options::template())
}

fn verify_command() -> ValidatedCommand {
    ValidatedCommand::new(Command::new("verify").about("Check a GCS output location"))
        .option(options::job_dir())
        .arg(
            gcs::gcs_uri_arg(LOCATION, "location")
                .help("Output location for the job. Must use the gs:// scheme."),
        )
}

fn show_command() -> ValidatedCommand {
    ValidatedCommand::new(Command::new("show").about("Print the shared options as JSON"))
        .option(options::job_dir_with([options::CONFIG_FILE]))
        .option(options::config_file())
        .option(options::override_opt())
        .option(options::template())
}

/// Parses `args` against [`command`].
///
/// # Errors
///
/// Returns the `clap` error for malformed arguments, missing paths, bad
/// locations, and exclusivity violations.
pub fn parse_from<I, T>(args: I) -> Result<ArgMatches, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    command().try_get_matches_from(args)
}

/// Converts parsed matches into an [`Invocation`].
///
/// # Errors
///
/// Returns [`JobCtlError`] when the matches carry no known subcommand or the
/// shared options cannot be read.
pub fn invocation(matches: &ArgMatches) -> Result<Invocation> {
    let Some((name, sub_matches)) = matches.subcommand() else {
        return Err(JobCtlError::MissingSubcommand);
    };
    let job = JobOptions::from_matches(sub_matches)?;
    match name {
        "run" => Ok(Invocation::Run(job)),
        "verify" => Ok(Invocation::Verify {
            job,
            location: sub_matches.get_one::<String>(LOCATION).cloned(),
        }),
        "show" => Ok(Invocation::Show(job)),
        other => Err(JobCtlError::UnknownSubcommand(other.to_owned())),
    }
}
