//! Rendering of invocation reports.
//!
//! Writers take any [`Write`] sink so tests can capture output without
//! spawning the binary.

use std::io::{self, Write};

use job_options::{JobOptions, JobPaths};
use serde::Serialize;
use tracing::info;

use crate::cli::Invocation;
use crate::error::Result;

#[derive(Serialize)]
struct ShowReport<'a> {
    options: &'a JobOptions,
    paths: &'a JobPaths,
}

/// Executes `invocation`, writing its report to standard output.
///
/// # Errors
///
/// Returns an error when paths cannot be resolved or the report cannot be
/// written.
pub fn execute(invocation: &Invocation) -> Result<()> {
    let mut stdout = io::stdout().lock();
    execute_to(&mut stdout, invocation)
}

/// Executes `invocation`, writing its report to `out`.
///
/// # Errors
///
/// Returns an error when paths cannot be resolved or the report cannot be
/// written.
pub fn execute_to<W: Write>(out: &mut W, invocation: &Invocation) -> Result<()> {
    match invocation {
        Invocation::Run(job) => {
            let paths = job.resolve()?;
            info!(job_dir = %paths.job_dir, "running job");
            write_run(out, job, &paths)?;
        }
        Invocation::Verify { job, location } => {
            let paths = job.resolve()?;
            write_verify(out, &paths, location.as_deref())?;
        }
        Invocation::Show(job) => {
            let paths = job.resolve()?;
            write_show(out, job, &paths)?;
        }
    }
    Ok(())
}

/// Writes the resolved paths followed by each raw override and template.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing fails.
pub fn write_run<W: Write>(out: &mut W, job: &JobOptions, paths: &JobPaths) -> io::Result<()> {
    writeln!(out, "job dir: {}", paths.job_dir)?;
    writeln!(out, "config file: {}", paths.config_file)?;
    for value in &job.overrides {
        writeln!(out, "override: {value}")?;
    }
    for value in &job.templates {
        writeln!(out, "template: {value}")?;
    }
    Ok(())
}

/// Writes the job directory and the validated location.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing fails.
pub fn write_verify<W: Write>(
    out: &mut W,
    paths: &JobPaths,
    location: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "job dir: {}", paths.job_dir)?;
    let shown = location
        .filter(|value| !value.is_empty())
        .unwrap_or("not set");
    writeln!(out, "location: {shown}")
}

/// Writes the options and resolved paths as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when encoding or writing fails.
pub fn write_show<W: Write>(out: &mut W, job: &JobOptions, paths: &JobPaths) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &ShowReport { options: job, paths })?;
    writeln!(out)?;
    Ok(())
}
