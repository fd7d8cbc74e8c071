//! `job-ctl` entry-point: parse shared job options, resolve paths, print a report.

use job_options::is_display_request;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use job_ctl::cli;
use job_ctl::error::Result;
use job_ctl::report;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging();
    run().map_err(color_eyre::eyre::Report::from)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let matches = match cli::parse_from(std::env::args_os()) {
        Ok(matches) => matches,
        Err(err) => {
            if !is_display_request(&err) {
                debug!(kind = ?err.kind(), "argument validation failed");
            }
            err.exit();
        }
    };
    let invocation = cli::invocation(&matches)?;
    report::execute(&invocation)
}
