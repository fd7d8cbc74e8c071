//! Option definitions shared by job commands.
//!
//! Each factory returns a [`SharedOption`] ready to attach with
//! [`ValidatedCommand::option`](crate::ValidatedCommand::option). Options
//! that can participate in exclusivity rules come in two forms: a bare
//! factory with no companions, and a `_with` factory taking the companion
//! identifiers.

use std::convert::Infallible;
use std::path::Path;

use camino::Utf8PathBuf;
use clap::{Arg, ArgAction};

use crate::error::OptionError;
use crate::exclusive::Exclusivity;

/// Identifier of the job directory option.
pub const JOB_DIR: &str = "job_dir";
/// Identifier of the config file option.
pub const CONFIG_FILE: &str = "config_file";
/// Identifier of the override option.
pub const OVERRIDE: &str = "override";
/// Identifier of the template option.
pub const TEMPLATE: &str = "template";

/// A `clap` argument paired with its exclusivity rule.
#[derive(Debug, Clone)]
pub struct SharedOption {
    arg: Arg,
    exclusivity: Exclusivity,
}

impl SharedOption {
    /// Pairs `arg` with `exclusivity`, appending the rule's note to the help.
    #[must_use]
    pub fn new(arg: Arg, exclusivity: Exclusivity) -> Self {
        Self {
            arg: exclusivity.annotate(arg),
            exclusivity,
        }
    }

    /// Wraps `arg` with an empty rule.
    #[must_use]
    pub fn plain(arg: Arg) -> Self {
        let exclusivity = Exclusivity::none(arg.get_id().as_str());
        Self { arg, exclusivity }
    }

    /// Builds an option whose identifier is exclusive with `companions`.
    #[must_use]
    pub fn exclusive<I, S>(arg: Arg, companions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let exclusivity = Exclusivity::new(arg.get_id().as_str(), companions);
        Self::new(arg, exclusivity)
    }

    /// The annotated `clap` argument.
    #[must_use]
    pub const fn arg(&self) -> &Arg {
        &self.arg
    }

    /// The exclusivity rule declared on this option.
    #[must_use]
    pub const fn exclusivity(&self) -> &Exclusivity {
        &self.exclusivity
    }

    /// Splits the option into its argument and rule.
    #[must_use]
    pub fn into_parts(self) -> (Arg, Exclusivity) {
        (self.arg, self.exclusivity)
    }
}

/// `-j/--job-dir` with no exclusivity rule.
#[must_use]
pub fn job_dir() -> SharedOption {
    job_dir_with(Vec::<String>::new())
}

/// `-j/--job-dir`, exclusive with `mutex`.
///
/// # Examples
///
/// ```
/// use job_options::options;
///
/// let option = options::job_dir_with(["config_file"]);
/// let help = option.arg().get_help().map(ToString::to_string).unwrap_or_default();
/// assert!(help.contains("`--config-file`"));
/// ```
#[must_use]
pub fn job_dir_with<I, S>(mutex: I) -> SharedOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let arg = Arg::new(JOB_DIR)
        .short('j')
        .long("job-dir")
        .value_name("PATH")
        .value_parser(existing_path_parser)
        .help(
            "Job directory where the job's Dockerfile is located. \
             Defaults to the current working directory.",
        );
    SharedOption::exclusive(arg, mutex)
}

/// `-c/--config-file` with no exclusivity rule.
#[must_use]
pub fn config_file() -> SharedOption {
    config_file_with(Vec::<String>::new())
}

/// `-c/--config-file`, exclusive with `mutex`.
///
/// The path is not checked for existence at parse time.
#[must_use]
pub fn config_file_with<I, S>(mutex: I) -> SharedOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let arg = Arg::new(CONFIG_FILE)
        .short('c')
        .long("config-file")
        .value_name("PATH")
        .value_parser(utf8_path_parser)
        .help(
            "Path to config filename. If PATH is not absolute, it will be \
             treated relative to --job-dir. Defaults to klio-job.yaml.",
        );
    SharedOption::exclusive(arg, mutex)
}

/// `-O/--override`, repeatable, collecting raw `key=value` strings.
#[must_use]
pub fn override_opt() -> SharedOption {
    SharedOption::plain(
        Arg::new(OVERRIDE)
            .short('O')
            .long("override")
            .value_name("KEY=VALUE")
            .action(ArgAction::Append)
            .help("Override a config value, in the form key=value."),
    )
}

/// `-T/--template`, repeatable, collecting raw `key=value` strings.
#[must_use]
pub fn template() -> SharedOption {
    SharedOption::plain(
        Arg::new(TEMPLATE)
            .short('T')
            .long("template")
            .value_name("KEY=VALUE")
            .action(ArgAction::Append)
            .help(
                "Set the value of a config template parameter, in the form \
                 key=value. Any instance of ${key} in klio-job.yaml will be \
                 replaced with value.",
            ),
    )
}

/// Value parser accepting only paths that exist when parsed.
///
/// # Errors
///
/// Returns [`OptionError::PathNotFound`] when nothing exists at `value`.
pub fn existing_path_parser(value: &str) -> Result<Utf8PathBuf, OptionError> {
    if Path::new(value).exists() {
        Ok(Utf8PathBuf::from(value))
    } else {
        Err(OptionError::PathNotFound {
            path: value.to_owned(),
        })
    }
}

fn utf8_path_parser(value: &str) -> Result<Utf8PathBuf, Infallible> {
    Ok(Utf8PathBuf::from(value))
}
