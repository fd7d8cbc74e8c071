//! Typed access to the shared options and resolution of job paths.

use camino::{Utf8Path, Utf8PathBuf};
use clap::ArgMatches;
use clap::parser::MatchesError;
use serde::Serialize;
use tracing::debug;

use crate::error::OptionError;
use crate::options::{CONFIG_FILE, JOB_DIR, OVERRIDE, TEMPLATE};

/// File name used when no config file is supplied.
pub const DEFAULT_CONFIG_FILE: &str = "klio-job.yaml";

/// Values of the shared options as supplied for one invocation.
///
/// Options the command did not declare read as absent. Override and
/// template strings are kept verbatim in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobOptions {
    /// Value of `--job-dir`.
    pub job_dir: Option<Utf8PathBuf>,
    /// Value of `--config-file`.
    pub config_file: Option<Utf8PathBuf>,
    /// Every `--override` value.
    pub overrides: Vec<String>,
    /// Every `--template` value.
    pub templates: Vec<String>,
}

/// Job directory and config file after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPaths {
    /// Directory holding the job.
    pub job_dir: Utf8PathBuf,
    /// Config file, absolute or anchored to the job directory.
    pub config_file: Utf8PathBuf,
}

impl JobOptions {
    /// Reads the shared options from `matches`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::Matches`] when a declared option holds a value
    /// of an unexpected type.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, OptionError> {
        Ok(Self {
            job_dir: one(matches, JOB_DIR)?,
            config_file: one(matches, CONFIG_FILE)?,
            overrides: many(matches, OVERRIDE)?,
            templates: many(matches, TEMPLATE)?,
        })
    }

    /// Resolves paths against the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::CurrentDir`] or [`OptionError::NonUtf8Path`]
    /// when the working directory cannot be used.
    pub fn resolve(&self) -> Result<JobPaths, OptionError> {
        let cwd = std::env::current_dir().map_err(OptionError::CurrentDir)?;
        let cwd_utf8 =
            Utf8PathBuf::from_path_buf(cwd).map_err(|path| OptionError::NonUtf8Path { path })?;
        Ok(self.resolve_with_cwd(&cwd_utf8))
    }

    /// Resolves paths against `cwd`.
    ///
    /// The job directory defaults to `cwd`, and relative job directories are
    /// anchored there. Relative config files are anchored to the job
    /// directory; absent ones default to [`DEFAULT_CONFIG_FILE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use job_options::JobOptions;
    ///
    /// let paths = JobOptions::default().resolve_with_cwd(Utf8Path::new("/work"));
    /// assert_eq!(paths.job_dir, "/work");
    /// assert_eq!(paths.config_file, "/work/klio-job.yaml");
    /// ```
    #[must_use]
    pub fn resolve_with_cwd(&self, cwd: &Utf8Path) -> JobPaths {
        let job_dir = self
            .job_dir
            .as_deref()
            .map_or_else(|| cwd.to_owned(), |dir| anchored(cwd, dir));
        let config_file = anchored(
            &job_dir,
            self.config_file
                .as_deref()
                .unwrap_or_else(|| Utf8Path::new(DEFAULT_CONFIG_FILE)),
        );
        debug!(%job_dir, %config_file, "resolved job paths");
        JobPaths {
            job_dir,
            config_file,
        }
    }
}

fn anchored(base: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path.is_absolute() {
        path.to_owned()
    } else {
        base.join(path)
    }
}

fn one(matches: &ArgMatches, id: &str) -> Result<Option<Utf8PathBuf>, OptionError> {
    match matches.try_get_one::<Utf8PathBuf>(id) {
        Ok(value) => Ok(value.cloned()),
        Err(MatchesError::UnknownArgument { .. }) => Ok(None),
        Err(source) => Err(OptionError::Matches {
            id: id.to_owned(),
            source,
        }),
    }
}

fn many(matches: &ArgMatches, id: &str) -> Result<Vec<String>, OptionError> {
    match matches.try_get_many::<String>(id) {
        Ok(values) => Ok(values.map(|vals| vals.cloned().collect()).unwrap_or_default()),
        Err(MatchesError::UnknownArgument { .. }) => Ok(Vec::new()),
        Err(source) => Err(OptionError::Matches {
            id: id.to_owned(),
            source,
        }),
    }
}
