//! Throwaway job directories.
//!
//! A [`JobDir`] owns a temporary directory laid out like a job checkout,
//! optionally holding a `klio-job.yaml`. [`JobDir::enter`] runs a closure
//! with it as the working directory so cwd-relative defaults can be observed.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::cwd;

/// Name of the job config file written by [`JobDir::with_config`].
pub const JOB_CONFIG_FILE: &str = "klio-job.yaml";

/// Temporary job directory, removed on drop.
#[derive(Debug)]
pub struct JobDir {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl JobDir {
    /// Creates an empty job directory.
    ///
    /// The stored path is canonical so it compares equal to the working
    /// directory reported from inside [`Self::enter`].
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create job dir")?;
        let canonical = dir.path().canonicalize().context("canonicalise job dir")?;
        let path = Utf8PathBuf::from_path_buf(canonical)
            .map_err(|raw| anyhow!("job dir is not UTF-8: {}", raw.display()))?;
        Ok(Self { _dir: dir, path })
    }

    /// Creates a job directory holding `contents` as its config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created.
    pub fn with_config(contents: &str) -> Result<Self> {
        let job = Self::new()?;
        std::fs::write(job.config_path(), contents).context("write job config")?;
        Ok(job)
    }

    /// Root of the job directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Location of the default config file, whether or not it exists.
    #[must_use]
    pub fn config_path(&self) -> Utf8PathBuf {
        self.path.join(JOB_CONFIG_FILE)
    }

    /// Creates `name` inside the job directory and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn subdir(&self, name: &str) -> Result<Utf8PathBuf> {
        let nested = self.path.join(name);
        std::fs::create_dir_all(&nested).with_context(|| format!("create {nested}"))?;
        Ok(nested)
    }

    /// Runs `f` with the job directory as the working directory.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`cwd::in_dir`] and from `f`.
    pub fn enter<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        cwd::in_dir(&self.path, f)
    }
}
