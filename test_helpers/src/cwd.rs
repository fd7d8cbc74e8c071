//! Scoped working-directory changes for tests.
//!
//! Every change goes through [`in_dir`], which holds one process-wide lock
//! while the closure runs. The previous directory is put back before the
//! lock is released, including when the closure panics.
//!
//! # Examples
//!
//! ```no_run
//! use job_options_test_helpers::cwd;
//!
//! let seen = cwd::in_dir("/tmp", cwd::current_dir).expect("run in /tmp");
//! assert_eq!(seen.as_str(), "/tmp");
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use parking_lot::Mutex;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Puts `previous` back if the closure unwinds.
struct Restore {
    previous: Option<PathBuf>,
}

impl Restore {
    fn finish(mut self) -> std::io::Result<()> {
        self.previous
            .take()
            .map_or(Ok(()), std::env::set_current_dir)
    }
}

impl Drop for Restore {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            let _ignored = std::env::set_current_dir(previous);
        }
    }
}

/// Runs `f` with `path` as the working directory, then switches back.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read, `path` cannot
/// be entered, the previous directory cannot be restored, or `f` fails.
pub fn in_dir<F, T>(path: impl AsRef<Path>, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let _lock = CWD_LOCK.lock();
    let previous = std::env::current_dir().context("read current dir")?;
    std::env::set_current_dir(path.as_ref())
        .with_context(|| format!("enter {}", path.as_ref().display()))?;
    let back = Restore {
        previous: Some(previous),
    };
    let outcome = f();
    back.finish().context("restore cwd")?;
    outcome
}

/// The working directory as a UTF-8 path.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or is not UTF-8.
pub fn current_dir() -> Result<Utf8PathBuf> {
    let dir = std::env::current_dir().context("read current dir")?;
    Utf8PathBuf::from_path_buf(dir)
        .map_err(|path| anyhow!("cwd is not valid UTF-8: {}", path.display()))
}
