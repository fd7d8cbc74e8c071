//! Rendering of option identifiers as long command-line flags.

/// Renders an option identifier as its long flag.
///
/// Underscores become hyphens and the result is prefixed with `--`.
///
/// # Examples
///
/// ```
/// assert_eq!(job_options::long_flag("an_option"), "--an-option");
/// ```
#[must_use]
pub fn long_flag(id: &str) -> String {
    format!("--{}", id.replace('_', "-"))
}

/// Renders identifiers as a comma-separated list of back-quoted long flags.
///
/// Callers control ordering; every exclusivity message passes a sorted set
/// so output is stable between runs.
///
/// # Examples
///
/// ```
/// let rendered = job_options::format_flag_list(["job_dir", "config_file"]);
/// assert_eq!(rendered, "`--job-dir`, `--config-file`");
/// ```
#[must_use]
pub fn format_flag_list<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| format!("`{}`", long_flag(id.as_ref())))
        .collect::<Vec<_>>()
        .join(", ")
}
