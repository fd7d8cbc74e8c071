//! Mutual-exclusivity rules between command-line options.
//!
//! A rule is declared on one option and lists the companion identifiers that
//! must not be supplied alongside it. Rules are one-directional: declaring
//! `a` exclusive with `b` says nothing about `b`, so both sides must be
//! declared when the constraint should hold either way round. Companions are
//! matched by identifier at check time only and need not name a declared
//! option.

use std::collections::BTreeSet;

use clap::Arg;
use tracing::{debug, warn};

use crate::error::OptionError;
use crate::flag::format_flag_list;

/// Exclusivity rule attached to a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusivity {
    id: String,
    companions: BTreeSet<String>,
}

impl Exclusivity {
    /// Declares `id` as exclusive with every identifier in `companions`.
    ///
    /// # Examples
    ///
    /// ```
    /// use job_options::Exclusivity;
    ///
    /// let rule = Exclusivity::new("job_dir", ["config_file"]);
    /// assert!(rule.check(["job_dir", "config_file"]).is_err());
    /// assert!(rule.check(["job_dir"]).is_ok());
    /// ```
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, companions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            companions: companions.into_iter().map(Into::into).collect(),
        }
    }

    /// A rule with no companions, which never fails.
    #[must_use]
    pub fn none(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            companions: BTreeSet::new(),
        }
    }

    /// Identifier of the option declaring the rule.
    #[must_use]
    pub const fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Companion identifiers in sorted order.
    #[must_use]
    pub const fn companions(&self) -> &BTreeSet<String> {
        &self.companions
    }

    /// Returns `true` when the rule lists no companions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companions.is_empty()
    }

    /// Help text suffix documenting the rule, or `None` for an empty rule.
    #[must_use]
    pub fn help_note(&self) -> Option<String> {
        (!self.is_empty()).then(|| {
            format!(
                "NOTE: This option is mutually exclusive with [{}].",
                format_flag_list(&self.companions)
            )
        })
    }

    /// Appends [`Self::help_note`] to the help text of `arg`.
    ///
    /// Args are returned unchanged when the rule is empty.
    #[must_use]
    pub fn annotate(&self, arg: Arg) -> Arg {
        let Some(note) = self.help_note() else {
            return arg;
        };
        let help = arg
            .get_help()
            .map(ToString::to_string)
            .filter(|text| !text.is_empty())
            .map_or_else(|| note.clone(), |text| format!("{text}\n\n{note}"));
        arg.help(help)
    }

    /// Validates the rule against the identifiers supplied by the user.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::MutuallyExclusive`] when this option and at
    /// least one companion were both supplied.
    pub fn check<'a, I>(&self, supplied: I) -> Result<(), OptionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return Ok(());
        }
        let supplied_ids: BTreeSet<&str> = supplied.into_iter().collect();
        debug!(option = %self.id, supplied = ?supplied_ids, "checking exclusivity rule");
        if !supplied_ids.contains(self.id.as_str()) {
            return Ok(());
        }
        let conflicting: Vec<&str> = self
            .companions
            .iter()
            .map(String::as_str)
            .filter(|companion| supplied_ids.contains(companion))
            .collect();
        if conflicting.is_empty() {
            return Ok(());
        }
        warn!(option = %self.id, ?conflicting, "mutually exclusive options supplied");
        Err(OptionError::MutuallyExclusive {
            option: self.id.clone(),
            companions: self.companions.iter().cloned().collect(),
        })
    }
}

/// Checks a single exclusivity constraint without building an
/// [`Exclusivity`] first.
///
/// # Errors
///
/// Returns [`OptionError::MutuallyExclusive`] when `id` and any of
/// `companions` appear in `supplied`.
pub fn check_exclusive<'a, C, S, I>(id: &str, companions: C, supplied: I) -> Result<(), OptionError>
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
    I: IntoIterator<Item = &'a str>,
{
    Exclusivity::new(id, companions).check(supplied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use rstest::{fixture, rstest};

    #[fixture]
    fn job_dir_rule() -> Exclusivity {
        Exclusivity::new("job_dir", ["config_file", "image"])
    }

    #[rstest]
    fn rejects_option_with_companion(job_dir_rule: Exclusivity) -> Result<()> {
        let Err(err) = job_dir_rule.check(["job_dir", "image"]) else {
            return Err(anyhow!("expected exclusivity violation"));
        };
        let OptionError::MutuallyExclusive { option, companions } = &err else {
            return Err(anyhow!("unexpected error: {err:?}"));
        };
        ensure!(option == "job_dir", "unexpected option {option}");
        ensure!(
            companions == &vec![String::from("config_file"), String::from("image")],
            "unexpected companions {companions:?}"
        );
        ensure!(
            err.to_string()
                == "Illegal usage: `--job-dir` is mutually exclusive with `--config-file`, `--image`.",
            "unexpected message: {err}"
        );
        Ok(())
    }

    #[rstest]
    #[case::alone(&["job_dir"])]
    #[case::only_companion(&["config_file"])]
    #[case::unrelated(&["job_dir", "override"])]
    #[case::nothing(&[])]
    fn accepts_non_conflicting_sets(job_dir_rule: Exclusivity, #[case] supplied: &[&str]) {
        assert!(job_dir_rule.check(supplied.iter().copied()).is_ok());
    }

    #[rstest]
    fn empty_rule_never_fails() {
        let rule = Exclusivity::none("job_dir");
        assert!(rule.check(["job_dir", "config_file", "image"]).is_ok());
        assert!(rule.help_note().is_none());
    }

    #[rstest]
    fn rule_is_one_directional(job_dir_rule: Exclusivity) {
        let reverse = Exclusivity::none("config_file");
        assert!(reverse.check(["config_file", "job_dir"]).is_ok());
        assert!(job_dir_rule.check(["config_file", "job_dir"]).is_err());
    }

    #[rstest]
    fn unknown_companions_are_matched_by_name() {
        let rule = Exclusivity::new("job_dir", ["not_declared_anywhere"]);
        assert!(rule.check(["job_dir", "not_declared_anywhere"]).is_err());
    }

    #[rstest]
    fn help_note_lists_sorted_flags(job_dir_rule: Exclusivity) {
        assert_eq!(
            job_dir_rule.help_note().as_deref(),
            Some("NOTE: This option is mutually exclusive with [`--config-file`, `--image`].")
        );
    }

    #[rstest]
    fn annotate_appends_note_after_existing_help(job_dir_rule: Exclusivity) -> Result<()> {
        let arg = job_dir_rule.annotate(Arg::new("job_dir").help("Job directory."));
        let help = arg
            .get_help()
            .map(ToString::to_string)
            .ok_or_else(|| anyhow!("help text missing"))?;
        ensure!(
            help.starts_with("Job directory.\n\nNOTE: "),
            "unexpected help {help}"
        );
        Ok(())
    }

    #[rstest]
    fn annotate_leaves_empty_rules_alone() {
        let arg = Exclusivity::none("job_dir").annotate(Arg::new("job_dir").help("Job directory."));
        assert_eq!(
            arg.get_help().map(ToString::to_string).as_deref(),
            Some("Job directory.")
        );
    }

    #[rstest]
    fn free_function_matches_rule() {
        assert!(check_exclusive("a", ["b"], ["a", "b"]).is_err());
        assert!(check_exclusive("a", Vec::<String>::new(), ["a", "b"]).is_ok());
    }
}
