//! A `clap::Command` that enforces exclusivity rules after parsing.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgMatches, Command};
use tracing::debug;

use crate::exclusive::Exclusivity;
use crate::options::SharedOption;

#[derive(Debug, Clone, Default)]
struct RuleTree {
    rules: Vec<Exclusivity>,
    children: BTreeMap<String, RuleTree>,
}

/// Command builder that records the exclusivity rule of every attached
/// [`SharedOption`] and checks them once parsing has finished.
///
/// Rules are scoped to the command that declares them. Each matched
/// subcommand level is checked against its own supplied options.
#[derive(Debug, Clone)]
pub struct ValidatedCommand {
    command: Command,
    tree: RuleTree,
}

impl ValidatedCommand {
    /// Wraps `command` with an empty rule set.
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self {
            command,
            tree: RuleTree::default(),
        }
    }

    /// Attaches a shared option and records its rule.
    #[must_use]
    pub fn option(mut self, option: SharedOption) -> Self {
        let (arg, rule) = option.into_parts();
        self.command = self.command.arg(arg);
        if !rule.is_empty() {
            self.tree.rules.push(rule);
        }
        self
    }

    /// Attaches a plain argument without any rule.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.command = self.command.arg(arg);
        self
    }

    /// Nests `subcommand` together with its rules.
    #[must_use]
    pub fn subcommand(mut self, subcommand: Self) -> Self {
        let name = subcommand.command.get_name().to_owned();
        self.tree.children.insert(name, subcommand.tree);
        self.command = self.command.subcommand(subcommand.command);
        self
    }

    /// Applies `f` to the wrapped command, for settings such as `about`.
    #[must_use]
    pub fn map_command(mut self, f: impl FnOnce(Command) -> Command) -> Self {
        self.command = f(self.command);
        self
    }

    /// The wrapped command.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    /// Mutable access to the wrapped command, for example to render help.
    pub const fn command_mut(&mut self) -> &mut Command {
        &mut self.command
    }

    /// Rules declared directly on this command.
    #[must_use]
    pub fn rules(&self) -> &[Exclusivity] {
        &self.tree.rules
    }

    /// Parses `args` and checks every exclusivity rule.
    ///
    /// # Errors
    ///
    /// Returns the stock `clap` error when parsing fails, or an
    /// [`clap::error::ErrorKind::ArgumentConflict`] error when a rule is
    /// violated.
    pub fn try_get_matches_from<I, T>(mut self, args: I) -> Result<ArgMatches, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.try_get_matches_from_mut(args)
    }

    /// Borrowing variant of [`Self::try_get_matches_from`].
    ///
    /// # Errors
    ///
    /// See [`Self::try_get_matches_from`].
    pub fn try_get_matches_from_mut<I, T>(&mut self, args: I) -> Result<ArgMatches, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(args)?;
        validate_level(&self.tree, &mut self.command, &matches)?;
        Ok(matches)
    }
}

/// Identifiers the user supplied on the command line.
///
/// Values filled from defaults or the environment are not counted.
#[must_use]
pub fn supplied_ids(matches: &ArgMatches) -> BTreeSet<String> {
    matches
        .ids()
        .map(clap::Id::as_str)
        .filter(|id| matches!(matches.value_source(id), Some(ValueSource::CommandLine)))
        .map(str::to_owned)
        .collect()
}

fn validate_level(
    tree: &RuleTree,
    command: &mut Command,
    matches: &ArgMatches,
) -> Result<(), clap::Error> {
    let supplied = supplied_ids(matches);
    debug!(command = command.get_name(), ?supplied, "validating supplied options");
    for rule in &tree.rules {
        rule.check(supplied.iter().map(String::as_str))
            .map_err(|err| err.into_clap_error(command))?;
    }
    if let Some((name, sub_matches)) = matches.subcommand()
        && let Some(child) = tree.children.get(name)
        && let Some(sub_command) = command.find_subcommand_mut(name)
    {
        validate_level(child, sub_command, sub_matches)?;
    }
    Ok(())
}
