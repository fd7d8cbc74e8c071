//! Primary error enum for option validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::flag::{format_flag_list, long_flag};

/// Errors raised while validating or resolving job options.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptionError {
    /// An option was supplied together with one of its exclusive companions.
    ///
    /// `companions` holds every companion declared on the rule, not only the
    /// ones that were supplied, so the message reads the same whichever
    /// companion triggered it.
    #[error(
        "Illegal usage: `{}` is mutually exclusive with {}.",
        long_flag(.option),
        format_flag_list(.companions)
    )]
    MutuallyExclusive {
        /// Identifier of the option declaring the constraint.
        option: String,
        /// Every companion identifier declared on the option, sorted.
        companions: Vec<String>,
    },

    /// A location value did not use the `gs://` scheme.
    #[error(
        "Unsupported location type. Please provide a GCS location with the `gs://` prefix."
    )]
    UnsupportedLocation {
        /// The rejected value.
        value: String,
    },

    /// A path that must exist at parse time was missing.
    #[error("Path '{path}' does not exist.")]
    PathNotFound {
        /// The missing path as supplied by the user.
        path: String,
    },

    /// The working directory could not be read while resolving defaults.
    #[error("failed to read the current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// A shared option could not be read back from the parsed matches.
    #[error("failed to read option '{id}': {source}")]
    Matches {
        /// Identifier that was looked up.
        id: String,
        /// Underlying lookup failure.
        #[source]
        source: clap::parser::MatchesError,
    },

    /// A resolved path could not be represented as UTF-8.
    #[error("path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },
}

/// Broad classification of [`OptionError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionErrorKind {
    /// An invalid combination of supplied options.
    Usage,
    /// A single option value failed validation.
    BadParameter,
    /// The environment could not be inspected.
    Io,
    /// Parsed matches did not have the expected shape.
    Internal,
}

impl OptionError {
    /// Returns the broad category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use job_options::{OptionError, OptionErrorKind};
    ///
    /// let err = OptionError::UnsupportedLocation { value: "s3://b".into() };
    /// assert_eq!(err.kind(), OptionErrorKind::BadParameter);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> OptionErrorKind {
        match self {
            Self::MutuallyExclusive { .. } => OptionErrorKind::Usage,
            Self::UnsupportedLocation { .. } | Self::PathNotFound { .. } => {
                OptionErrorKind::BadParameter
            }
            Self::CurrentDir(_) | Self::NonUtf8Path { .. } => OptionErrorKind::Io,
            Self::Matches { .. } => OptionErrorKind::Internal,
        }
    }
}
