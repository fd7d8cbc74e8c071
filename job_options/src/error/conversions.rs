//! Bridging between `OptionError` and `clap` diagnostics.

use clap::{Command, error::ErrorKind};

use super::{OptionError, OptionErrorKind};

impl OptionError {
    /// The `clap` error kind used when this error is rendered by `clap`.
    ///
    /// Usage errors map to [`ErrorKind::ArgumentConflict`] and value
    /// failures to [`ErrorKind::ValueValidation`]. Environment and internal
    /// lookup failures map to [`ErrorKind::Io`].
    #[must_use]
    pub const fn clap_kind(&self) -> ErrorKind {
        match self.kind() {
            OptionErrorKind::Usage => ErrorKind::ArgumentConflict,
            OptionErrorKind::BadParameter => ErrorKind::ValueValidation,
            OptionErrorKind::Io | OptionErrorKind::Internal => ErrorKind::Io,
        }
    }

    /// Converts the error into a [`clap::Error`] carrying `command`'s usage.
    #[must_use]
    pub fn into_clap_error(self, command: &mut Command) -> clap::Error {
        command.error(self.clap_kind(), self)
    }
}

impl From<OptionError> for clap::Error {
    fn from(err: OptionError) -> Self {
        Self::raw(err.clap_kind(), format!("{err}\n"))
    }
}
