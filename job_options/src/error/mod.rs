//! Error types produced while validating job options.

mod conversions;
mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{OptionError, OptionErrorKind};

#[cfg(test)]
mod tests;
