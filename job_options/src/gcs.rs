//! Validation for Google Cloud Storage locations.
//!
//! Only the scheme is checked. Bucket naming rules and object existence are
//! left to whatever consumes the value.

use clap::Arg;

use crate::error::OptionError;

/// Scheme prefix every accepted location must carry.
pub const GCS_PREFIX: &str = "gs://";

/// Accepts empty values and values beginning with `gs://`.
///
/// # Errors
///
/// Returns [`OptionError::UnsupportedLocation`] for any other value.
///
/// # Examples
///
/// ```
/// use job_options::gcs::verify_gcs_uri;
///
/// assert_eq!(verify_gcs_uri("gs://bucket/path").ok(), Some("gs://bucket/path"));
/// assert_eq!(verify_gcs_uri("").ok(), Some(""));
/// assert!(verify_gcs_uri("s3://bucket").is_err());
/// ```
pub fn verify_gcs_uri(value: &str) -> Result<&str, OptionError> {
    if value.is_empty() || value.starts_with(GCS_PREFIX) {
        return Ok(value);
    }
    Err(OptionError::UnsupportedLocation {
        value: value.to_owned(),
    })
}

/// Optional variant of [`verify_gcs_uri`]; absent values pass through.
///
/// # Errors
///
/// Returns [`OptionError::UnsupportedLocation`] when a supplied value lacks
/// the `gs://` prefix.
pub fn verify_optional_gcs_uri(value: Option<&str>) -> Result<Option<&str>, OptionError> {
    value.map(verify_gcs_uri).transpose()
}

/// `clap` value parser built on [`verify_gcs_uri`].
///
/// Rejections surface as [`clap::error::ErrorKind::ValueValidation`] naming
/// the offending argument.
///
/// # Errors
///
/// Returns [`OptionError::UnsupportedLocation`] for values without the
/// `gs://` prefix.
pub fn gcs_uri_parser(value: &str) -> Result<String, OptionError> {
    verify_gcs_uri(value).map(str::to_owned)
}

/// Builds an optional `--<long>` argument that only accepts GCS locations.
#[must_use]
pub fn gcs_uri_arg(id: &'static str, long: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name("URI")
        .value_parser(gcs_uri_parser)
}
