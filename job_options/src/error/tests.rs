//! Unit tests for error classification and rendering.

use clap::{Command, error::ErrorKind};
use rstest::rstest;

use super::{OptionError, OptionErrorKind, is_display_request};

fn build_error(kind: ErrorKind) -> clap::Error {
    Command::new("demo").error(kind, "demo output")
}

fn exclusive_error() -> OptionError {
    OptionError::MutuallyExclusive {
        option: "job_dir".into(),
        companions: vec!["config_file".into(), "other_opt".into()],
    }
}

#[rstest]
#[case(ErrorKind::DisplayHelp)]
#[case(ErrorKind::DisplayVersion)]
fn recognises_display_requests(#[case] kind: ErrorKind) {
    let err = build_error(kind);
    assert!(is_display_request(&err));
}

#[rstest]
#[case(ErrorKind::ArgumentConflict)]
#[case(ErrorKind::ValueValidation)]
fn rejects_regular_errors(#[case] kind: ErrorKind) {
    let err = build_error(kind);
    assert!(!is_display_request(&err));
}

#[rstest]
fn exclusivity_message_names_every_flag() {
    assert_eq!(
        exclusive_error().to_string(),
        "Illegal usage: `--job-dir` is mutually exclusive with `--config-file`, `--other-opt`."
    );
}

#[rstest]
fn location_message_mentions_prefix() {
    let err = OptionError::UnsupportedLocation {
        value: "/local/path".into(),
    };
    assert!(err.to_string().contains("`gs://` prefix"));
}

#[rstest]
#[case(exclusive_error(), OptionErrorKind::Usage, ErrorKind::ArgumentConflict)]
#[case(
    OptionError::UnsupportedLocation { value: "s3://bucket".into() },
    OptionErrorKind::BadParameter,
    ErrorKind::ValueValidation
)]
#[case(
    OptionError::PathNotFound { path: "missing".into() },
    OptionErrorKind::BadParameter,
    ErrorKind::ValueValidation
)]
#[case(
    OptionError::CurrentDir(std::io::Error::other("gone")),
    OptionErrorKind::Io,
    ErrorKind::Io
)]
#[case(
    OptionError::NonUtf8Path { path: std::path::PathBuf::from("cwd") },
    OptionErrorKind::Io,
    ErrorKind::Io
)]
fn classifies_errors(
    #[case] err: OptionError,
    #[case] kind: OptionErrorKind,
    #[case] clap_kind: ErrorKind,
) {
    assert_eq!(err.kind(), kind);
    assert_eq!(err.clap_kind(), clap_kind);
}

#[rstest]
fn clap_conversion_keeps_message_and_usage() {
    let mut command = Command::new("demo").arg(clap::Arg::new("job_dir").long("job-dir"));
    let err = exclusive_error().into_clap_error(&mut command);
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    let rendered = err.to_string();
    assert!(rendered.contains("`--job-dir` is mutually exclusive"), "{rendered}");
    assert!(rendered.contains("Usage:"), "{rendered}");
}

#[rstest]
fn raw_conversion_preserves_kind() {
    let err: clap::Error = OptionError::PathNotFound {
        path: "nope".into(),
    }
    .into();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert!(err.to_string().contains("Path 'nope' does not exist."));
}

#[rstest]
fn working_directory_failures_are_not_bad_parameters() {
    let mut command = Command::new("demo");
    let err = OptionError::CurrentDir(std::io::Error::other("gone")).into_clap_error(&mut command);
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("current working directory"), "{err}");
}
