//! Integration tests for error type construction and display.

use popdash::util::error::{data_file_err, PopDashError};
use std::error::Error as _;
use std::path::Path;

#[test]
fn data_file_error_names_path_and_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = data_file_err(Path::new("data/missing.csv"), io);
    let msg = err.to_string();
    assert!(msg.contains("data/missing.csv"), "Should name the path: {msg}");
    assert!(msg.contains("no such file"), "Should include cause: {msg}");
    assert!(err.source().is_some(), "I/O cause should be chained");
}

#[test]
fn unknown_country_error_names_country() {
    let err = PopDashError::UnknownCountry("Atlantis".into());
    let msg = err.to_string();
    assert!(msg.contains("Atlantis"), "Should contain country: {msg}");
    assert!(msg.contains("map registry"), "Should say where: {msg}");
}

#[test]
fn invalid_value_error_has_context() {
    let err = PopDashError::InvalidValue {
        country: "India".into(),
        column: "pop2023".into(),
        value: -1.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("India"), "{msg}");
    assert!(msg.contains("pop2023"), "{msg}");
    assert!(msg.contains("-1"), "{msg}");
}

#[test]
fn duplicate_country_error_preserves_name() {
    let err = PopDashError::DuplicateCountry("China".into());
    assert!(err.to_string().contains("China"));
}

#[test]
fn export_error_preserves_message() {
    let err = PopDashError::Export("disk full".into());
    let msg = err.to_string();
    assert!(msg.contains("disk full"), "Should contain detail: {msg}");
}

#[test]
fn io_error_converts_via_from() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: PopDashError = io.into();
    assert!(
        matches!(err, PopDashError::Io(_)),
        "Should convert to Io variant"
    );
    assert!(err.to_string().contains("access denied"));
}
