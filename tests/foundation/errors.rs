//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use signbridge_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_io() {
    let err = Error::io("permission denied");
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(format!("{err}").contains("permission denied"));
}

#[test]
fn error_config() {
    let err = Error::config("endpoint must be host:port");
    assert!(matches!(err.kind, ErrorKind::Config(_)));
    assert!(format!("{err}").starts_with("configuration error"));
}

#[test]
fn error_serialization() {
    let err = Error::serialization("expected value at line 1");
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    assert!(!err.is_transport());
}

#[test]
fn error_transport() {
    let err = Error::transport("connection reset");
    assert!(err.is_transport());
    assert_eq!(format!("{err}"), "transport error: connection reset");
}

#[test]
fn error_invalid_command() {
    let err = Error::invalid_command("unknown command ':dance'");
    assert!(matches!(err.kind, ErrorKind::InvalidCommand(_)));
    assert!(format!("{err}").contains(":dance"));
}

#[test]
fn error_internal() {
    let err = Error::new(ErrorKind::Internal("unreachable".to_string()));
    assert!(format!("{err}").contains("internal error"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_defaults_to_none() {
    let err = Error::io("x");
    assert!(err.context.is_none());
}

#[test]
fn context_source_only() {
    let ctx = ErrorContext::new().with_source("lexicon.json");
    assert_eq!(format!("{ctx}"), "at lexicon.json");
}

#[test]
fn context_attached_to_error() {
    let err = Error::serialization("trailing comma")
        .with_context(ErrorContext::new().with_source("clips.json").with_line(12));

    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.line, Some(12));
    assert_eq!(format!("{ctx}"), "at clips.json:12");
}

#[test]
fn line_without_source_displays_nothing() {
    let ctx = ErrorContext::new().with_line(4);
    assert_eq!(format!("{ctx}"), "");
}
