//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use deepeq_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn error_too_deep() {
    let err = Error::too_deep(16);
    assert_eq!(err.kind, ErrorKind::TooDeep { limit: 16 });
    assert!(format!("{err}").contains("16"));
}

#[test]
fn error_cycle_detected() {
    let err = Error::cycle_detected("a.b");
    assert_eq!(
        err.kind,
        ErrorKind::CycleDetected {
            path: "a.b".to_string()
        }
    );
    assert_eq!(format!("{err}"), "cycle detected at a.b");
}

#[test]
fn error_context_is_optional() {
    let err = Error::too_deep(1);
    assert!(err.context.is_none());

    let err = err.with_context(ErrorContext::new().with_path("x"));
    assert_eq!(err.context.and_then(|c| c.path).as_deref(), Some("x"));
}

#[test]
fn errors_are_guards() {
    assert!(Error::too_deep(1).is_guard());
    assert!(Error::cycle_detected("x").is_guard());
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::too_deep(1));
}
