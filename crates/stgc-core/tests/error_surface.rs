use stgc_core::errors::{ErrorInfo, StgcError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("position", "7")
        .with_context("track_len", "6")
}

#[test]
fn layout_error_surface() {
    let err = StgcError::Layout(sample_info("position-out-of-range", "sensor outside track"));
    assert_eq!(err.info().code, "position-out-of-range");
    assert!(err.info().context.contains_key("position"));
}

#[test]
fn track_error_surface() {
    let err = StgcError::Track(sample_info("invalid-track-bit", "bit out of range"));
    assert_eq!(err.info().code, "invalid-track-bit");
    assert!(err.info().context.contains_key("track_len"));
}

#[test]
fn record_error_surface() {
    let err = StgcError::Record(sample_info("non-binary-track", "bad character"));
    assert_eq!(err.info().code, "non-binary-track");
}

#[test]
fn report_error_surface() {
    let err = StgcError::Report(sample_info("write-record", "permission denied"));
    assert_eq!(err.info().code, "write-record");
}

#[test]
fn display_includes_context_and_hint() {
    let info = ErrorInfo::new("empty-layout", "a layout requires at least one sensor")
        .with_context("sensor_count", "0")
        .with_hint("pass at least position 0");
    let rendered = StgcError::Layout(info).to_string();
    assert!(rendered.contains("empty-layout"));
    assert!(rendered.contains("sensor_count=0"));
    assert!(rendered.contains("pass at least position 0"));
}

#[test]
fn error_serde_roundtrip() {
    let err = StgcError::Layout(sample_info("duplicate-position", "positions must be distinct"));
    let json = serde_json::to_string(&err).unwrap();
    let restored: StgcError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
}
