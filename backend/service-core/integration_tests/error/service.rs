use service_core::ServiceError;

/// **VALUE**: Verifies located errors print kind, message and source position.
///
/// **WHY THIS MATTERS**: When a call fails in production the log line must say
/// which check raised it, not just "invalid argument".
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the
/// constructors or the location falling out of the Display format.
#[test]
fn given_invalid_argument_when_formatted_then_includes_argument_and_location() {
    let err = ServiceError::invalid_argument("username");

    let rendered = err.to_string();

    assert!(rendered.contains("Invalid Argument Error"));
    assert!(rendered.contains("'username'"));
    assert!(rendered.contains("service.rs"));
}

#[test]
fn given_remote_service_error_when_formatted_then_message_is_exact() {
    let err = ServiceError::remote_service(404, "404 Not Found");

    assert_eq!(err.message(), "404 Not Found");
    assert_eq!(err.status_code(), Some(404));
    assert!(err.to_string().starts_with("Remote Service Error: 404 Not Found ["));
}

#[test]
fn given_json_failure_when_converted_then_becomes_decoding_error() {
    let json_err = serde_json::from_str::<bool>("nope").unwrap_err();

    let err = ServiceError::from(json_err);

    assert!(err.is_decoding());
    assert_eq!(err.status_code(), None);
}
