use actuator::StatusCode;

use super::*;

#[test]
fn classifies_delivery_failures_by_variant() {
    let rejected = UiError::from_delivery(&DeliveryError::Status {
        url: "http://10.0.0.2/urgent/left/north".to_string(),
        status: StatusCode::SERVICE_UNAVAILABLE,
    });
    assert_eq!(rejected.category(), UiErrorCategory::Actuator);
    assert_eq!(rejected.context(), UiErrorContext::Delivery);
    assert!(rejected.message().contains("503"));

    let misconfigured = UiError::from_delivery(&DeliveryError::UnsupportedScheme {
        url: "ftp://10.0.0.2".to_string(),
        scheme: "ftp".to_string(),
    });
    assert_eq!(misconfigured.category(), UiErrorCategory::Validation);
}

#[test]
fn classifies_startup_failures_from_text() {
    let err = UiError::from_message(
        UiErrorContext::BackendStartup,
        "backend worker startup failure: connection refused",
    );
    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(err.context(), UiErrorContext::BackendStartup);
}

#[test]
fn classifies_operator_input_errors() {
    let err = UiError::from_message(UiErrorContext::Input, "unrecognized road 'upward'");
    assert_eq!(err.category(), UiErrorCategory::Validation);
    assert_eq!(err.message(), "unrecognized road 'upward'");
    assert_eq!(err.hint(), "check the input and retry");
}

#[test]
fn trailing_input_is_a_validation_error() {
    let err = UiError::from_message(UiErrorContext::Input, "unexpected extra input 'now'");
    assert_eq!(err.category(), UiErrorCategory::Validation);
}

#[test]
fn unknown_messages_fall_back() {
    let err = UiError::from_message(UiErrorContext::Delivery, "something odd");
    assert_eq!(err.category(), UiErrorCategory::Unknown);
}
