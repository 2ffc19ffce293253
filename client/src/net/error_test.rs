use super::*;

#[test]
fn status_error_display_includes_code() {
    assert_eq!(ApiError::Status { status: 422 }.to_string(), "request failed: 422");
}

#[test]
fn user_message_maps_auth_statuses() {
    assert_eq!(
        ApiError::Status { status: 401 }.user_message(),
        "You need to be signed in to do that."
    );
    assert_eq!(
        ApiError::Status { status: 403 }.user_message(),
        "You need to be signed in to do that."
    );
}

#[test]
fn user_message_maps_server_errors() {
    assert_eq!(
        ApiError::Status { status: 503 }.user_message(),
        "The server had a problem. Try again shortly."
    );
}

#[test]
fn user_message_falls_back_to_display() {
    assert_eq!(ApiError::Status { status: 422 }.user_message(), "request failed: 422");
    assert_eq!(ApiError::Unavailable.user_message(), "not available on server");
    assert_eq!(
        ApiError::Decode("expected array".to_owned()).user_message(),
        "invalid response: expected array"
    );
}

#[test]
fn network_error_has_friendly_message() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert!(err.user_message().starts_with("Could not reach the server"));
    assert_eq!(err.to_string(), "network error: TypeError: Failed to fetch");
}
