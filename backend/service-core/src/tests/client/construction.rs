// Construction-time side effects: validation and default headers

use crate::client::ServiceClient;
use crate::settings::{LEARNING_OPT_OUT_HEADER, ServiceSettings};
use crate::tests::mock_transport::MockTransport;
use crate::transport::Transport;

use reqwest::header::AUTHORIZATION;

/// **VALUE**: Verifies the Authorization default is set without sending anything.
///
/// **WHY THIS MATTERS**: Every request inherits this header from the
/// transport; if construction skips it, every call fails with 401.
///
/// **BUG THIS CATCHES**: Would catch deriving the header per request or
/// encoding the api key wrongly.
#[test]
fn given_valid_credentials_when_constructed_then_transport_carries_basic_auth() {
    let client =
        ServiceClient::new("ausername", "apassword", MockTransport::new(), None).unwrap();

    let headers = client.transport().default_headers();

    assert_eq!(
        headers.get(AUTHORIZATION).unwrap(),
        "Basic YXVzZXJuYW1lOmFwYXNzd29yZA=="
    );
    assert_eq!(client.transport().calls(), 0);
}

#[test]
fn given_no_settings_when_constructed_then_opt_out_defaults_to_true() {
    let client =
        ServiceClient::new("ausername", "apassword", MockTransport::new(), None).unwrap();

    assert!(client.settings().learning_opt_out);
    assert_eq!(
        client
            .transport()
            .default_headers()
            .get(LEARNING_OPT_OUT_HEADER)
            .unwrap(),
        "true"
    );
}

#[test]
fn given_opt_in_settings_when_constructed_then_header_is_lowercase_false() {
    let settings = ServiceSettings::new(false);
    let client =
        ServiceClient::new("username", "password", MockTransport::new(), Some(settings)).unwrap();

    assert!(!client.settings().learning_opt_out);
    assert_eq!(
        client
            .transport()
            .default_headers()
            .get(LEARNING_OPT_OUT_HEADER)
            .unwrap(),
        "false"
    );
}

#[test]
fn given_valid_credentials_when_constructed_then_api_key_is_exposed() {
    let client =
        ServiceClient::new("ausername", "apassword", MockTransport::new(), None).unwrap();

    assert_eq!(client.api_key().as_str(), "ausername:apassword");
    assert!(client.service_url().is_none());
}

#[test]
fn given_blank_username_when_constructed_then_returns_invalid_argument() {
    let err = ServiceClient::new(" ", "password", MockTransport::new(), None).unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(err.message(), "username");
}

#[test]
fn given_blank_password_when_constructed_then_returns_invalid_argument() {
    let err = ServiceClient::new("username", "", MockTransport::new(), None).unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(err.message(), "password");
}

/// **VALUE**: Verifies the Authorization value is hidden from Debug output.
///
/// **BUG THIS CATCHES**: Would catch a `{:?}` of the client printing a
/// token that decodes straight back to the password.
#[test]
fn given_client_when_debug_formatted_then_token_is_not_printed() {
    let client =
        ServiceClient::new("ausername", "apassword", MockTransport::new(), None).unwrap();

    let debug = format!("{client:?}");

    assert!(!debug.contains("YXVzZXJuYW1lOmFwYXNzd29yZA=="));
    assert!(!debug.contains("apassword"));
}
