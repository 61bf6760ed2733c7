use crate::client::ServiceClient;
use crate::error::ServiceError;
use crate::settings::ServiceSettings;
use crate::tests::mock_transport::MockTransport;

fn complete_builder() -> crate::client::ServiceClientBuilder<MockTransport> {
    ServiceClient::builder()
        .with_username("username")
        .with_password("password")
        .with_transport(MockTransport::new())
        .with_settings(ServiceSettings::default())
}

/// **VALUE**: Verifies each missing field independently fails with InvalidArgument.
///
/// **WHY THIS MATTERS**: A client without credentials or a transport can't
/// send anything; it must fail before any I/O and say which part is missing.
#[test]
fn given_missing_fields_when_building_then_each_names_its_argument() {
    let missing_username = ServiceClient::<MockTransport>::builder()
        .with_password("password")
        .with_transport(MockTransport::new())
        .build()
        .unwrap_err();
    let missing_password = ServiceClient::<MockTransport>::builder()
        .with_username("username")
        .with_transport(MockTransport::new())
        .build()
        .unwrap_err();
    let missing_transport = ServiceClient::<MockTransport>::builder()
        .with_username("username")
        .with_password("password")
        .build()
        .unwrap_err();

    assert_eq!(missing_username.message(), "username");
    assert_eq!(missing_password.message(), "password");
    assert_eq!(missing_transport.message(), "transport");
    assert!(missing_transport.is_invalid_argument());
}

#[test]
fn given_nothing_when_building_then_returns_invalid_argument() {
    let err = ServiceClient::<MockTransport>::builder().build().unwrap_err();

    assert!(err.is_invalid_argument());
}

#[test]
fn given_all_fields_when_building_then_succeeds() {
    let client = complete_builder().build().unwrap();

    assert_eq!(client.api_key().as_str(), "username:password");
    assert!(client.settings().learning_opt_out);
}

#[test]
fn given_blank_username_when_building_then_returns_invalid_argument() {
    let err = complete_builder().with_username("  ").build().unwrap_err();

    assert_eq!(err.message(), "username");
}

#[test]
fn given_service_url_when_building_then_client_exposes_it() {
    let client = complete_builder()
        .with_service_url("https://gateway.example.net/tone/api/")
        .build()
        .unwrap();

    assert_eq!(
        client.service_url().unwrap().as_str(),
        "https://gateway.example.net/tone/api/"
    );
}

#[test]
fn given_malformed_service_url_when_building_then_returns_url_parse_error() {
    let err = complete_builder()
        .with_service_url("not a url")
        .build()
        .unwrap_err();

    assert!(matches!(err, ServiceError::UrlParse { .. }));
}

/// **VALUE**: Verifies the builder never prints the password it is holding.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug on the builder exposing
/// the raw password before the client wraps it in a redacted key.
#[test]
fn given_builder_with_password_when_debug_formatted_then_password_is_redacted() {
    let builder = ServiceClient::<MockTransport>::builder()
        .with_username("ausername")
        .with_password("hunter2");

    let debug = format!("{builder:?}");

    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("[REDACTED]"));
    assert!(debug.contains("ausername"));
}
