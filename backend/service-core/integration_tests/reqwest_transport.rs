//! `ReqwestTransport` against a live local HTTP server.

use service_core::{
    LEARNING_OPT_OUT_HEADER, ReqwestTransport, ServiceClient, ServiceError, ServiceRequest,
    ServiceSettings,
};

use std::net::TcpListener;

use serde::Deserialize;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASIC_AUTH: &str = "Basic YXVzZXJuYW1lOmFwYXNzd29yZA==";

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Profile {
    word_count: u32,
}

fn client_for(server: &MockServer, settings: Option<ServiceSettings>) -> ServiceClient<ReqwestTransport> {
    let mut builder = ServiceClient::builder()
        .with_username("ausername")
        .with_password("apassword")
        .with_transport(ReqwestTransport::new().expect("Failed to build transport"))
        .with_service_url(format!("{}/api/", server.uri()));
    if let Some(settings) = settings {
        builder = builder.with_settings(settings);
    }

    builder.build().expect("Failed to build client")
}

/// **VALUE**: Verifies both default headers reach the wire on a real request.
///
/// **WHY THIS MATTERS**: Unit tests inspect the transport's header map; this
/// proves reqwest actually sends what the map holds.
#[tokio::test]
async fn given_default_client_when_executing_then_server_receives_auth_and_opt_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/profile"))
        .and(header("authorization", BASIC_AUTH))
        .and(header(LEARNING_OPT_OUT_HEADER, "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello world"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let body = client
        .execute(ServiceRequest::get("v3/profile"))
        .await
        .expect("request should succeed");

    assert_eq!(body, "hello world");
}

#[tokio::test]
async fn given_opt_in_settings_when_executing_then_server_receives_false() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header(LEARNING_OPT_OUT_HEADER, "false"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(ServiceSettings::new(false)));

    let body = client
        .execute(ServiceRequest::get("v3/profile"))
        .await
        .expect("request should succeed");

    assert_eq!(body, "");
}

#[tokio::test]
async fn given_json_post_when_executing_then_body_is_sent_and_response_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/profile"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"text":"hello"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"word_count":1}"#))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let request = ServiceRequest::post("v3/profile")
        .with_json(&serde_json::json!({"text": "hello"}))
        .expect("serializable body");

    let profile: Profile = client.execute_json(request).await.expect("decoded profile");

    assert_eq!(profile, Profile { word_count: 1 });
}

/// **VALUE**: Verifies an envelope from a real server becomes the error message.
#[tokio::test]
async fn given_400_envelope_from_server_when_executing_then_remote_error_carries_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(
                r#"{"help":"http://example.net/doc","error":"too few words","code":400}"#,
            ),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let err = client
        .execute_json::<Profile>(ServiceRequest::get("v3/profile"))
        .await
        .unwrap_err();

    assert!(err.is_remote_service());
    assert_eq!(err.message(), "too few words");
}

#[tokio::test]
async fn given_unmatched_route_when_executing_then_fails_with_404_not_found() {
    let server = MockServer::start().await;

    let client = client_for(&server, None);

    let err = client
        .execute(ServiceRequest::get("v3/missing"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "404 Not Found");
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn given_html_401_when_executing_then_falls_back_to_status_and_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string("<HTML><BODY><p>User access not Authorized.</p></BODY></HTML>"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let err = client
        .execute(ServiceRequest::get("v3/profile"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "401 Unauthorized");
}

/// **VALUE**: Verifies concurrent calls through one client don't interfere.
///
/// **WHY THIS MATTERS**: The client is shared across tasks; each call must
/// see only its own response.
#[tokio::test]
async fn given_concurrent_calls_when_executing_then_each_gets_its_own_response() {
    let server = MockServer::start().await;
    for name in ["a", "b", "c"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(name))
            .mount(&server)
            .await;
    }

    let client = client_for(&server, None);

    let (a, b, c) = tokio::join!(
        client.execute(ServiceRequest::get("a")),
        client.execute(ServiceRequest::get("b")),
        client.execute(ServiceRequest::get("c")),
    );

    assert_eq!(a.unwrap(), "a");
    assert_eq!(b.unwrap(), "b");
    assert_eq!(c.unwrap(), "c");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

/// **VALUE**: Verifies a refused connection surfaces as a transport error.
///
/// **WHY THIS MATTERS**: No response was read, so there is no status to
/// report; calling it a remote failure would invent one.
///
/// **BUG THIS CATCHES**: Would catch reqwest failures being folded into
/// `RemoteService` or losing their `From` conversion.
#[tokio::test]
async fn given_closed_port_when_executing_then_fails_with_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("Failed to read bound address")
        .port();
    drop(listener);

    let client = ServiceClient::builder()
        .with_username("ausername")
        .with_password("apassword")
        .with_transport(ReqwestTransport::new().expect("Failed to build transport"))
        .with_service_url(format!("http://127.0.0.1:{port}/"))
        .build()
        .expect("Failed to build client");

    let err = client
        .execute(ServiceRequest::get("v3/profile"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ServiceError::Transport { .. }),
        "expected transport error, got {err:?}"
    );
    assert_eq!(err.status_code(), None);
}
