// Decoding of success bodies into caller-chosen types

use crate::client::{DecodeBody, Json, PlainText, ServiceClient};
use crate::tests::fixtures::REQUEST_URL;
use crate::tests::mock_transport::MockTransport;
use crate::transport::ServiceRequest;

use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq)]
struct ToneScore {
    tone_id: String,
    score: f64,
}

fn client_returning(body: &str) -> ServiceClient<MockTransport> {
    let transport = MockTransport::new().with_response(REQUEST_URL, StatusCode::OK, body);
    ServiceClient::new("ausername", "apassword", transport, None).unwrap()
}

#[tokio::test]
async fn given_true_body_when_decoding_bool_then_returns_true() {
    let client = client_returning("true");

    let value: bool = client
        .execute_json(ServiceRequest::get(REQUEST_URL))
        .await
        .unwrap();

    assert!(value);
}

/// **VALUE**: Verifies an empty success body decodes to the type's default.
///
/// **WHY THIS MATTERS**: Several endpoints answer 200 with no body; that is a
/// valid "nothing" answer, not a decoding failure.
#[tokio::test]
async fn given_empty_body_when_decoding_then_returns_default_value() {
    let client = client_returning("");

    let flag: bool = client
        .execute_json(ServiceRequest::get(REQUEST_URL))
        .await
        .unwrap();
    let score: ToneScore = client
        .execute_json(ServiceRequest::get(REQUEST_URL))
        .await
        .unwrap();
    let list: Vec<u32> = client
        .execute_json(ServiceRequest::get(REQUEST_URL))
        .await
        .unwrap();

    assert!(!flag);
    assert_eq!(score, ToneScore::default());
    assert!(list.is_empty());
}

#[tokio::test]
async fn given_whitespace_body_when_decoding_then_returns_default_value() {
    let client = client_returning("   \n  ");

    let value: bool = client
        .execute_json(ServiceRequest::get(REQUEST_URL))
        .await
        .unwrap();

    assert!(!value);
}

#[tokio::test]
async fn given_object_body_when_decoding_struct_then_fields_are_populated() {
    let client = client_returning(r#"{"tone_id":"joy","score":0.91}"#);

    let score: ToneScore = client
        .execute_json(ServiceRequest::get(REQUEST_URL))
        .await
        .unwrap();

    assert_eq!(
        score,
        ToneScore {
            tone_id: String::from("joy"),
            score: 0.91,
        }
    );
}

/// **VALUE**: Verifies plain text is returned untouched, never JSON-parsed.
///
/// **BUG THIS CATCHES**: Would catch routing string targets through
/// `serde_json`, which rejects unquoted text like `hello world`.
#[tokio::test]
async fn given_plain_text_target_when_decoding_then_body_bypasses_json() {
    let client = client_returning("hello world");

    let raw = client.execute(ServiceRequest::get(REQUEST_URL)).await.unwrap();
    let text = client
        .execute_as::<PlainText>(ServiceRequest::get(REQUEST_URL))
        .await
        .unwrap();

    assert_eq!(raw, "hello world");
    assert_eq!(text, raw);
}

/// **VALUE**: Verifies a bad body on a 2xx is a decoding error, not a remote error.
///
/// **WHY THIS MATTERS**: The service call succeeded; blaming the service would
/// send callers chasing the wrong problem.
#[tokio::test]
async fn given_unparseable_body_when_decoding_then_fails_with_decoding_error() {
    let client = client_returning("hello world");

    let err = client
        .execute_json::<bool>(ServiceRequest::get(REQUEST_URL))
        .await
        .unwrap_err();

    assert!(err.is_decoding());
    assert!(!err.is_remote_service());
    assert_eq!(err.status_code(), None);
}

#[test]
fn given_decoders_when_called_directly_then_follow_same_rules() {
    assert_eq!(PlainText::decode(String::from("42")).unwrap(), "42");
    assert_eq!(Json::<u32>::decode(String::from("42")).unwrap(), 42);
    assert_eq!(Json::<u32>::decode(String::new()).unwrap(), 0);
    assert_eq!(
        Json::<String>::decode(String::from("\"quoted\"")).unwrap(),
        "quoted"
    );
}
