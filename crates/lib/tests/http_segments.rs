//! Segment operations over HTTP against a mock server.

use intercom::{Error, Intercom};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_and_find() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/segments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "segment.list",
            "segments": [
                { "type": "segment", "id": "53203e244cba153d39000062", "name": "New",
                  "created_at": 1394621988, "updated_at": 1394622004, "person_type": "user" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/segments/53203e244cba153d39000062"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "segment", "id": "53203e244cba153d39000062", "name": "New"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ic = Intercom::with_token(Some(server.uri()), "t").unwrap();
    let list = ic.segments.list().await.unwrap();
    assert_eq!(list.typ.as_deref(), Some("segment.list"));
    assert_eq!(list.segments[0].person_type.as_deref(), Some("user"));
    let seg = ic.segments.find("53203e244cba153d39000062").await.unwrap();
    assert_eq!(seg.name.as_deref(), Some("New"));
}

#[tokio::test]
async fn non_json_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/segments"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let ic = Intercom::with_token(Some(server.uri()), "t").unwrap();
    let err = ic.segments.list().await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 503, .. }));
    assert_eq!(err.to_string(), "intercom api error: 503 upstream unavailable");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/segments/x"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let ic = Intercom::with_token(Some(server.uri()), "t").unwrap();
    let err = ic.segments.find("x").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}
