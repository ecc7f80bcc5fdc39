//! Contact operations over HTTP against a mock server.

use intercom::contact::{Contact, ContactRepository, UserIdentifiers};
use intercom::{Error, Intercom, PageParams, User};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Intercom {
    Intercom::with_token(Some(server.uri()), "test_token").unwrap()
}

#[tokio::test]
async fn find_by_id_and_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/5ba682d23d7cf92bef87bfd4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "contact",
            "id": "5ba682d23d7cf92bef87bfd4",
            "email": "winstonsmith@truth.org",
            "name": "Winston Smith",
            "location": { "type": "location", "country": "Oceania", "city": "London" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("user_id", "ext-1"))
        .and(query_param_is_missing("email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "contact", "id": "c2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ic = client(&server);
    let c = ic.contacts.find_by_id("5ba682d23d7cf92bef87bfd4").await.unwrap();
    assert_eq!(c.email.as_deref(), Some("winstonsmith@truth.org"));
    assert_eq!(
        c.location.and_then(|l| l.city).as_deref(),
        Some("London")
    );
    let c = ic.contacts.find_by_user_id("ext-1").await.unwrap();
    assert_eq!(c.id, "c2");
}

#[tokio::test]
async fn list_by_segment_query_and_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("segment_id", "seg-1"))
        .and(query_param("per_page", "25"))
        .and(query_param_is_missing("tag_id"))
        .and(query_param_is_missing("email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "list",
            "pages": { "page": 1, "per_page": 25, "total_pages": 4 },
            "data": [{ "id": "a" }, { "id": "b" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = client(&server)
        .contacts
        .list_by_segment("seg-1", &PageParams::default().with_per_page(25))
        .await
        .unwrap();
    assert_eq!(list.contacts.len(), 2);
    assert_eq!(list.scroll_param, None);
    assert_eq!(list.pages.next(), Some(PageParams::page(2).with_per_page(25)));
}

#[tokio::test]
async fn scroll_passes_cursor_only_when_given() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/scroll"))
        .and(query_param_is_missing("scroll_param"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "a" }], "scroll_param": "cursor-1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts/scroll"))
        .and(query_param("scroll_param", "cursor-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [], "scroll_param": "cursor-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ic = client(&server);
    let first = ic.contacts.scroll(None).await.unwrap();
    assert_eq!(first.scroll_param.as_deref(), Some("cursor-1"));
    let next = ic
        .contacts
        .scroll(first.scroll_param.as_deref())
        .await
        .unwrap();
    assert!(next.contacts.is_empty());
}

#[tokio::test]
async fn create_and_update_send_writable_fields_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .and(body_json(json!({ "role": "lead", "email": "new@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "contact", "id": "n1", "role": "lead", "email": "new@example.com",
            "created_at": 1571672154
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/contacts/n1"))
        .and(body_json(json!({ "id": "n1", "role": "lead", "email": "new@example.com", "name": "Nia" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "contact", "id": "n1", "name": "Nia"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ic = client(&server);
    let draft = Contact {
        role: Some("lead".to_string()),
        email: Some("new@example.com".to_string()),
        has_hard_bounced: Some(false),
        ..Contact::default()
    };
    let mut created = ic.contacts.create(&draft).await.unwrap();
    assert_eq!(created.id, "n1");
    created.name = Some("Nia".to_string());
    let updated = ic.contacts.update(&created).await.unwrap();
    assert_eq!(updated.name.as_deref(), Some("Nia"));
}

#[tokio::test]
async fn convert_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts/convert"))
        .and(body_json(json!({
            "contact": { "id": "lead-1" },
            "user": { "user_id": "ext-9", "email": "conv@example.com" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "user", "id": "u-1", "user_id": "ext-9", "email": "conv@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/lead-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "contact", "id": "lead-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ic = client(&server);
    let lead = Contact {
        id: "lead-1".to_string(),
        ..Contact::default()
    };
    let target = User {
        user_id: Some("ext-9".to_string()),
        email: Some("conv@example.com".to_string()),
        ..User::default()
    };
    let user = ic.contacts.convert(&lead, &target).await.unwrap();
    assert_eq!(user.id, "u-1");

    let gone = Contact {
        id: "lead-2".to_string(),
        ..Contact::default()
    };
    assert_eq!(ic.contacts.delete(&gone).await.unwrap().id, "lead-2");
}

#[tokio::test]
async fn find_without_identifier_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "list", "data": [{ "type": "contact", "id": "c1" }]
        })))
        .expect(0)
        .mount(&server)
        .await;

    let ic = client(&server);
    let err = ic.contacts.find_by_id("").await.unwrap_err();
    assert!(matches!(err, Error::MissingIdentifier));
    let err = ic.contacts.find_by_user_id("").await.unwrap_err();
    assert!(matches!(err, Error::MissingIdentifier));

    let blank = UserIdentifiers {
        id: Some(String::new()),
        user_id: None,
        email: Some(String::new()),
    };
    let err = ic.contacts.repository().find(&blank).await.unwrap_err();
    assert!(matches!(err, Error::MissingIdentifier));
    assert!(server.received_requests().await.unwrap().is_empty());
}
