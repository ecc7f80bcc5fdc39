use async_trait::async_trait;
use serde::Serialize;

use super::HttpClient;
use crate::actor::User;
use crate::contact::{
    Contact, ContactList, ContactListParams, ContactRepository, ContactWrite, UserIdentifiers,
};
use crate::error::{Error, Result};

#[derive(Serialize)]
struct LookupQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

#[derive(Serialize)]
struct ScrollQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    scroll_param: Option<&'a str>,
}

#[derive(Serialize)]
struct ConvertSide<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

#[derive(Serialize)]
struct ConvertRequest<'a> {
    contact: ConvertSide<'a>,
    user: ConvertSide<'a>,
}

fn non_empty(s: &str) -> Option<&str> {
    Some(s).filter(|s| !s.is_empty())
}

#[async_trait]
impl ContactRepository for HttpClient {
    /// GET /contacts/{id}, or GET /contacts?user_id=..&email=.. when no id is given.
    /// Nothing is sent when all three identifiers are empty.
    async fn find(&self, identifiers: &UserIdentifiers) -> Result<Contact> {
        if let Some(id) = identifiers.id.as_deref().and_then(non_empty) {
            return self.get_json(&["contacts", id]).await;
        }
        let query = LookupQuery {
            user_id: identifiers.user_id.as_deref().and_then(non_empty),
            email: identifiers.email.as_deref().and_then(non_empty),
        };
        if query.user_id.is_none() && query.email.is_none() {
            return Err(Error::MissingIdentifier);
        }
        self.get_json_query(&["contacts"], &query).await
    }

    async fn list(&self, params: &ContactListParams) -> Result<ContactList> {
        self.get_json_query(&["contacts"], params).await
    }

    async fn scroll(&self, scroll_param: Option<&str>) -> Result<ContactList> {
        let query = ScrollQuery {
            scroll_param: scroll_param.and_then(non_empty),
        };
        self.get_json_query(&["contacts", "scroll"], &query).await
    }

    async fn create(&self, contact: &Contact) -> Result<Contact> {
        self.post_json(&["contacts"], &ContactWrite::from(contact)).await
    }

    async fn update(&self, contact: &Contact) -> Result<Contact> {
        self.put_json(&["contacts", contact.id.as_str()], &ContactWrite::from(contact))
            .await
    }

    async fn convert(&self, contact: &Contact, user: &User) -> Result<User> {
        let body = ConvertRequest {
            contact: ConvertSide {
                id: non_empty(&contact.id),
                user_id: None,
                email: None,
            },
            user: ConvertSide {
                id: non_empty(&user.id),
                user_id: user.user_id.as_deref().and_then(non_empty),
                email: user.email.as_deref().and_then(non_empty),
            },
        };
        self.post_json(&["contacts", "convert"], &body).await
    }

    async fn delete(&self, id: &str) -> Result<Contact> {
        self.delete_json(&["contacts", id]).await
    }
}
