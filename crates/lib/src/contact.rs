//! Contacts: records, list params, the repository seam, and the service over it.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::actor::User;
use crate::address::{present, AddressKind, MessageAddress, MessagePerson};
use crate::error::Result;
use crate::page::PageParams;

/// A contact (user or lead). Not every field is writable; writes send only [`ContactWrite`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_profiles: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_hard_bounced: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marked_email_as_spam: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribed_from_emails: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_up_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_replied_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contacted_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_email_opened_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_email_clicked_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ContactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_sdk_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_last_seen_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_sdk_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_last_seen_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<AddressableList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<AddressableList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<AddressableList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactLocation {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Reference to a related object (tag, note, company).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Addressable {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressableList {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Addressable>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

/// A page of contacts. `scroll_param` is set when the list came from the scroll API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactList {
    #[serde(default)]
    pub pages: PageParams,
    #[serde(rename = "data", default)]
    pub contacts: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_param: Option<String>,
}

/// Selects a single contact. `id` takes precedence when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentifiers {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
}

/// Query for GET /contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactListParams {
    pub fn new(pages: &PageParams) -> Self {
        Self {
            page: pages.page,
            per_page: pages.per_page,
            ..Self::default()
        }
    }
}

/// The writable subset of a contact, as sent on create and update.
#[derive(Debug, Serialize)]
pub(crate) struct ContactWrite<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_from_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_up_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<&'a serde_json::Map<String, serde_json::Value>>,
}

impl<'a> From<&'a Contact> for ContactWrite<'a> {
    fn from(c: &'a Contact) -> Self {
        Self {
            id: Some(c.id.as_str()).filter(|s| !s.is_empty()),
            role: c.role.as_deref(),
            external_id: c.external_id.as_deref(),
            email: c.email.as_deref(),
            phone: c.phone.as_deref(),
            name: c.name.as_deref(),
            avatar: c.avatar.as_deref(),
            owner_id: c.owner_id,
            unsubscribed_from_emails: c.unsubscribed_from_emails,
            signed_up_at: c.signed_up_at,
            last_seen_at: c.last_seen_at,
            custom_attributes: c.custom_attributes.as_ref(),
        }
    }
}

impl MessagePerson for Contact {
    fn message_address(&self) -> MessageAddress {
        MessageAddress {
            kind: AddressKind::Contact,
            id: self.id.clone(),
            user_id: None,
            email: present(&self.email),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[intercom] contact {{ id: {} name: {}, email: {} ... }}",
            self.id,
            self.name.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or("")
        )
    }
}

/// Transport for contact operations.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find(&self, identifiers: &UserIdentifiers) -> Result<Contact>;
    async fn list(&self, params: &ContactListParams) -> Result<ContactList>;
    /// Start a scroll with `None`, then pass back each returned `scroll_param`.
    async fn scroll(&self, scroll_param: Option<&str>) -> Result<ContactList>;
    async fn create(&self, contact: &Contact) -> Result<Contact>;
    async fn update(&self, contact: &Contact) -> Result<Contact>;
    async fn convert(&self, contact: &Contact, user: &User) -> Result<User>;
    async fn delete(&self, id: &str) -> Result<Contact>;
}

pub struct ContactService<R> {
    repository: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Look up a contact by Intercom id.
    pub async fn find_by_id(&self, id: &str) -> Result<Contact> {
        self.repository
            .find(&UserIdentifiers {
                id: Some(id.to_string()),
                ..UserIdentifiers::default()
            })
            .await
    }

    /// Look up a contact by user_id.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Contact> {
        self.repository
            .find(&UserIdentifiers {
                user_id: Some(user_id.to_string()),
                ..UserIdentifiers::default()
            })
            .await
    }

    pub async fn list(&self, pages: &PageParams) -> Result<ContactList> {
        self.repository.list(&ContactListParams::new(pages)).await
    }

    pub async fn scroll(&self, scroll_param: Option<&str>) -> Result<ContactList> {
        self.repository.scroll(scroll_param).await
    }

    pub async fn list_by_email(&self, email: &str, pages: &PageParams) -> Result<ContactList> {
        let params = ContactListParams {
            email: Some(email.to_string()),
            ..ContactListParams::new(pages)
        };
        self.repository.list(&params).await
    }

    pub async fn list_by_segment(&self, segment_id: &str, pages: &PageParams) -> Result<ContactList> {
        let params = ContactListParams {
            segment_id: Some(segment_id.to_string()),
            ..ContactListParams::new(pages)
        };
        self.repository.list(&params).await
    }

    pub async fn list_by_tag(&self, tag_id: &str, pages: &PageParams) -> Result<ContactList> {
        let params = ContactListParams {
            tag_id: Some(tag_id.to_string()),
            ..ContactListParams::new(pages)
        };
        self.repository.list(&params).await
    }

    pub async fn create(&self, contact: &Contact) -> Result<Contact> {
        self.repository.create(contact).await
    }

    pub async fn update(&self, contact: &Contact) -> Result<Contact> {
        self.repository.update(contact).await
    }

    /// Convert a contact into the given user.
    pub async fn convert(&self, contact: &Contact, user: &User) -> Result<User> {
        self.repository.convert(contact, user).await
    }

    pub async fn delete(&self, contact: &Contact) -> Result<Contact> {
        self.repository.delete(&contact.id).await
    }
}
