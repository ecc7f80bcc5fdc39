//! Admin and User records as far as conversations need them.

use serde::{Deserialize, Serialize};

use crate::address::{present, AddressKind, MessageAddress, MessagePerson};

/// A teammate in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// The API has sent this as both a string and a number over time.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "crate::de::string_or_number"
    )]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Admin {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl MessagePerson for Admin {
    fn message_address(&self) -> MessageAddress {
        MessageAddress::admin(self.id.clone())
    }
}

/// An end user, identified by Intercom id, external user_id, or email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl MessagePerson for User {
    fn message_address(&self) -> MessageAddress {
        MessageAddress {
            kind: AddressKind::User,
            id: self.id.clone(),
            user_id: present(&self.user_id),
            email: present(&self.email),
        }
    }
}
