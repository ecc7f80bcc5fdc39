//! Message addresses: the canonical identity an actor presents when it authors a reply
//! or owns a conversation.

use serde::{Deserialize, Serialize};

/// Which side of a conversation an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Admin,
    User,
    Contact,
    /// Author kinds the API may report that this client does not act as (lead, bot, team).
    #[serde(other)]
    Other,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::Admin => "admin",
            AddressKind::User => "user",
            AddressKind::Contact => "contact",
            AddressKind::Other => "other",
        }
    }
}

/// Identity descriptor derived from a Contact, Admin, or User. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAddress {
    #[serde(rename = "type")]
    pub kind: AddressKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl MessageAddress {
    pub fn admin(id: impl Into<String>) -> Self {
        Self {
            kind: AddressKind::Admin,
            id: id.into(),
            user_id: None,
            email: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.kind == AddressKind::Admin
    }

    /// Admins are addressed by id alone; users and contacts by any of id, user_id, or email.
    pub fn has_identity(&self) -> bool {
        if self.is_admin() {
            return !self.id.is_empty();
        }
        !self.id.is_empty() || non_empty(&self.user_id) || non_empty(&self.email)
    }
}

fn non_empty(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.is_empty())
}

/// Drop empty strings so they resolve as absent rather than as "".
pub(crate) fn present(v: &Option<String>) -> Option<String> {
    v.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Anything that can take part in a conversation.
pub trait MessagePerson {
    fn message_address(&self) -> MessageAddress;
}

impl MessagePerson for MessageAddress {
    fn message_address(&self) -> MessageAddress {
        self.clone()
    }
}

impl<T: MessagePerson + ?Sized> MessagePerson for &T {
    fn message_address(&self) -> MessageAddress {
        (**self).message_address()
    }
}
