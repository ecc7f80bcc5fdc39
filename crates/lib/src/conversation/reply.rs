//! Reply payloads. The author's resolved address decides whether the admin or the user
//! identity fields are filled; the two sets are separate enum variants so a payload
//! can never carry both.

use serde::{Deserialize, Serialize};

use crate::actor::Admin;
use crate::address::{AddressKind, MessageAddress, MessagePerson};
use crate::error::{Error, Result};

/// What a reply does to the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyType {
    Comment,
    Note,
    Open,
    Close,
    #[serde(rename = "assignment")]
    Assign,
}

impl ReplyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyType::Comment => "comment",
            ReplyType::Note => "note",
            ReplyType::Open => "open",
            ReplyType::Close => "close",
            ReplyType::Assign => "assignment",
        }
    }
}

impl std::fmt::Display for ReplyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity fields of a reply, flattened into the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyAuthor {
    Admin {
        admin_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        assignee_id: Option<String>,
    },
    User {
        #[serde(rename = "intercom_user_id", skip_serializing_if = "Option::is_none")]
        intercom_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        user_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
}

impl ReplyAuthor {
    fn from_address(addr: MessageAddress) -> Self {
        if addr.is_admin() {
            ReplyAuthor::Admin {
                admin_id: addr.id,
                assignee_id: None,
            }
        } else {
            ReplyAuthor::User {
                intercom_id: Some(addr.id).filter(|s| !s.is_empty()),
                user_id: addr.user_id,
                email: addr.email,
            }
        }
    }
}

/// Body of POST /conversations/{id}/reply. Built, sent, discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    #[serde(rename = "type")]
    kind: AddressKind,
    #[serde(rename = "message_type")]
    reply_type: ReplyType,
    #[serde(skip_serializing_if = "String::is_empty")]
    body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachment_urls: Vec<String>,
    #[serde(flatten)]
    author: ReplyAuthor,
}

impl Reply {
    /// Resolve `author` and build a reply of the given type.
    ///
    /// Fails when the author has no usable identity, or when an assignment-tagged reply
    /// carries a body or attachments (use [`Reply::assignment`] instead).
    pub fn build<A>(
        author: &A,
        reply_type: ReplyType,
        body: impl Into<String>,
        attachment_urls: Vec<String>,
    ) -> Result<Self>
    where
        A: MessagePerson + ?Sized,
    {
        let addr = author.message_address();
        if !addr.has_identity() {
            return Err(Error::invalid_reply(format!(
                "{} author has no id, user_id, or email",
                addr.kind.as_str()
            )));
        }
        let body = body.into();
        if reply_type == ReplyType::Assign && (!body.is_empty() || !attachment_urls.is_empty()) {
            return Err(Error::invalid_reply(
                "assignment replies take no body or attachments",
            ));
        }
        Ok(Self {
            kind: addr.kind,
            reply_type,
            body,
            attachment_urls,
            author: ReplyAuthor::from_address(addr),
        })
    }

    /// Assignment of a conversation by `assigner` to `assignee`. No body.
    pub fn assignment(assigner: &Admin, assignee: &Admin) -> Result<Self> {
        let from = assigner.message_address();
        let to = assignee.message_address();
        if from.id.is_empty() || to.id.is_empty() {
            return Err(Error::invalid_reply(
                "assignment needs both an assigner and an assignee id",
            ));
        }
        Ok(Self {
            kind: AddressKind::Admin,
            reply_type: ReplyType::Assign,
            body: String::new(),
            attachment_urls: Vec::new(),
            author: ReplyAuthor::Admin {
                admin_id: from.id,
                assignee_id: Some(to.id),
            },
        })
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn reply_type(&self) -> ReplyType {
        self.reply_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn attachment_urls(&self) -> &[String] {
        &self.attachment_urls
    }

    pub fn author(&self) -> &ReplyAuthor {
        &self.author
    }

    pub fn admin_id(&self) -> Option<&str> {
        match &self.author {
            ReplyAuthor::Admin { admin_id, .. } => Some(admin_id.as_str()),
            ReplyAuthor::User { .. } => None,
        }
    }

    pub fn assignee_id(&self) -> Option<&str> {
        match &self.author {
            ReplyAuthor::Admin { assignee_id, .. } => assignee_id.as_deref(),
            ReplyAuthor::User { .. } => None,
        }
    }

    pub fn intercom_id(&self) -> Option<&str> {
        match &self.author {
            ReplyAuthor::User { intercom_id, .. } => intercom_id.as_deref(),
            ReplyAuthor::Admin { .. } => None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match &self.author {
            ReplyAuthor::User { user_id, .. } => user_id.as_deref(),
            ReplyAuthor::Admin { .. } => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match &self.author {
            ReplyAuthor::User { email, .. } => email.as_deref(),
            ReplyAuthor::Admin { .. } => None,
        }
    }
}
