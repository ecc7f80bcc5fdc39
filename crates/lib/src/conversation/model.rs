//! Conversation records as returned by the API. Every field is optional so that
//! absent values decode and re-encode as absent.

use serde::{Deserialize, Serialize};

use crate::actor::Admin;
use crate::address::MessageAddress;
use crate::page::PageParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationList {
    #[serde(default)]
    pub pages: PageParams,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

/// A conversation between users and admins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "crate::de::string_or_number"
    )]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_since: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snoozed_until: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<ConversationContactList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_contact_reply: Option<FirstContactReply>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_assignee_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::opt_string_or_number"
    )]
    pub team_assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<ConversationTagList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_applied: Option<SlaApplied>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ConversationStatistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_rating: Option<ConversationRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teammates: Option<ConversationTeammates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_message: Option<ConversationMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_parts: Option<ConversationPartList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Conversation {
    /// Parts in the order the API returned them; empty when none were included.
    pub fn parts(&self) -> &[ConversationPart] {
        self.conversation_parts
            .as_ref()
            .map(|l| l.parts.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceAuthor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::opt_string_or_number"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The message that opened the conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<SourceAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationContact {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationContactList {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default)]
    pub contacts: Vec<ConversationContact>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationTag {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationTagList {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default)]
    pub tags: Vec<ConversationTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirstContactReply {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlaApplied {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_status: Option<String>,
}

/// Timing and count statistics. Timestamps are unix seconds, durations seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_assignment: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_admin_reply: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_first_close: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_last_close: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_time_to_reply: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_contact_reply_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_assignment_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_admin_reply_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_close_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_assignment_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_assignment_admin_reply_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact_reply_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_admin_reply_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_close_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_closed_by: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_reopens: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_assignments: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_conversation_parts: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teammate: Option<serde_json::Value>,
}

/// Admins who took part in the conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationTeammates {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default)]
    pub admins: Vec<Admin>,
}

/// The first message, rendered for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub author: MessageAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationPartList {
    #[serde(rename = "conversation_parts", default)]
    pub parts: Vec<ConversationPart>,
}

/// A reply, note, or assignment on a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationPart {
    #[serde(default, deserialize_with = "crate::de::string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Admin>,
    pub author: MessageAddress,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressKind;

    #[test]
    fn absent_fields_stay_absent_through_a_round_trip() {
        let raw = serde_json::json!({
            "type": "conversation",
            "id": "147",
            "open": false,
            "admin_assignee_id": 0,
        });
        let conv: Conversation = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(conv.open, Some(false));
        assert_eq!(conv.read, None);
        assert_eq!(conv.admin_assignee_id, Some(0));
        assert_eq!(serde_json::to_value(&conv).unwrap(), raw);
    }

    #[test]
    fn conversation_without_id_round_trips_without_id() {
        let raw = serde_json::json!({ "type": "conversation", "open": true });
        let conv: Conversation = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(conv.id, "");
        assert_eq!(serde_json::to_value(&conv).unwrap(), raw);
    }

    #[test]
    fn decodes_parts_with_authors() {
        let conv: Conversation = serde_json::from_value(serde_json::json!({
            "id": 42,
            "team_assignee_id": 5,
            "conversation_parts": {
                "type": "conversation_part.list",
                "conversation_parts": [
                    { "id": "1", "part_type": "assignment", "author": { "type": "admin", "id": "7" },
                      "assigned_to": { "type": "admin", "id": 8 } },
                    { "id": "2", "part_type": "comment", "body": "<p>hi</p>",
                      "author": { "type": "user", "id": "u1", "email": "u@example.com" } }
                ]
            }
        }))
        .unwrap();
        assert_eq!(conv.id, "42");
        assert_eq!(conv.team_assignee_id.as_deref(), Some("5"));
        let parts = conv.parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].author, MessageAddress::admin("7"));
        assert_eq!(parts[0].assigned_to.as_ref().map(|a| a.id.as_str()), Some("8"));
        assert_eq!(parts[1].author.kind, AddressKind::User);
        assert_eq!(parts[1].author.email.as_deref(), Some("u@example.com"));
    }

    #[test]
    fn parts_empty_when_not_included() {
        assert!(Conversation::default().parts().is_empty());
    }
}
