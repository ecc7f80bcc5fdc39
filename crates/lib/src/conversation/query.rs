//! Conversation list queries: who the conversations belong to and which state to show.

use serde::Serialize;

use crate::actor::{Admin, User};
use crate::address::{present, AddressKind};
use crate::page::PageParams;

/// Which conversations to show.
///
/// `Open` and `Closed` apply to admin queries, `Unread` to user queries. A state that does
/// not apply to the query's scope is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversationListState {
    #[default]
    All,
    Open,
    Closed,
    Unread,
}

/// Query for GET /conversations. Absent fields are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AddressKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intercom_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_as: Option<String>,
}

impl ConversationListParams {
    /// Every conversation in the workspace.
    pub fn all(pages: &PageParams) -> Self {
        Self {
            page: pages.page,
            per_page: pages.per_page,
            ..Self::default()
        }
    }

    /// Conversations assigned to `admin`.
    pub fn by_admin(admin: &Admin, state: ConversationListState, pages: &PageParams) -> Self {
        let open = match state {
            ConversationListState::Open => Some(true),
            ConversationListState::Closed => Some(false),
            ConversationListState::All => None,
            ConversationListState::Unread => {
                log::debug!("unread state ignored for admin conversation query");
                None
            }
        };
        Self {
            kind: Some(AddressKind::Admin),
            admin_id: Some(admin.id.clone()).filter(|id| !id.is_empty()),
            open,
            ..Self::all(pages)
        }
    }

    /// Conversations started by or with `user`.
    pub fn by_user(user: &User, state: ConversationListState, pages: &PageParams) -> Self {
        let unread = match state {
            ConversationListState::Unread => Some(true),
            ConversationListState::All => None,
            ConversationListState::Open | ConversationListState::Closed => {
                log::debug!("{:?} state ignored for user conversation query", state);
                None
            }
        };
        Self {
            kind: Some(AddressKind::User),
            intercom_user_id: Some(user.id.clone()).filter(|s| !s.is_empty()),
            user_id: present(&user.user_id),
            email: present(&user.email),
            unread,
            ..Self::all(pages)
        }
    }

    /// Render message bodies as plain text instead of HTML.
    pub fn plaintext(mut self) -> Self {
        self.display_as = Some("plaintext".to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn admin() -> Admin {
        Admin::new("814860")
    }

    fn user() -> User {
        User {
            id: "5310d8e7".to_string(),
            user_id: Some("ext-77".to_string()),
            email: Some("jamie@example.com".to_string()),
            ..User::default()
        }
    }

    #[test]
    fn admin_open_closed_all() {
        let pages = PageParams::default();
        let open = ConversationListParams::by_admin(&admin(), ConversationListState::Open, &pages);
        assert_eq!(open.kind, Some(AddressKind::Admin));
        assert_eq!(open.admin_id.as_deref(), Some("814860"));
        assert_eq!(open.open, Some(true));
        assert_eq!(open.unread, None);

        let closed =
            ConversationListParams::by_admin(&admin(), ConversationListState::Closed, &pages);
        assert_eq!(closed.open, Some(false));
        assert_eq!(closed.unread, None);

        let all = ConversationListParams::by_admin(&admin(), ConversationListState::All, &pages);
        assert_eq!(all.open, None);
        assert_eq!(all.unread, None);
    }

    #[test]
    fn admin_ignores_unread() {
        let p = ConversationListParams::by_admin(
            &admin(),
            ConversationListState::Unread,
            &PageParams::default(),
        );
        assert_eq!(p.open, None);
        assert_eq!(p.unread, None);
    }

    #[test]
    fn user_unread() {
        let p = ConversationListParams::by_user(
            &user(),
            ConversationListState::Unread,
            &PageParams::default(),
        );
        assert_eq!(p.kind, Some(AddressKind::User));
        assert_eq!(p.intercom_user_id.as_deref(), Some("5310d8e7"));
        assert_eq!(p.user_id.as_deref(), Some("ext-77"));
        assert_eq!(p.email.as_deref(), Some("jamie@example.com"));
        assert_eq!(p.unread, Some(true));
        assert_eq!(p.open, None);
        assert_eq!(p.admin_id, None);
    }

    #[test]
    fn user_ignores_open_and_closed() {
        for state in [ConversationListState::Open, ConversationListState::Closed] {
            let p = ConversationListParams::by_user(&user(), state, &PageParams::default());
            assert_eq!(p.open, None);
            assert_eq!(p.unread, None);
        }
    }

    #[test]
    fn serialized_query_omits_absent_fields() {
        let p = ConversationListParams::by_admin(
            &admin(),
            ConversationListState::Closed,
            &PageParams::page(3),
        );
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({ "page": 3, "type": "admin", "admin_id": "814860", "open": false })
        );
        let p = ConversationListParams::by_admin(
            &Admin::default(),
            ConversationListState::All,
            &PageParams::default(),
        );
        assert_eq!(serde_json::to_value(&p).unwrap(), json!({ "type": "admin" }));
        let p = ConversationListParams::all(&PageParams::default()).plaintext();
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({ "display_as": "plaintext" })
        );
    }
}
