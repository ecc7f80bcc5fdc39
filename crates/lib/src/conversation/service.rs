//! Conversation operations: build the query or reply, hand it to the repository.

use async_trait::async_trait;

use crate::actor::{Admin, User};
use crate::address::MessagePerson;
use crate::error::Result;
use crate::page::PageParams;

use super::model::{Conversation, ConversationList};
use super::query::{ConversationListParams, ConversationListState};
use super::reply::{Reply, ReplyType};

/// Transport for conversation operations.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn find(&self, id: &str) -> Result<Conversation>;
    async fn list(&self, params: &ConversationListParams) -> Result<ConversationList>;
    /// Mark the conversation as read.
    async fn read(&self, id: &str) -> Result<Conversation>;
    async fn reply(&self, id: &str, reply: &Reply) -> Result<Conversation>;
}

/// Stateless wrapper over a [`ConversationRepository`]. Safe to share when the repository is.
pub struct ConversationService<R> {
    repository: R,
}

impl<R: ConversationRepository> ConversationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn find(&self, id: &str) -> Result<Conversation> {
        self.repository.find(id).await
    }

    pub async fn list_all(&self, pages: &PageParams) -> Result<ConversationList> {
        self.repository
            .list(&ConversationListParams::all(pages))
            .await
    }

    pub async fn list_by_admin(
        &self,
        admin: &Admin,
        state: ConversationListState,
        pages: &PageParams,
    ) -> Result<ConversationList> {
        self.repository
            .list(&ConversationListParams::by_admin(admin, state, pages))
            .await
    }

    pub async fn list_by_user(
        &self,
        user: &User,
        state: ConversationListState,
        pages: &PageParams,
    ) -> Result<ConversationList> {
        self.repository
            .list(&ConversationListParams::by_user(user, state, pages))
            .await
    }

    /// Run an arbitrary list query (e.g. with `display_as`).
    pub async fn list(&self, params: &ConversationListParams) -> Result<ConversationList> {
        self.repository.list(params).await
    }

    /// Mark a conversation as read (by a user).
    pub async fn mark_read(&self, id: &str) -> Result<Conversation> {
        self.repository.read(id).await
    }

    pub async fn reply<A>(
        &self,
        id: &str,
        author: &A,
        reply_type: ReplyType,
        body: &str,
    ) -> Result<Conversation>
    where
        A: MessagePerson + Sync + ?Sized,
    {
        self.reply_with_attachment_urls(id, author, reply_type, body, Vec::new())
            .await
    }

    pub async fn reply_with_attachment_urls<A>(
        &self,
        id: &str,
        author: &A,
        reply_type: ReplyType,
        body: &str,
        attachment_urls: Vec<String>,
    ) -> Result<Conversation>
    where
        A: MessagePerson + Sync + ?Sized,
    {
        let reply = Reply::build(author, reply_type, body, attachment_urls)?;
        self.repository.reply(id, &reply).await
    }

    /// Assign a conversation to `assignee`, on behalf of `assigner`.
    pub async fn assign(&self, id: &str, assigner: &Admin, assignee: &Admin) -> Result<Conversation> {
        let reply = Reply::assignment(assigner, assignee)?;
        self.repository.reply(id, &reply).await
    }

    /// Open a conversation (no body).
    pub async fn open(&self, id: &str, opener: &Admin) -> Result<Conversation> {
        self.reply(id, opener, ReplyType::Open, "").await
    }

    /// Close a conversation (no body).
    pub async fn close(&self, id: &str, closer: &Admin) -> Result<Conversation> {
        self.reply(id, closer, ReplyType::Close, "").await
    }
}
