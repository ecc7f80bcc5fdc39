use async_trait::async_trait;
use serde::Serialize;

use super::HttpClient;
use crate::conversation::{
    Conversation, ConversationList, ConversationListParams, ConversationRepository, Reply,
};
use crate::error::Result;

#[derive(Serialize)]
struct ReadRequest {
    read: bool,
}

#[async_trait]
impl ConversationRepository for HttpClient {
    async fn find(&self, id: &str) -> Result<Conversation> {
        self.get_json(&["conversations", id]).await
    }

    async fn list(&self, params: &ConversationListParams) -> Result<ConversationList> {
        self.get_json_query(&["conversations"], params).await
    }

    /// PUT /conversations/{id} with `{"read": true}`.
    async fn read(&self, id: &str) -> Result<Conversation> {
        self.put_json(&["conversations", id], &ReadRequest { read: true })
            .await
    }

    async fn reply(&self, id: &str, reply: &Reply) -> Result<Conversation> {
        self.post_json(&["conversations", id, "reply"], reply).await
    }
}
