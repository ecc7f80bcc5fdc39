//! Conversations: records, reply construction, list queries, and the service that ties them
//! to a [`ConversationRepository`].

mod model;
mod query;
mod reply;
mod service;

pub use model::{
    Conversation, ConversationContact, ConversationContactList, ConversationList,
    ConversationMessage, ConversationPart, ConversationPartList, ConversationRating,
    ConversationStatistics, ConversationTag, ConversationTagList, ConversationTeammates,
    FirstContactReply, SlaApplied, Source, SourceAuthor,
};
pub use query::{ConversationListParams, ConversationListState};
pub use reply::{Reply, ReplyAuthor, ReplyType};
pub use service::{ConversationRepository, ConversationService};
