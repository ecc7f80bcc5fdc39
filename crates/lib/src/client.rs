//! One handle bundling the contact, conversation, and segment services over a shared
//! [`HttpClient`].

use crate::config::Config;
use crate::contact::ContactService;
use crate::conversation::ConversationService;
use crate::error::Result;
use crate::http::HttpClient;
use crate::segment::SegmentService;

pub struct Intercom {
    pub contacts: ContactService<HttpClient>,
    pub conversations: ConversationService<HttpClient>,
    pub segments: SegmentService<HttpClient>,
}

impl Intercom {
    pub fn new(http: HttpClient) -> Self {
        Self {
            contacts: ContactService::new(http.clone()),
            conversations: ConversationService::new(http.clone()),
            segments: SegmentService::new(http),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpClient::from_config(config)?))
    }

    /// Client for `base_url` (default https://api.intercom.io) authenticated with `token`.
    pub fn with_token(base_url: Option<String>, token: impl Into<String>) -> Result<Self> {
        Ok(Self::new(HttpClient::new(base_url, Some(token.into()))?))
    }
}
