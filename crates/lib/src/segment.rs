//! Segments: saved filters over contacts.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentList {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[intercom] segment {{ type: {}, id: {}, name: {}, created_at: {}, updated_at: {}, person_type: {} }}",
            self.typ.as_deref().unwrap_or(""),
            self.id,
            self.name.as_deref().unwrap_or(""),
            self.created_at.unwrap_or_default(),
            self.updated_at.unwrap_or_default(),
            self.person_type.as_deref().unwrap_or("")
        )
    }
}

#[async_trait]
pub trait SegmentRepository: Send + Sync {
    async fn list(&self) -> Result<SegmentList>;
    async fn find(&self, id: &str) -> Result<Segment>;
}

pub struct SegmentService<R> {
    repository: R,
}

impl<R: SegmentRepository> SegmentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// All segments in the workspace.
    pub async fn list(&self) -> Result<SegmentList> {
        self.repository.list().await
    }

    pub async fn find(&self, id: &str) -> Result<Segment> {
        self.repository.find(id).await
    }
}
