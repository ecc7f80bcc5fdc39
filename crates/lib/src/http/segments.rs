use async_trait::async_trait;

use super::HttpClient;
use crate::error::Result;
use crate::segment::{Segment, SegmentList, SegmentRepository};

#[async_trait]
impl SegmentRepository for HttpClient {
    async fn list(&self) -> Result<SegmentList> {
        self.get_json(&["segments"]).await
    }

    async fn find(&self, id: &str) -> Result<Segment> {
        self.get_json(&["segments", id]).await
    }
}
