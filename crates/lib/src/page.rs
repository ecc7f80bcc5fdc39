//! Paging parameters, sent as query params and returned as the `pages` object of list responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl PageParams {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Params for the page after this one, or None when this is the last.
    pub fn next(&self) -> Option<PageParams> {
        let current = self.page.unwrap_or(1);
        match self.total_pages {
            Some(total) if current >= total => None,
            _ => Some(PageParams {
                page: Some(current + 1),
                per_page: self.per_page,
                total_pages: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_stops_at_last_page() {
        let pages = PageParams {
            page: Some(3),
            per_page: Some(50),
            total_pages: Some(3),
        };
        assert_eq!(pages.next(), None);
        let pages = PageParams {
            page: Some(2),
            ..pages
        };
        assert_eq!(pages.next(), Some(PageParams::page(3).with_per_page(50)));
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let v = serde_json::to_value(PageParams::page(2)).unwrap();
        assert_eq!(v, serde_json::json!({ "page": 2 }));
    }
}
