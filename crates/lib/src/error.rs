//! Library error type shared by every repository and service.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("intercom request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("intercom api error: {status} {errors}")]
    Api { status: u16, errors: ApiErrorList },
    #[error("intercom response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid reply: {0}")]
    InvalidReply(String),
    #[error("intercom access token not configured")]
    MissingToken,
    #[error("missing contact identifier: need id, user_id, or email")]
    MissingIdentifier,
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl Error {
    pub(crate) fn invalid_reply(msg: impl Into<String>) -> Self {
        Error::InvalidReply(msg.into())
    }

    /// Build an API error from a non-success status and its raw body.
    /// Bodies in the `error.list` envelope are decoded; anything else becomes a single entry.
    pub fn from_response(status: u16, body: &str) -> Self {
        let errors = serde_json::from_str::<ApiErrorList>(body)
            .ok()
            .filter(|l| !l.errors.is_empty())
            .unwrap_or_else(|| ApiErrorList::raw(body));
        Error::Api { status, errors }
    }

    /// First error code reported by the API, if any.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api { errors, .. } => errors.errors.first().and_then(|e| e.code.as_deref()),
            _ => None,
        }
    }
}

/// `{"type": "error.list", "errors": [...]}` as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorList {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiErrorList {
    fn raw(body: &str) -> Self {
        Self {
            typ: None,
            errors: vec![ApiErrorEntry {
                code: None,
                message: Some(body.trim().to_string()),
                field: None,
            }],
        }
    }
}

impl fmt::Display for ApiErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            match (&e.code, &e.message) {
                (Some(c), Some(m)) => write!(f, "{}: {}", c, m)?,
                (Some(c), None) => f.write_str(c)?,
                (None, Some(m)) => f.write_str(m)?,
                (None, None) => f.write_str("unknown error")?,
            }
        }
        Ok(())
    }
}
