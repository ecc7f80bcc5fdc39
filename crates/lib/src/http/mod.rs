//! HTTP transport: implements the contact, conversation, and segment repositories
//! against the REST API (https://api.intercom.io by default).

mod contacts;
mod conversations;
mod segments;

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{self, Config};
use crate::error::{Error, Result};

const VERSION_HEADER: &str = "Intercom-Version";

/// Client for the REST API. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpClient {
    base_url: Url,
    token: Option<String>,
    api_version: Option<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl HttpClient {
    pub fn new(base_url: Option<String>, token: Option<String>) -> Result<Self> {
        Self::with_client(base_url, token, reqwest::Client::new())
    }

    /// Build from config: base URL, token (env INTERCOM_ACCESS_TOKEN wins), version header, timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let mut http = Self::with_client(
            Some(config.base_url.clone()),
            config::resolve_access_token(config),
            client,
        )?;
        http.api_version = config.api_version.clone();
        Ok(http)
    }

    fn with_client(
        base_url: Option<String>,
        token: Option<String>,
        client: reqwest::Client,
    ) -> Result<Self> {
        let raw = base_url
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&raw).map_err(|e| Error::InvalidBaseUrl(format!("{}: {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(raw));
        }
        Ok(Self {
            base_url,
            token,
            api_version: None,
            client,
        })
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Base URL with each segment appended, percent-encoded.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(Error::MissingToken)?;
        let url = self.url(segments);
        log::debug!("intercom {} {}", method, url.path());
        let mut req = self
            .client
            .request(method, url)
            .bearer_auth(token)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(v) = &self.api_version {
            req = req.header(VERSION_HEADER, v.as_str());
        }
        Ok(req)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let res = req.send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            log::warn!("intercom api returned {}", status);
            return Err(Error::from_response(status.as_u16(), &body));
        }
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let req = self.request(Method::GET, segments)?;
        self.send(req).await
    }

    /// GET with a query object; absent options are skipped by the serializer.
    pub(crate) async fn get_json_query<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.request(Method::GET, segments)?.query(query);
        self.send(req).await
    }

    pub(crate) async fn post_json<T, B>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::POST, segments)?.json(body);
        self.send(req).await
    }

    pub(crate) async fn put_json<T, B>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::PUT, segments)?.json(body);
        self.send(req).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let req = self.request(Method::DELETE, segments)?;
        self.send(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_and_encodes_segments() {
        let http = HttpClient::new(Some("https://api.example.com/".to_string()), None).unwrap();
        assert_eq!(http.base_url(), "https://api.example.com/");
        let url = http.url(&["conversations", "a b/c", "reply"]);
        assert_eq!(
            url.as_str(),
            "https://api.example.com/conversations/a%20b%2Fc/reply"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let http = HttpClient::new(Some("http://localhost:8080/api/".to_string()), None).unwrap();
        assert_eq!(
            http.url(&["segments"]).as_str(),
            "http://localhost:8080/api/segments"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            HttpClient::new(Some("not a url".to_string()), None),
            Err(Error::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpClient::new(Some("mailto:ops@example.com".to_string()), None),
            Err(Error::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn request_without_token_fails_before_sending() {
        let http = HttpClient::new(None, None).unwrap();
        assert!(matches!(
            http.request(Method::GET, &["segments"]),
            Err(Error::MissingToken)
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let http = HttpClient::new(None, Some("secret-token".to_string())).unwrap();
        let s = format!("{:?}", http);
        assert!(!s.contains("secret-token"));
        assert!(s.contains("<redacted>"));
    }
}
