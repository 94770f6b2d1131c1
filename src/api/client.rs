//! HTTP client wrapper
//!
//! Issues GET/POST/DELETE against the configured base URL and decodes JSON
//! payloads. Transport failures and non-2xx statuses are mapped into the
//! crate `Error` type; callers turn those into region display strings.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::common::prelude::*;

/// Thin wrapper around `reqwest::Client` bound to one API base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the given base URL with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Host portion of the base URL, for display in the header bar.
    pub fn host(&self) -> &str {
        self.base_url.host_str().unwrap_or("unknown")
    }

    /// Build a request URL from path segments and query pairs.
    ///
    /// Segments are appended to the base URL path, so a base of
    /// `https://host/students-api` keeps its prefix.
    pub(crate) fn url_for(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::http("API base URL cannot be a base"))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url_for(segments, query)?;
        trace!("GET {}", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let url = self.url_for(segments, &[])?;
        trace!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.url_for(segments, &[])?;
        trace!("DELETE {}", url);
        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(ApiClient::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_url_for_simple() {
        let api = client("https://example.com");
        let url = api.url_for(&["users"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/users");
    }

    #[test]
    fn test_url_for_with_query() {
        let api = client("https://example.com");
        let url = api
            .url_for(&["posts"], &[("userId", "7".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/posts?userId=7");
    }

    #[test]
    fn test_url_for_keeps_base_path_prefix() {
        let api = client("https://example.com/students-api");
        let url = api
            .url_for(&["comments"], &[("postId", "3".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/students-api/comments?postId=3"
        );
    }

    #[test]
    fn test_url_for_trailing_slash_base() {
        let api = client("https://example.com/students-api/");
        let url = api.url_for(&["users"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/students-api/users");
    }

    #[test]
    fn test_url_for_id_segment() {
        let api = client("https://example.com");
        let url = api.url_for(&["comments", "15"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/comments/15");
    }

    #[test]
    fn test_host() {
        let api = client("https://example.com/students-api");
        assert_eq!(api.host(), "example.com");
    }
}
