//! CMS REST API client.

use std::time::Duration;

use beranda_content::{ContentError, ContentSource, Page};
use beranda_locale::Locale;
use tracing::debug;
use ureq::Agent;

use crate::error::CmsError;
use crate::types::{PageListResponse, PageResponse};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// CMS REST API client.
///
/// Reads are uncached; callers get a fresh snapshot per fetch.
pub struct CmsClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl CmsClient {
    /// Create client from config values.
    ///
    /// # Arguments
    /// * `base_url` - CMS base URL
    /// * `token` - Bearer token, if the CMS requires one
    #[must_use]
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.map(str::to_owned),
        }
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }

    /// Issue a GET and decode the JSON body, mapping error statuses.
    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CmsError> {
        let mut request = self.agent.get(url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        let response = request.call()?;
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(CmsError::HttpResponse {
                status,
                body: error_body,
            });
        }

        body_reader.read_json().map_err(CmsError::Decode)
    }
}

/// Map a list-query result to the `ContentSource` contract: first match,
/// 404 means no page, other failures carry the slug.
fn first_page(
    result: Result<PageListResponse, CmsError>,
    slug: &str,
) -> Result<Option<Page>, ContentError> {
    match result {
        Ok(envelope) => Ok(envelope.data.into_iter().next()),
        Err(CmsError::HttpResponse { status: 404, .. }) => Ok(None),
        Err(e) => Err(ContentError::from(e).with_slug(slug)),
    }
}

impl ContentSource for CmsClient {
    fn page_by_slug(&self, slug: &str, locale: Locale) -> Result<Option<Page>, ContentError> {
        let url = format!("{}/pages", self.api_url());
        debug!(slug, locale = %locale, "fetching page by slug");

        first_page(
            self.get_json(&url, &[("slug", slug), ("locale", locale.as_str())]),
            slug,
        )
    }

    fn page_by_id(&self, id: &str) -> Result<Option<Page>, ContentError> {
        let url = format!("{}/pages/{id}", self.api_url());
        debug!(id, "fetching page by id");

        match self.get_json::<PageResponse>(&url, &[]) {
            Ok(envelope) => Ok(Some(envelope.data)),
            Err(CmsError::HttpResponse { status: 404, .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let client = CmsClient::new("http://cms.local/", None);
        assert_eq!(client.api_url(), "http://cms.local/api");
    }

    #[test]
    fn test_token_is_optional() {
        let client = CmsClient::new("http://cms.local", Some("secret"));
        assert_eq!(client.token.as_deref(), Some("secret"));

        let bare = CmsClient::new("http://cms.local", None);
        assert!(bare.token.is_none());
    }

    fn response(status: u16) -> CmsError {
        CmsError::HttpResponse {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_slug_query_404_means_no_page() {
        assert_eq!(first_page(Err(response(404)), "/about").unwrap(), None);
    }

    #[test]
    fn test_slug_query_error_carries_slug() {
        let err = first_page(Err(response(503)), "/about").unwrap_err();
        assert_eq!(err.kind(), beranda_content::ContentErrorKind::Unavailable);
        assert_eq!(err.slug(), Some("/about"));
    }

    #[test]
    fn test_slug_query_takes_first_match() {
        let envelope: PageListResponse = serde_json::from_value(serde_json::json!({
            "data": [
                { "id": "p1", "name": "A", "slug": "/a" },
                { "id": "p2", "name": "B", "slug": "/a" }
            ]
        }))
        .unwrap();

        let page = first_page(Ok(envelope), "/a").unwrap().unwrap();
        assert_eq!(page.id, "p1");
    }
}
