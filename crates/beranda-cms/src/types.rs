//! CMS API response envelopes.

use beranda_content::Page;
use serde::Deserialize;

/// Envelope for list queries (`GET /api/pages?slug=...`).
#[derive(Debug, Deserialize)]
pub(crate) struct PageListResponse {
    /// Matching pages; exact-slug queries return zero or one.
    #[serde(default)]
    pub data: Vec<Page>,
}

/// Envelope for single-record queries (`GET /api/pages/{id}`).
#[derive(Debug, Deserialize)]
pub(crate) struct PageResponse {
    /// The requested page.
    pub data: Page,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_list_envelope_decodes() {
        let parsed: PageListResponse = serde_json::from_value(serde_json::json!({
            "data": [{
                "id": "p1",
                "name": "About",
                "slug": "/about",
                "published": true,
                "sections": [
                    { "id": "s1", "type": "heroUmum", "published": true }
                ]
            }]
        }))
        .unwrap();

        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].sections[0].type_tag, "heroUmum");
    }

    #[test]
    fn test_empty_list_envelope_decodes() {
        let parsed: PageListResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.data.is_empty());
    }
}
