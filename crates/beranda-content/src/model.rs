//! CMS record shapes.
//!
//! Pages and sections are read-only snapshots of CMS state, fetched per
//! request. The CMS is the system of record; nothing here is written back.

use serde::{Deserialize, Serialize};

use crate::publish::{PublishAttr, Publishable};

/// A typed, independently publishable unit of page content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// CMS record id.
    pub id: String,
    /// Section type tag, matched against the renderer registry
    /// (e.g. `heroUtama`, `faqSection`).
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Editorial name, for diagnostics only.
    #[serde(default)]
    pub name: String,
    /// Publish attribute; absent means not visible.
    #[serde(default)]
    pub published: Option<PublishAttr>,
    /// Per-type presentational payload, opaque to the composition core.
    #[serde(default)]
    pub props: serde_json::Value,
}

impl Publishable for Section {
    fn publish_attr(&self) -> Option<&PublishAttr> {
        self.published.as_ref()
    }
}

/// A page: an ordered list of sections under a slug.
///
/// Invariant: `sections` order is render order and is preserved through
/// every downstream transformation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// CMS record id.
    pub id: String,
    /// Editorial name.
    #[serde(default)]
    pub name: String,
    /// Canonical slug without locale prefix (e.g. `/about`, `/` for home).
    pub slug: String,
    /// Publish attribute; absent means not visible.
    #[serde(default)]
    pub published: Option<PublishAttr>,
    /// Sections in render order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Publishable for Page {
    fn publish_attr(&self) -> Option<&PublishAttr> {
        self.published.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_and_section_share_the_evaluator() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let attr = Some(PublishAttr::At("2024-12-31T00:00:00Z".to_owned()));

        let page = Page {
            id: "p1".to_owned(),
            name: "Home".to_owned(),
            slug: "/".to_owned(),
            published: attr.clone(),
            sections: Vec::new(),
        };
        let section = Section {
            id: "s1".to_owned(),
            type_tag: "heroUtama".to_owned(),
            name: "Hero".to_owned(),
            published: attr,
            props: serde_json::Value::Null,
        };

        assert_eq!(page.is_published_at(now), section.is_published_at(now));
        assert!(page.is_published_at(now));
    }

    #[test]
    fn test_section_deserializes_cms_payload() {
        let section: Section = serde_json::from_value(serde_json::json!({
            "id": "sec-9",
            "type": "faqSection",
            "name": "FAQ",
            "published": "2024-06-01T00:00:00Z",
            "props": { "items": [] }
        }))
        .unwrap();

        assert_eq!(section.type_tag, "faqSection");
        assert_eq!(
            section.published,
            Some(PublishAttr::At("2024-06-01T00:00:00Z".to_owned()))
        );
    }

    #[test]
    fn test_page_tolerates_missing_optional_fields() {
        let page: Page = serde_json::from_value(serde_json::json!({
            "id": "p2",
            "slug": "/pricing"
        }))
        .unwrap();

        assert_eq!(page.published, None);
        assert!(page.sections.is_empty());
        assert!(!page.is_published());
    }
}
