//! Page composition flow.
//!
//! `slug + locale -> RenderPlan`: fetch the page from the injected
//! content source, gate it on publish state, filter and dispatch its
//! sections, preserve order.

use std::sync::Arc;

use beranda_content::{ContentSource, Page, Publishable};
use beranda_locale::Locale;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::registry::SectionRegistry;

/// One renderable section in a plan.
///
/// `key` is the positional index in the surviving list, giving sections a
/// stable identity across re-renders of the same CMS state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    /// CMS record id of the section.
    pub id: String,
    /// Positional index in the plan.
    pub key: usize,
    /// Section type tag.
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Rendered HTML fragment.
    pub html: String,
}

/// The ordered, filtered list of sections to render for a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    /// CMS record id of the page.
    pub page_id: String,
    /// Editorial page name.
    pub page_name: String,
    /// Canonical slug the page was composed for.
    pub slug: String,
    /// Locale the page was composed in.
    pub locale: Locale,
    /// Sections in render order. May be empty (EmptyContent presentation
    /// is the caller's branch).
    pub sections: Vec<RenderedSection>,
}

/// Error returned when page composition terminates early.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComposeError {
    /// No page exists under the slug (or the upstream fetch failed and
    /// was degraded).
    #[error("Page not found: {0}")]
    NotFound(String),
    /// The page exists but its publish attribute evaluates to hidden.
    /// Deliberately distinct from [`ComposeError::NotFound`].
    #[error("Page not published: {0}")]
    Unpublished(String),
}

/// Page composition over an injected content source and renderer registry.
pub struct Site {
    source: Arc<dyn ContentSource>,
    registry: SectionRegistry,
}

impl Site {
    /// Create a site over a content source, with the default registry.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self::with_registry(source, SectionRegistry::with_defaults())
    }

    /// Create a site with a custom renderer registry.
    #[must_use]
    pub fn with_registry(source: Arc<dyn ContentSource>, registry: SectionRegistry) -> Self {
        Self { source, registry }
    }

    /// Compose the page under `slug` at the current instant.
    pub fn compose(&self, slug: &str, locale: Locale) -> Result<RenderPlan, ComposeError> {
        self.compose_at(slug, locale, Utc::now())
    }

    /// Compose at an explicit instant (publish decisions are evaluated
    /// against `now`, which keeps tests deterministic).
    pub fn compose_at(
        &self,
        slug: &str,
        locale: Locale,
        now: DateTime<Utc>,
    ) -> Result<RenderPlan, ComposeError> {
        let page = match self.source.page_by_slug(slug, locale) {
            Ok(page) => page,
            Err(e) => {
                // Upstream failures never surface raw; degrade to not-found.
                warn!(slug, error = %e, "content fetch failed, serving not-found");
                None
            }
        };
        let Some(page) = page else {
            return Err(ComposeError::NotFound(slug.to_owned()));
        };

        if !page.is_published_at(now) {
            return Err(ComposeError::Unpublished(slug.to_owned()));
        }

        Ok(RenderPlan {
            page_id: page.id.clone(),
            page_name: page.name.clone(),
            slug: slug.to_owned(),
            locale,
            sections: self.render_list_at(&page, locale, now),
        })
    }

    /// Filter and dispatch a published page's sections.
    ///
    /// Stable filter: unpublished sections drop out, survivors keep their
    /// relative order. An unknown type tag logs a warning and omits the
    /// section; it never halts composition of the remaining sections.
    #[must_use]
    pub fn render_list_at(
        &self,
        page: &Page,
        locale: Locale,
        now: DateTime<Utc>,
    ) -> Vec<RenderedSection> {
        let mut rendered = Vec::with_capacity(page.sections.len());
        for section in &page.sections {
            if !section.is_published_at(now) {
                continue;
            }
            let Some(renderer) = self.registry.get(&section.type_tag) else {
                warn!(
                    tag = %section.type_tag,
                    section = %section.id,
                    page = %page.id,
                    "unknown section type, omitting"
                );
                continue;
            };
            rendered.push(RenderedSection {
                id: section.id.clone(),
                key: rendered.len(),
                type_tag: section.type_tag.clone(),
                html: renderer.render(section, locale),
            });
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use beranda_content::{ContentError, ContentErrorKind, MemorySource, PublishAttr, Section};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn section(id: &str, tag: &str, published: bool) -> Section {
        Section {
            id: id.to_owned(),
            type_tag: tag.to_owned(),
            name: String::new(),
            published: Some(PublishAttr::Flag(published)),
            props: serde_json::json!({ "title": id }),
        }
    }

    fn page(slug: &str, published: Option<PublishAttr>, sections: Vec<Section>) -> Page {
        Page {
            id: format!("page{slug}"),
            name: "Test".to_owned(),
            slug: slug.to_owned(),
            published,
            sections,
        }
    }

    fn site_with(page: Page) -> Site {
        Site::new(Arc::new(MemorySource::new().with_page(Locale::En, page)))
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let site = site_with(page(
            "/",
            Some(PublishAttr::Flag(true)),
            vec![
                section("a", "heroUtama", true),
                section("b", "features", false),
                section("c", "faqSection", true),
            ],
        ));

        let plan = site.compose_at("/", Locale::En, now()).unwrap();
        let ids: Vec<&str> = plan.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(plan.sections[0].key, 0);
        assert_eq!(plan.sections[1].key, 1);
    }

    #[test]
    fn test_unknown_tag_is_omitted_without_aborting() {
        let site = site_with(page(
            "/",
            Some(PublishAttr::Flag(true)),
            vec![
                section("a", "heroUtama", true),
                section("x", "bogus", true),
                section("c", "faqSection", true),
            ],
        ));

        let plan = site.compose_at("/", Locale::En, now()).unwrap();
        let ids: Vec<&str> = plan.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_missing_page_is_not_found() {
        let site = Site::new(Arc::new(MemorySource::new()));
        assert_eq!(
            site.compose_at("/missing", Locale::En, now()),
            Err(ComposeError::NotFound("/missing".to_owned()))
        );
    }

    #[test]
    fn test_unpublished_page_is_distinct_from_not_found() {
        let site = site_with(page(
            "/soon",
            Some(PublishAttr::At("2025-06-01T00:00:00Z".to_owned())),
            vec![section("a", "heroUtama", true)],
        ));

        assert_eq!(
            site.compose_at("/soon", Locale::En, now()),
            Err(ComposeError::Unpublished("/soon".to_owned()))
        );
    }

    #[test]
    fn test_page_without_publish_attribute_fails_closed() {
        let site = site_with(page("/draft", None, Vec::new()));
        assert_eq!(
            site.compose_at("/draft", Locale::En, now()),
            Err(ComposeError::Unpublished("/draft".to_owned()))
        );
    }

    #[test]
    fn test_scheduled_sections_follow_the_same_clock() {
        let mut early = section("past", "heroUtama", true);
        early.published = Some(PublishAttr::At("2024-12-01T00:00:00Z".to_owned()));
        let mut late = section("future", "features", true);
        late.published = Some(PublishAttr::At("2025-02-01T00:00:00Z".to_owned()));

        let site = site_with(page("/", Some(PublishAttr::Flag(true)), vec![early, late]));
        let plan = site.compose_at("/", Locale::En, now()).unwrap();

        let ids: Vec<&str> = plan.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["past"]);
    }

    #[test]
    fn test_all_sections_filtered_yields_empty_plan() {
        let site = site_with(page(
            "/",
            Some(PublishAttr::Flag(true)),
            vec![section("a", "heroUtama", false)],
        ));

        let plan = site.compose_at("/", Locale::En, now()).unwrap();
        assert!(plan.sections.is_empty());
    }

    #[test]
    fn test_upstream_failure_degrades_to_not_found() {
        struct FailingSource;
        impl ContentSource for FailingSource {
            fn page_by_slug(
                &self,
                _: &str,
                _: Locale,
            ) -> Result<Option<Page>, ContentError> {
                Err(ContentError::new(ContentErrorKind::Unavailable))
            }
            fn page_by_id(&self, _: &str) -> Result<Option<Page>, ContentError> {
                Err(ContentError::new(ContentErrorKind::Unavailable))
            }
        }

        let site = Site::new(Arc::new(FailingSource));
        assert_eq!(
            site.compose_at("/about", Locale::En, now()),
            Err(ComposeError::NotFound("/about".to_owned()))
        );
    }

    #[test]
    fn test_composition_is_idempotent() {
        let site = site_with(page(
            "/",
            Some(PublishAttr::Flag(true)),
            vec![
                section("a", "heroUtama", true),
                section("b", "pricing", true),
            ],
        ));

        let first = site.compose_at("/", Locale::En, now()).unwrap();
        let second = site.compose_at("/", Locale::En, now()).unwrap();
        assert_eq!(first, second);
    }
}
