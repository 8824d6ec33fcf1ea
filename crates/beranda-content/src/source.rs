//! Content source trait and error types.
//!
//! [`ContentSource`] abstracts read-only CMS access. Implementations map
//! their transport failures into [`ContentError`] with a semantic
//! [`ContentErrorKind`], so callers can degrade uniformly without knowing
//! which backend they talk to.

use std::fmt;

use beranda_locale::Locale;

use crate::model::Page;

/// Semantic error categories for content fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentErrorKind {
    /// Record does not exist.
    NotFound,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Backend asked us to back off.
    RateLimited,
    /// Request timed out.
    Timeout,
    /// Backend answered with a payload we could not decode.
    InvalidResponse,
    /// Other/unknown error category.
    Other,
}

/// Content fetch error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct ContentError {
    kind: ContentErrorKind,
    slug: Option<String>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContentError {
    /// Create a new content error.
    #[must_use]
    pub fn new(kind: ContentErrorKind) -> Self {
        Self {
            kind,
            slug: None,
            backend: None,
            source: None,
        }
    }

    /// Attach slug context.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Attach backend identifier (e.g. "Cms", "Memory").
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> ContentErrorKind {
        self.kind
    }

    /// Slug context, if attached.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(backend) = self.backend {
            write!(f, " ({backend})")?;
        }
        if let Some(slug) = &self.slug {
            write!(f, ": {slug}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only CMS access.
///
/// Slugs are canonical (locale prefix already stripped): `"/"` for the
/// home page, `"/about"`, `"/blog/some-post"`. Lookup is exact; no fuzzy
/// or prefix matching.
pub trait ContentSource: Send + Sync {
    /// Fetch a page by exact slug for one locale.
    ///
    /// Returns `Ok(None)` when no page exists under the slug.
    fn page_by_slug(&self, slug: &str, locale: Locale) -> Result<Option<Page>, ContentError>;

    /// Fetch a page by CMS record id.
    ///
    /// Returns `Ok(None)` when the id is unknown.
    fn page_by_id(&self, id: &str) -> Result<Option<Page>, ContentError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_display_includes_context() {
        let err = ContentError::new(ContentErrorKind::Unavailable)
            .with_backend("Cms")
            .with_slug("/about");

        assert_eq!(err.to_string(), "Unavailable (Cms): /about");
        assert_eq!(err.kind(), ContentErrorKind::Unavailable);
        assert_eq!(err.slug(), Some("/about"));
    }

    #[test]
    fn test_error_source_is_preserved() {
        let io = std::io::Error::other("connection reset");
        let err = ContentError::new(ContentErrorKind::Other).with_source(io);

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection reset");
    }
}
