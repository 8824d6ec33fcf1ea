//! In-memory content source for testing.
//!
//! Provides [`MemorySource`] so composition and handler tests run without
//! a CMS. Use the builder methods to configure pages per locale.
//!
//! # Example
//!
//! ```ignore
//! use beranda_content::{MemorySource, Page};
//! use beranda_locale::Locale;
//!
//! let source = MemorySource::new().with_page(Locale::En, page);
//! let found = source.page_by_slug("/about", Locale::En).unwrap();
//! ```

use std::collections::HashMap;

use beranda_locale::Locale;

use crate::model::Page;
use crate::source::{ContentError, ContentSource};

/// In-memory content source keyed by `(locale, slug)`.
#[derive(Debug, Default)]
pub struct MemorySource {
    pages: HashMap<(Locale, String), Page>,
}

impl MemorySource {
    /// Create a new empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page under its own slug for one locale.
    #[must_use]
    pub fn with_page(mut self, locale: Locale, page: Page) -> Self {
        self.pages.insert((locale, page.slug.clone()), page);
        self
    }
}

impl ContentSource for MemorySource {
    fn page_by_slug(&self, slug: &str, locale: Locale) -> Result<Option<Page>, ContentError> {
        Ok(self.pages.get(&(locale, slug.to_owned())).cloned())
    }

    fn page_by_id(&self, id: &str) -> Result<Option<Page>, ContentError> {
        Ok(self.pages.values().find(|p| p.id == id).cloned())
    }
}
