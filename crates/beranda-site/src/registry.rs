//! Tag → renderer registry.

use std::collections::HashMap;

use beranda_content::Section;
use beranda_locale::Locale;

use crate::renderers;

/// A renderer capability for one section type.
///
/// Implementations turn a section's CMS props into an HTML fragment.
/// They are pure: no I/O, no CMS calls (data is pre-fetched by the
/// composition flow).
pub trait Renderable: Send + Sync {
    /// Render the section body as an HTML fragment.
    fn render(&self, section: &Section, locale: Locale) -> String;
}

/// Static mapping from section type tag to renderer.
pub struct SectionRegistry {
    renderers: HashMap<&'static str, Box<dyn Renderable>>,
}

impl SectionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Create a registry preloaded with every built-in section type.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        renderers::register_defaults(&mut registry);
        registry
    }

    /// Register a renderer for a tag, replacing any existing entry.
    pub fn register(&mut self, tag: &'static str, renderer: Box<dyn Renderable>) {
        self.renderers.insert(tag, renderer);
    }

    /// Look up the renderer for a tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&dyn Renderable> {
        self.renderers.get(tag).map(Box::as_ref)
    }

    /// Whether a tag is registered.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    /// Number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every tag observed in the CMS must have a default renderer.
    const OBSERVED_TAGS: [&str; 16] = [
        "heroUtama",
        "heroUmum",
        "supportHeader",
        "whyItWorks",
        "storyVisionMission",
        "testimonial",
        "about",
        "blog",
        "requestDemo",
        "features",
        "pricing",
        "supportSection",
        "privacyPolicySection",
        "termsAndConditionsSection",
        "faqSection",
        "blogListSection",
    ];

    #[test]
    fn test_defaults_cover_all_observed_tags() {
        let registry = SectionRegistry::with_defaults();
        for tag in OBSERVED_TAGS {
            assert!(registry.contains(tag), "missing renderer for {tag}");
        }
        assert_eq!(registry.len(), OBSERVED_TAGS.len());
    }

    #[test]
    fn test_unknown_tag_is_absent() {
        let registry = SectionRegistry::with_defaults();
        assert!(registry.get("bogus").is_none());
    }

    #[test]
    fn test_register_adds_an_entry() {
        struct Noop;
        impl Renderable for Noop {
            fn render(&self, _: &beranda_content::Section, _: beranda_locale::Locale) -> String {
                String::new()
            }
        }

        let mut registry = SectionRegistry::empty();
        assert!(registry.is_empty());
        registry.register("custom", Box::new(Noop));
        assert!(registry.contains("custom"));
    }
}
