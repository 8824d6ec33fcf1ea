//! Built-in section renderers.
//!
//! One renderer per section type tag observed in the CMS. Renderers that
//! share a shape (hero variants, card grids, prose pages) share a struct
//! and differ only in registration.
//!
//! Props are the CMS-supplied presentational payload. Scalar text fields
//! are HTML-escaped; the `body` field of prose sections is CMS-authored
//! rich text and is inlined as-is (the CMS sanitizes it upstream).

use beranda_content::Section;
use beranda_locale::Locale;
use serde_json::Value;

use crate::document::escape_html;
use crate::registry::{Renderable, SectionRegistry};

/// Register every built-in section type.
pub(crate) fn register_defaults(registry: &mut SectionRegistry) {
    registry.register("heroUtama", Box::new(Hero { primary: true }));
    registry.register("heroUmum", Box::new(Hero { primary: false }));
    registry.register("supportHeader", Box::new(Banner { class: "support-header" }));
    registry.register("whyItWorks", Box::new(CardGrid { class: "why-it-works" }));
    registry.register(
        "storyVisionMission",
        Box::new(CardGrid { class: "story-vision-mission" }),
    );
    registry.register("testimonial", Box::new(Testimonials));
    registry.register("about", Box::new(Prose { class: "about" }));
    registry.register("blog", Box::new(BlogTeaser));
    registry.register("requestDemo", Box::new(RequestDemo));
    registry.register("features", Box::new(CardGrid { class: "features" }));
    registry.register("pricing", Box::new(Pricing));
    registry.register("supportSection", Box::new(Prose { class: "support" }));
    registry.register("privacyPolicySection", Box::new(Prose { class: "privacy-policy" }));
    registry.register(
        "termsAndConditionsSection",
        Box::new(Prose { class: "terms-and-conditions" }),
    );
    registry.register("faqSection", Box::new(Faq));
    registry.register("blogListSection", Box::new(BlogList));
}

/// Escaped scalar text prop, empty when absent.
fn text(props: &Value, key: &str) -> String {
    props
        .get(key)
        .and_then(Value::as_str)
        .map(escape_html)
        .unwrap_or_default()
}

/// Raw (trusted) rich-text prop, empty when absent.
fn rich_text(props: &Value, key: &str) -> String {
    props
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Array prop, empty when absent.
fn items<'a>(props: &'a Value, key: &str) -> &'a [Value] {
    props
        .get(key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Hero banner; the `heroUtama` variant is the page-opening hero with a
/// top-level heading, `heroUmum` the secondary one.
struct Hero {
    primary: bool,
}

impl Renderable for Hero {
    fn render(&self, section: &Section, _locale: Locale) -> String {
        let class = if self.primary { "hero hero--primary" } else { "hero" };
        let title = text(&section.props, "title");
        let subtitle = text(&section.props, "subtitle");
        let heading = if self.primary {
            format!("<h1>{title}</h1>")
        } else {
            format!("<h2>{title}</h2>")
        };

        let mut html = format!("<section class=\"{class}\">{heading}");
        if !subtitle.is_empty() {
            html.push_str(&format!("<p class=\"hero__subtitle\">{subtitle}</p>"));
        }
        let cta = text(&section.props, "ctaLabel");
        let cta_href = text(&section.props, "ctaHref");
        if !cta.is_empty() {
            html.push_str(&format!("<a class=\"hero__cta\" href=\"{cta_href}\">{cta}</a>"));
        }
        html.push_str("</section>");
        html
    }
}

/// Simple title/subtitle banner.
struct Banner {
    class: &'static str,
}

impl Renderable for Banner {
    fn render(&self, section: &Section, _locale: Locale) -> String {
        let title = text(&section.props, "title");
        let subtitle = text(&section.props, "subtitle");
        format!(
            "<header class=\"{}\"><h2>{title}</h2><p>{subtitle}</p></header>",
            self.class
        )
    }
}

/// Heading plus a grid of titled cards (`items: [{title, body}]`).
struct CardGrid {
    class: &'static str,
}

impl Renderable for CardGrid {
    fn render(&self, section: &Section, _locale: Locale) -> String {
        let title = text(&section.props, "title");
        let mut html = format!("<section class=\"{}\"><h2>{title}</h2><ul>", self.class);
        for item in items(&section.props, "items") {
            html.push_str(&format!(
                "<li><h3>{}</h3><p>{}</p></li>",
                text(item, "title"),
                text(item, "body"),
            ));
        }
        html.push_str("</ul></section>");
        html
    }
}

/// Customer quotes (`items: [{quote, author}]`).
struct Testimonials;

impl Renderable for Testimonials {
    fn render(&self, section: &Section, _locale: Locale) -> String {
        let mut html = String::from("<section class=\"testimonials\">");
        for item in items(&section.props, "items") {
            html.push_str(&format!(
                "<blockquote><p>{}</p><cite>{}</cite></blockquote>",
                text(item, "quote"),
                text(item, "author"),
            ));
        }
        html.push_str("</section>");
        html
    }
}

/// Long-form prose page body (about, support, legal pages).
struct Prose {
    class: &'static str,
}

impl Renderable for Prose {
    fn render(&self, section: &Section, _locale: Locale) -> String {
        let title = text(&section.props, "title");
        let body = rich_text(&section.props, "body");
        format!(
            "<article class=\"{}\"><h2>{title}</h2><div class=\"prose\">{body}</div></article>",
            self.class
        )
    }
}

/// Blog teaser on composed pages, linking into the blog.
struct BlogTeaser;

impl Renderable for BlogTeaser {
    fn render(&self, section: &Section, locale: Locale) -> String {
        let title = text(&section.props, "title");
        let excerpt = text(&section.props, "excerpt");
        let label = match locale {
            Locale::En => "Read our blog",
            Locale::Id => "Kunjungi blog",
        };
        format!(
            "<section class=\"blog-teaser\"><h2>{title}</h2><p>{excerpt}</p>\
             <a href=\"{}/blog\">{label}</a></section>",
            locale.path_prefix()
        )
    }
}

/// Demo request call-to-action.
struct RequestDemo;

impl Renderable for RequestDemo {
    fn render(&self, section: &Section, locale: Locale) -> String {
        let title = text(&section.props, "title");
        let label = match locale {
            Locale::En => "Request a demo",
            Locale::Id => "Minta demo",
        };
        format!(
            "<section class=\"request-demo\"><h2>{title}</h2>\
             <a class=\"request-demo__cta\" href=\"{}/request-demo\">{label}</a></section>",
            locale.path_prefix()
        )
    }
}

/// Pricing plans (`items: [{name, price, description}]`).
struct Pricing;

impl Renderable for Pricing {
    fn render(&self, section: &Section, _locale: Locale) -> String {
        let title = text(&section.props, "title");
        let mut html = format!("<section class=\"pricing\"><h2>{title}</h2><ul>");
        for item in items(&section.props, "items") {
            html.push_str(&format!(
                "<li><h3>{}</h3><strong>{}</strong><p>{}</p></li>",
                text(item, "name"),
                text(item, "price"),
                text(item, "description"),
            ));
        }
        html.push_str("</ul></section>");
        html
    }
}

/// FAQ accordion (`items: [{question, answer}]`).
struct Faq;

impl Renderable for Faq {
    fn render(&self, section: &Section, _locale: Locale) -> String {
        let title = text(&section.props, "title");
        let mut html = format!("<section class=\"faq\"><h2>{title}</h2>");
        for item in items(&section.props, "items") {
            html.push_str(&format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                text(item, "question"),
                text(item, "answer"),
            ));
        }
        html.push_str("</section>");
        html
    }
}

/// Blog index (`items: [{title, slug, excerpt}]`).
struct BlogList;

impl Renderable for BlogList {
    fn render(&self, section: &Section, locale: Locale) -> String {
        let label = match locale {
            Locale::En => "Read more",
            Locale::Id => "Baca selengkapnya",
        };
        let mut html = String::from("<section class=\"blog-list\"><ul>");
        for item in items(&section.props, "items") {
            html.push_str(&format!(
                "<li><h3>{}</h3><p>{}</p><a href=\"{}{}\">{label}</a></li>",
                text(item, "title"),
                text(item, "excerpt"),
                locale.path_prefix(),
                text(item, "slug"),
            ));
        }
        html.push_str("</ul></section>");
        html
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn section(tag: &str, props: Value) -> Section {
        Section {
            id: "s1".to_owned(),
            type_tag: tag.to_owned(),
            name: String::new(),
            published: None,
            props,
        }
    }

    #[test]
    fn test_primary_hero_uses_top_level_heading() {
        let html = Hero { primary: true }.render(
            &section("heroUtama", serde_json::json!({ "title": "Welcome" })),
            Locale::En,
        );
        assert!(html.contains("<h1>Welcome</h1>"));
        assert!(html.contains("hero--primary"));

        let html = Hero { primary: false }.render(
            &section("heroUmum", serde_json::json!({ "title": "Welcome" })),
            Locale::En,
        );
        assert!(html.contains("<h2>Welcome</h2>"));
    }

    #[test]
    fn test_scalar_props_are_escaped() {
        let html = Hero { primary: true }.render(
            &section("heroUtama", serde_json::json!({ "title": "<script>alert(1)</script>" })),
            Locale::En,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_card_grid_renders_items_in_order() {
        let html = CardGrid { class: "features" }.render(
            &section(
                "features",
                serde_json::json!({
                    "title": "Features",
                    "items": [
                        { "title": "First", "body": "a" },
                        { "title": "Second", "body": "b" }
                    ]
                }),
            ),
            Locale::En,
        );
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_request_demo_label_is_localized() {
        let en = RequestDemo.render(&section("requestDemo", Value::Null), Locale::En);
        let id = RequestDemo.render(&section("requestDemo", Value::Null), Locale::Id);
        assert!(en.contains("Request a demo"));
        assert!(id.contains("Minta demo"));
        assert!(id.contains("/id/request-demo"));
    }

    #[test]
    fn test_missing_props_render_empty_not_panic() {
        let html = Faq.render(&section("faqSection", Value::Null), Locale::En);
        assert_eq!(html, "<section class=\"faq\"><h2></h2></section>");
    }

    #[test]
    fn test_blog_list_links_carry_locale_prefix() {
        let html = BlogList.render(
            &section(
                "blogListSection",
                serde_json::json!({ "items": [{ "title": "Post", "slug": "/blog/post" }] }),
            ),
            Locale::Id,
        );
        assert!(html.contains("href=\"/id/blog/post\""));
        assert!(html.contains("Baca selengkapnya"));
    }
}
