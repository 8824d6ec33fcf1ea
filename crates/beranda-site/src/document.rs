//! HTML document assembly.
//!
//! Wraps an ordered list of rendered section fragments in a full page
//! shell, and provides the localized terminal presentations (not found,
//! not yet available, empty content).

use beranda_locale::Locale;

use crate::compose::RenderPlan;

/// Escape text for safe interpolation into HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Assemble the full HTML document for a render plan.
#[must_use]
pub fn render_document(plan: &RenderPlan) -> String {
    let mut body = String::new();
    for section in &plan.sections {
        body.push_str(&format!(
            "<div data-section-id=\"{}\" data-section-key=\"{}\">{}</div>",
            escape_html(&section.id),
            section.key,
            section.html,
        ));
    }
    shell(plan.locale, &escape_html(&plan.page_name), &body)
}

/// Localized 404 page.
#[must_use]
pub fn not_found_page(locale: Locale) -> String {
    let (title, message) = match locale {
        Locale::En => ("Page not found", "The page you are looking for does not exist."),
        Locale::Id => ("Halaman tidak ditemukan", "Halaman yang Anda cari tidak ada."),
    };
    terminal_page(locale, "not-found", title, message)
}

/// Localized "not yet available" page, distinct from not-found.
#[must_use]
pub fn unpublished_page(locale: Locale) -> String {
    let (title, message) = match locale {
        Locale::En => ("Not yet available", "This page is not published yet. Check back soon."),
        Locale::Id => ("Belum tersedia", "Halaman ini belum diterbitkan. Silakan kembali lagi nanti."),
    };
    terminal_page(locale, "unpublished", title, message)
}

/// Localized placeholder for a published page with no visible sections.
#[must_use]
pub fn empty_content_page(locale: Locale) -> String {
    let (title, message) = match locale {
        Locale::En => ("Nothing here yet", "This page has no content to show right now."),
        Locale::Id => ("Belum ada konten", "Halaman ini belum memiliki konten untuk ditampilkan."),
    };
    terminal_page(locale, "empty-content", title, message)
}

fn terminal_page(locale: Locale, class: &str, title: &str, message: &str) -> String {
    let body = format!("<section class=\"{class}\"><h1>{title}</h1><p>{message}</p></section>");
    shell(locale, title, &body)
}

fn shell(locale: Locale, title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\
         <html lang=\"{}\">\
         <head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title></head>\
         <body><main>{body}</main></body>\
         </html>",
        locale.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html_covers_the_special_characters() {
        assert_eq!(
            escape_html("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_terminal_pages_are_localized_and_distinct() {
        let not_found = not_found_page(Locale::Id);
        let unpublished = unpublished_page(Locale::Id);

        assert!(not_found.contains("lang=\"id\""));
        assert!(not_found.contains("Halaman tidak ditemukan"));
        assert!(unpublished.contains("Belum tersedia"));
        assert_ne!(not_found, unpublished);
    }

    #[test]
    fn test_empty_content_page_renders() {
        let page = empty_content_page(Locale::En);
        assert!(page.contains("Nothing here yet"));
        assert!(page.contains("lang=\"en\""));
    }
}
