//! Locale resolution policy for inbound paths.
//!
//! Resolve chain, terminal on first match:
//! path prefix -> locale cookie -> geo signal -> default `en`.
//!
//! Only the path-prefix state resolves without a redirect; the later
//! states redirect to the prefixed form of the same path so the URL always
//! ends up carrying its locale.

use crate::geo::GeoSignal;
use crate::locale::Locale;

/// Outcome of locale resolution for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDecision {
    /// Locale the request resolves to.
    pub locale: Locale,
    /// Redirect target, when the path must be rewritten to carry the
    /// locale prefix. `None` means render in place.
    pub redirect_to: Option<String>,
}

impl RouteDecision {
    fn render(locale: Locale) -> Self {
        Self {
            locale,
            redirect_to: None,
        }
    }

    fn redirect(locale: Locale, path: &str) -> Self {
        Self {
            locale,
            redirect_to: Some(format!("{}{path}", locale.path_prefix())),
        }
    }
}

/// Split a locale prefix off a path.
///
/// `/en/about` → `(Some(En), "/about")`, bare `/id` → `(Some(Id), "/")`.
/// A prefix only counts when followed by a segment boundary, so `/enx`
/// stays unprefixed.
#[must_use]
pub fn strip_locale_prefix(path: &str) -> (Option<Locale>, &str) {
    for locale in Locale::ALL {
        let prefix = locale.path_prefix();
        if let Some(rest) = path.strip_prefix(prefix) {
            if rest.is_empty() {
                return (Some(locale), "/");
            }
            if rest.starts_with('/') {
                return (Some(locale), rest);
            }
        }
    }
    (None, path)
}

/// Resolve the locale for a non-root path.
///
/// The geo signal is already resolved (and therefore total); the static
/// default `en` is reached through [`GeoSignal::default`] when no network
/// metadata was available.
#[must_use]
pub fn resolve_route(path: &str, cookie_locale: Option<Locale>, geo: &GeoSignal) -> RouteDecision {
    let (path_locale, _) = strip_locale_prefix(path);
    if let Some(locale) = path_locale {
        return RouteDecision::render(locale);
    }

    if let Some(locale) = cookie_locale {
        return RouteDecision::redirect(locale, path);
    }

    RouteDecision::redirect(geo.language_code, path)
}

/// The `/` short path for first-time visitors: redirect straight off the
/// geo signal, bypassing the cookie.
#[must_use]
pub fn root_redirect(geo: &GeoSignal) -> &'static str {
    geo.language_code.path_prefix()
}
