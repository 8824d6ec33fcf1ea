//! Locale and geo cookies.
//!
//! - `locale`: the visitor's resolved language. One-year max-age, path
//!   `/`, lax same-site, readable client-side so the frontend can show
//!   the active language without a round trip.
//! - `geoData`: JSON-serialized geo signal, seven-day max-age, http-only.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use beranda_locale::{GeoSignal, Locale};
use cookie::time::Duration;

pub(crate) const LOCALE_COOKIE: &str = "locale";
pub(crate) const GEO_COOKIE: &str = "geoData";

/// Read and validate the locale cookie. Unknown values are ignored.
pub(crate) fn locale_from(jar: &CookieJar) -> Option<Locale> {
    jar.get(LOCALE_COOKIE).and_then(|c| c.value().parse().ok())
}

/// Build the one-year locale cookie.
pub(crate) fn locale_cookie(locale: Locale) -> Cookie<'static> {
    Cookie::build((LOCALE_COOKIE, locale.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .build()
}

/// Build the seven-day geo cookie.
pub(crate) fn geo_cookie(signal: &GeoSignal) -> Cookie<'static> {
    let payload = serde_json::to_string(signal).unwrap_or_default();
    Cookie::build((GEO_COOKIE, payload))
        .path("/")
        .http_only(true)
        .max_age(Duration::days(7))
        .build()
}
