//! Geo header extraction.
//!
//! The edge in front of the server annotates requests with `x-geo-*`
//! headers; this module lifts them into a [`GeoSignal`]. Absent or
//! unreadable headers degrade to defaults inside the locale crate, so
//! signal derivation can never fail a request.

use axum::http::HeaderMap;
use beranda_locale::{GeoHeaders, GeoSignal, Locale};

const GEO_COUNTRY: &str = "x-geo-country";
const GEO_REGION: &str = "x-geo-region";
const GEO_CITY: &str = "x-geo-city";
const GEO_TIMEZONE: &str = "x-geo-timezone";
const GEO_LATITUDE: &str = "x-geo-latitude";
const GEO_LONGITUDE: &str = "x-geo-longitude";
const FORWARDED_FOR: &str = "x-forwarded-for";

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Derive the geo signal for a request.
///
/// When the edge supplied no country at all, the language falls back to
/// the configured default locale instead of the crate-level default.
pub(crate) fn signal_from(headers: &HeaderMap, default_locale: Locale) -> GeoSignal {
    let raw = GeoHeaders {
        country: header(headers, GEO_COUNTRY),
        region: header(headers, GEO_REGION),
        city: header(headers, GEO_CITY),
        timezone: header(headers, GEO_TIMEZONE),
        latitude: header(headers, GEO_LATITUDE),
        longitude: header(headers, GEO_LONGITUDE),
        forwarded_for: header(headers, FORWARDED_FOR),
    };
    let had_country = raw.country.is_some();

    let mut signal = GeoSignal::resolve(&raw);
    if !had_country {
        signal.language_code = default_locale;
    }
    signal
}
