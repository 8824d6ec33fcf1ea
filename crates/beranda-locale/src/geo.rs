//! Geo signal derived from request network metadata.
//!
//! The upstream edge (CDN or reverse proxy) annotates requests with
//! `x-geo-*` headers. [`GeoSignal::resolve`] folds those into a structured
//! signal once per request. Resolution is deliberately total: the redirect
//! flow must always terminate, so every lookup failure degrades to a named
//! default instead of propagating an error.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Raw header values collected from an inbound request.
///
/// The server adapter fills this from whatever header scheme its edge
/// uses; all fields are optional.
#[derive(Clone, Debug, Default)]
pub struct GeoHeaders {
    /// ISO 3166-1 alpha-2 country code (`x-geo-country`).
    pub country: Option<String>,
    /// Country subdivision (`x-geo-region`).
    pub region: Option<String>,
    /// City name (`x-geo-city`).
    pub city: Option<String>,
    /// IANA timezone (`x-geo-timezone`).
    pub timezone: Option<String>,
    /// Latitude (`x-geo-latitude`).
    pub latitude: Option<String>,
    /// Longitude (`x-geo-longitude`).
    pub longitude: Option<String>,
    /// Forwarded client IP (`x-forwarded-for`, first hop).
    pub forwarded_for: Option<String>,
}

/// Structured location/language inference for one request.
///
/// Serialized camelCase because it is also the payload of the short-lived
/// `geoData` cookie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoSignal {
    /// Client IP, empty when unknown.
    pub ip: String,
    /// ISO country code.
    pub country_code: String,
    /// Human-readable country name.
    pub country_name: String,
    /// City, empty when unknown.
    pub city: String,
    /// Region/subdivision, empty when unknown.
    pub region: String,
    /// ISO 4217 currency code inferred from the country.
    pub currency_code: String,
    /// Language inferred from the country.
    pub language_code: Locale,
    /// IANA timezone.
    pub timezone: String,
    /// Latitude, if the edge supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    /// Longitude, if the edge supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
}

impl Default for GeoSignal {
    /// The fail-open fallback: `US` / `en` / `USD` / `UTC`.
    fn default() -> Self {
        Self {
            ip: String::new(),
            country_code: "US".to_owned(),
            country_name: "United States".to_owned(),
            city: String::new(),
            region: String::new(),
            currency_code: "USD".to_owned(),
            language_code: Locale::En,
            timezone: "UTC".to_owned(),
            latitude: None,
            longitude: None,
        }
    }
}

impl GeoSignal {
    /// Derive a signal from raw headers. Never fails; absent or
    /// unrecognized values fall back to the [`Default`] fields.
    #[must_use]
    pub fn resolve(headers: &GeoHeaders) -> Self {
        let defaults = Self::default();

        let country_code = headers
            .country
            .as_deref()
            .map(str::trim)
            .filter(|c| c.len() == 2 && c.bytes().all(|b| b.is_ascii_alphabetic()))
            .map_or(defaults.country_code, str::to_uppercase);

        Self {
            ip: headers
                .forwarded_for
                .as_deref()
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .unwrap_or_default()
                .to_owned(),
            country_name: country_name(&country_code).to_owned(),
            city: headers.city.clone().unwrap_or_default(),
            region: headers.region.clone().unwrap_or_default(),
            currency_code: currency_for(&country_code).to_owned(),
            language_code: language_for(&country_code),
            timezone: headers
                .timezone
                .clone()
                .filter(|tz| !tz.is_empty())
                .unwrap_or(defaults.timezone),
            latitude: headers.latitude.clone(),
            longitude: headers.longitude.clone(),
            country_code,
        }
    }
}

/// Language inferred from country: Indonesia reads Indonesian, everyone
/// else gets English.
fn language_for(country_code: &str) -> Locale {
    if country_code == "ID" {
        Locale::Id
    } else {
        Locale::En
    }
}

/// Currency inferred from country.
fn currency_for(country_code: &str) -> &'static str {
    match country_code {
        "ID" => "IDR",
        "SG" => "SGD",
        "MY" => "MYR",
        "AU" => "AUD",
        "GB" => "GBP",
        _ => "USD",
    }
}

/// Display name for the countries the site actually localizes around;
/// anything else keeps its code as the name.
fn country_name(country_code: &str) -> &str {
    match country_code {
        "ID" => "Indonesia",
        "US" => "United States",
        "SG" => "Singapore",
        "MY" => "Malaysia",
        "AU" => "Australia",
        "GB" => "United Kingdom",
        other => other,
    }
}
