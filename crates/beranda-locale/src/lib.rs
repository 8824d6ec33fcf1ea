//! Locale resolution and geo detection.
//!
//! Three leaf concerns of the request flow live here, framework-free so
//! the server crate stays a thin adapter:
//!
//! - [`Locale`] — the two supported rendering languages.
//! - [`GeoSignal`] — location/language inference from edge-supplied
//!   headers. Resolution is total: every missing or malformed header
//!   degrades to a named default, never an error.
//! - [`resolve_route`] / [`root_redirect`] — the per-request redirect
//!   decision chain: path prefix, then locale cookie, then geo signal,
//!   then the static default.

mod geo;
mod locale;
mod route;

pub use geo::{GeoHeaders, GeoSignal};
pub use locale::{Locale, ParseLocaleError};
pub use route::{RouteDecision, resolve_route, root_redirect, strip_locale_prefix};
