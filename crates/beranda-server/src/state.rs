//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use beranda_locale::Locale;
use beranda_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page composition over the injected content source.
    pub(crate) site: Arc<Site>,
    /// Configured fallback locale for the geo chain.
    pub(crate) default_locale: Locale,
    /// Application version for ETag invalidation.
    pub(crate) version: String,
}
