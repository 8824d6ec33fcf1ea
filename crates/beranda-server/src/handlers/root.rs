//! Root entry point.
//!
//! `/` is the short path for first-time visitors: compute the geo signal
//! directly and forward to the localized entry point, bypassing the
//! locale cookie. The signal is persisted in the `geoData` cookie on the
//! way out.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::CookieJar;
use beranda_locale::root_redirect;
use tracing::debug;

use crate::state::AppState;
use crate::{cookies, geo};

/// Handle GET /.
pub(crate) async fn redirect_root(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> impl IntoResponse {
    let signal = geo::signal_from(&headers, state.default_locale);
    let target = root_redirect(&signal);
    debug!(country = %signal.country_code, target, "root geo redirect");

    let jar = jar.add(cookies::geo_cookie(&signal));
    (jar, Redirect::temporary(target))
}
