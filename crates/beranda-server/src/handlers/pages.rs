//! Page endpoint.
//!
//! Resolves the locale for the requested path, redirecting unprefixed
//! paths to their localized form, then composes the page and returns the
//! rendered HTML document.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use beranda_locale::{Locale, resolve_route, strip_locale_prefix};
use beranda_site::{ComposeError, empty_content_page, not_found_page, unpublished_page};
use md5::{Digest, Md5};

use crate::state::AppState;
use crate::{cookies, geo};

/// Handle GET /{*path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    // Wildcard captures come without the leading slash.
    let path = format!("/{path}");
    let cookie_locale = cookies::locale_from(&jar);
    let (path_locale, slug) = strip_locale_prefix(&path);

    let Some(locale) = path_locale else {
        return rewrite_to_locale(&state, jar, &headers, &path, cookie_locale);
    };

    // Cross-check observed only on the Indonesian route: an explicit
    // English cookie bounces /id/... back to the unprefixed path, which
    // then re-resolves from the cookie. Bare /id cannot go through /: the
    // root short path ignores the cookie and would geo-redirect an
    // Indonesian visitor straight back, so it lands on /en directly.
    if locale == Locale::Id && cookie_locale == Some(Locale::En) {
        let target = if slug == "/" {
            Locale::En.path_prefix()
        } else {
            slug
        };
        return Redirect::temporary(target).into_response();
    }

    match state.site.compose(slug, locale) {
        Ok(plan) if plan.sections.is_empty() => {
            Html(empty_content_page(locale)).into_response()
        }
        Ok(plan) => {
            let html = beranda_site::render_document(&plan);
            let etag = compute_etag(&state.version, &html);

            if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
                && if_none_match.as_bytes() == etag.as_bytes()
            {
                return StatusCode::NOT_MODIFIED.into_response();
            }

            (
                [
                    (header::ETAG, etag),
                    (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
                ],
                Html(html),
            )
                .into_response()
        }
        Err(ComposeError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Html(not_found_page(locale))).into_response()
        }
        Err(ComposeError::Unpublished(_)) => Html(unpublished_page(locale)).into_response(),
    }
}

/// Redirect an unprefixed path to its localized form, persisting the
/// decision in cookies. Cookie wins over geo; geo is only consulted (and
/// its cookie only written) when no valid locale cookie exists.
fn rewrite_to_locale(
    state: &AppState,
    jar: CookieJar,
    headers: &HeaderMap,
    path: &str,
    cookie_locale: Option<Locale>,
) -> Response {
    let signal = geo::signal_from(headers, state.default_locale);
    let decision = resolve_route(path, cookie_locale, &signal);

    let mut jar = jar.add(cookies::locale_cookie(decision.locale));
    if cookie_locale.is_none() {
        jar = jar.add(cookies::geo_cookie(&signal));
    }

    // resolve_route always redirects for unprefixed paths
    let target = decision
        .redirect_to
        .unwrap_or_else(|| format!("{}{path}", decision.locale.path_prefix()));
    (jar, Redirect::temporary(&target)).into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 truncated to 64 bits (16 hex chars) - sufficient for cache
/// invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
