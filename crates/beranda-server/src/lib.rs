//! HTTP server for the beranda marketing site engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Server-rendered pages composed from CMS sections
//! - Locale-prefixed routing (`/en/...`, `/id/...`) with geo-based
//!   redirects for unprefixed paths
//! - A root entry point that forwards first-time visitors by geo signal
//!
//! # Request flow
//!
//! ```text
//! Browser ──HTTP──► axum router (beranda-server)
//!                        │
//!                        ├─► /            geo short path ──► 307 /en | /id
//!                        │
//!                        └─► /{*path}     locale policy (path → cookie → geo)
//!                                │
//!                                ├─► redirect to prefixed path, or
//!                                └─► Site::compose ──► HTML document
//! ```
//!
//! Handlers are stateless per request: locale, geo signal and render plan
//! are recomputed on every call, and the only shared state is the
//! [`Site`] behind an `Arc`.

mod app;
mod cookies;
mod geo;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use beranda_cms::CmsClient;
use beranda_locale::Locale;
use beranda_site::Site;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// CMS base URL.
    pub cms_base_url: String,
    /// CMS bearer token (`None` for unauthenticated CMS instances).
    pub cms_token: Option<String>,
    /// Locale used when no request signal resolves one.
    pub default_locale: Locale,
    /// Application version (for ETag invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            cms_base_url: "http://localhost:1337".to_owned(),
            cms_token: None,
            default_locale: Locale::En,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source = Arc::new(CmsClient::new(
        &config.cms_base_url,
        config.cms_token.as_deref(),
    ));
    let site = Arc::new(Site::new(source));

    let state = Arc::new(AppState {
        site,
        default_locale: config.default_locale,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from beranda config.
#[must_use]
pub fn server_config_from_config(config: &beranda_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        cms_base_url: config.cms.base_url.clone(),
        cms_token: config.cms.token.clone(),
        default_locale: config.site.default_locale,
        version,
    }
}
