//! Error types for CMS integration.

use beranda_content::{ContentError, ContentErrorKind};

/// Error from CMS API operations.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response payload could not be decoded.
    #[error("invalid response payload")]
    Decode(#[source] ureq::Error),
}

impl CmsError {
    /// Map to the semantic kind the composition core degrades on.
    pub(crate) fn content_kind(&self) -> ContentErrorKind {
        match self {
            Self::HttpRequest(ureq::Error::Timeout(_)) => ContentErrorKind::Timeout,
            Self::HttpRequest(_) => ContentErrorKind::Unavailable,
            Self::HttpResponse { status, .. } => match status {
                404 => ContentErrorKind::NotFound,
                408 | 504 => ContentErrorKind::Timeout,
                429 => ContentErrorKind::RateLimited,
                500..=599 => ContentErrorKind::Unavailable,
                _ => ContentErrorKind::Other,
            },
            Self::Decode(_) => ContentErrorKind::InvalidResponse,
        }
    }
}

impl From<CmsError> for ContentError {
    fn from(err: CmsError) -> Self {
        Self::new(err.content_kind())
            .with_backend("Cms")
            .with_source(err)
    }
}
