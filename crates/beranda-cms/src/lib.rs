//! HTTP client for the headless CMS.
//!
//! Implements [`ContentSource`] over the CMS REST API with bearer-token
//! authentication. Every call is always-fresh: no client-side caching,
//! the CMS is consulted per request.
//!
//! Failure policy follows the composition core's taxonomy: a 404 is a
//! normal `Ok(None)`, transport and server failures become a
//! [`ContentError`] with a semantic kind and are degraded (not surfaced)
//! by the caller.

mod client;
mod error;
mod types;

pub use client::CmsClient;
pub use error::CmsError;
