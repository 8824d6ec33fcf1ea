//! Middleware layers.

pub(crate) mod security;
