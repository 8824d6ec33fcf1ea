//! Content model and publish-state evaluation.
//!
//! This crate defines the CMS-owned record shapes ([`Page`], [`Section`]),
//! the publish attribute they share ([`PublishAttr`]) and the single
//! evaluator that turns it into a visibility decision, plus the
//! [`ContentSource`] trait that abstracts where records come from.
//!
//! # Publish attribute
//!
//! The CMS stores publication state as either a boolean ("published now,
//! yes/no") or an ISO-8601 date string ("published from this instant").
//! Both pages and sections carry the attribute, and both are evaluated by
//! the same code path: [`Publishable::is_published_at`] has exactly one
//! implementation, provided by the trait. Entity-specific publish logic is
//! deliberately impossible to introduce without changing this crate.
//!
//! # Content sources
//!
//! [`ContentSource`] is the CMS boundary. Composition code receives a
//! source as an explicit parameter rather than reaching for ambient state,
//! so the flow is testable against [`MemorySource`] (feature `mock`)
//! without a network.

mod model;
mod publish;
mod source;

#[cfg(any(test, feature = "mock"))]
mod memory;

pub use model::{Page, Section};
pub use publish::{PublishAttr, Publishable, evaluate};
pub use source::{ContentError, ContentErrorKind, ContentSource};

#[cfg(any(test, feature = "mock"))]
pub use memory::MemorySource;
