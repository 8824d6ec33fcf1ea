//! Section dispatch and page composition.
//!
//! The center of the engine: given a canonical slug and a locale, fetch
//! the page from an injected [`ContentSource`], gate it on publish state,
//! dispatch its sections through the tag → renderer registry and produce
//! an ordered [`RenderPlan`].
//!
//! # Dispatch model
//!
//! Each CMS section declares a string type tag. [`SectionRegistry`] maps
//! tags to [`Renderable`] capabilities; adding a section type means
//! registering one entry, never branching existing code. Unknown tags are
//! a warning, not a failure: the section is omitted and composition
//! continues.
//!
//! [`ContentSource`]: beranda_content::ContentSource

mod compose;
mod document;
mod registry;
mod renderers;

pub use compose::{ComposeError, RenderPlan, RenderedSection, Site};
pub use document::{empty_content_page, escape_html, not_found_page, render_document, unpublished_page};
pub use registry::{Renderable, SectionRegistry};
