//! Publish attribute and its evaluator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Publication state as stored by the CMS.
///
/// The CMS field is either a plain boolean or a date string, so this is an
/// untagged union at the ingestion boundary. Evaluation collapses both
/// arms to a single boolean via [`evaluate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublishAttr {
    /// Explicit on/off flag.
    Flag(bool),
    /// Scheduled publication instant (ISO-8601 date or datetime).
    ///
    /// Kept as the raw string; parsing happens at evaluation time so a
    /// malformed value degrades that one entity instead of failing the
    /// whole payload deserialization.
    At(String),
}

/// Evaluate a publish attribute against `now`.
///
/// - absent attribute → `false` (fail closed)
/// - `Flag(b)` → `b`
/// - `At(s)` → `true` iff the parsed instant is at or before `now`;
///   an unparseable string is treated as unpublished and logged
pub fn evaluate(attr: Option<&PublishAttr>, now: DateTime<Utc>) -> bool {
    match attr {
        None => false,
        Some(PublishAttr::Flag(flag)) => *flag,
        Some(PublishAttr::At(raw)) => match parse_instant(raw) {
            Some(at) => at <= now,
            None => {
                tracing::warn!(value = %raw, "unparseable publish date, treating as unpublished");
                false
            }
        },
    }
}

/// Parse an ISO-8601 datetime or bare date (midnight UTC) string.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// An entity carrying a publish attribute.
///
/// The evaluation methods are provided, not required: every implementor
/// shares the one evaluator body in [`evaluate`].
pub trait Publishable {
    /// The entity's publish attribute, if the CMS set one.
    fn publish_attr(&self) -> Option<&PublishAttr>;

    /// Visibility decision at a given instant.
    fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        evaluate(self.publish_attr(), now)
    }

    /// Visibility decision at the current instant.
    fn is_published(&self) -> bool {
        self.is_published_at(Utc::now())
    }
}
