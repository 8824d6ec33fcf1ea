//! Supported rendering locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Resolved rendering language for a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (static default).
    #[default]
    En,
    /// Indonesian.
    Id,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 2] = [Self::En, Self::Id];

    /// Lowercase language code (`en` / `id`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }

    /// URL path prefix (`/en` / `/id`).
    #[must_use]
    pub fn path_prefix(self) -> &'static str {
        match self {
            Self::En => "/en",
            Self::Id => "/id",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocaleError(String);

impl fmt::Display for ParseLocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale: {}", self.0)
    }
}

impl std::error::Error for ParseLocaleError {}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "id" => Ok(Self::Id),
            other => Err(ParseLocaleError(other.to_owned())),
        }
    }
}
