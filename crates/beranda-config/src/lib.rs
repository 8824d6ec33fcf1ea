//! Configuration management for beranda.
//!
//! Parses `beranda.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `cms.base_url`
//! - `cms.token`

mod expand;

use std::path::{Path, PathBuf};

use beranda_locale::Locale;
use serde::Deserialize;

pub use expand::ExpandError;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "beranda.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override CMS base URL.
    pub cms_base_url: Option<String>,
    /// Override CMS token.
    pub cms_token: Option<String>,
    /// Override default locale.
    pub default_locale: Option<Locale>,
}

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the config file.
    #[error("failed to read {path}")]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// TOML parse error.
    #[error("invalid config file")]
    Parse(#[from] toml::de::Error),
    /// Environment variable expansion error.
    #[error("config expansion failed")]
    Expand(#[from] ExpandError),
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// CMS configuration.
    pub cms: CmsConfig,
    /// Site configuration.
    pub site: SiteConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// CMS configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// CMS base URL. Supports env expansion.
    pub base_url: String,
    /// Bearer token for the CMS API. Supports env expansion.
    pub token: Option<String>,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".to_owned(),
            token: None,
        }
    }
}

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Locale used when no other signal resolves one.
    pub default_locale: Locale,
}

impl Config {
    /// Load configuration.
    ///
    /// Uses `explicit` when given, otherwise searches for `beranda.toml`
    /// upward from the current directory. Missing file means defaults.
    /// CLI settings are applied last and win.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// when env expansion references an unset variable without a default.
    pub fn load(explicit: Option<&Path>, cli: &CliSettings) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => discover(),
        };

        let mut config = match &path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.clone(),
                    source,
                })?;
                toml::from_str(&raw)?
            }
            None => Self::default(),
        };
        config.config_path = path;

        config.cms.base_url = expand::expand(&config.cms.base_url)?;
        if let Some(token) = &config.cms.token {
            config.cms.token = Some(expand::expand(token)?);
        }

        config.apply_cli(cli);
        Ok(config)
    }

    /// Parse from a TOML string, without discovery or expansion.
    /// Used by tests and embedding callers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the TOML is invalid.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(host) = &cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(base_url) = &cli.cms_base_url {
            self.cms.base_url.clone_from(base_url);
        }
        if let Some(token) = &cli.cms_token {
            self.cms.token = Some(token.clone());
        }
        if let Some(locale) = cli.default_locale {
            self.site.default_locale = locale;
        }
    }
}

/// Search for `beranda.toml` upward from the current directory.
fn discover() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
