//! `beranda serve` command implementation.

use std::path::PathBuf;

use beranda_config::{CliSettings, Config};
use beranda_locale::Locale;
use beranda_server::{run_server, server_config_from_config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover beranda.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// CMS base URL (overrides config).
    #[arg(long, env = "BERANDA_CMS_URL")]
    cms_url: Option<String>,

    /// CMS bearer token (overrides config).
    #[arg(long, env = "BERANDA_CMS_TOKEN", hide_env_values = true)]
    cms_token: Option<String>,

    /// Default locale when no request signal resolves one (overrides config).
    #[arg(long)]
    default_locale: Option<Locale>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            cms_base_url: self.cms_url,
            cms_token: self.cms_token,
            default_locale: self.default_locale,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), &cli_settings)?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("CMS: {}", config.cms.base_url));
        output.info(&format!("Default locale: {}", config.site.default_locale));

        // Build server config and run
        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
