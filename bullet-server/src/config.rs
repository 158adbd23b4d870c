//! Server configuration.
//!
//! Values come from an optional `bullet.toml` in the working directory,
//! overridden by environment variables (`API_KEY`, `DOMAIN`, ...). A `.env`
//! file is loaded into the environment first.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bullet_core::{CalendarOptions, DEFAULT_CALENDAR_NAME};
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

static CONFIG_FILE: &str = "bullet";
static DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    /// Shared secret expected in the `X-API-Key` header of `POST /update`.
    pub api_key: String,

    /// Domain for synthetic attendee addresses.
    pub domain: String,

    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    /// Where the generated calendar file lives.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::default());

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: ServerConfig = builder
            .build()
            .context("Could not read configuration")?
            .try_deserialize()
            .context("Invalid configuration (API_KEY and DOMAIN are required)")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("API_KEY must not be empty");
        }
        self.calendar_options()?;
        self.socket_addr()?;
        Ok(())
    }

    pub fn calendar_options(&self) -> Result<CalendarOptions> {
        CalendarOptions::new(&self.calendar_name, &self.domain).context("Invalid calendar settings")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<ServerConfig> {
        ServerConfig::from_builder(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    #[test]
    fn defaults_apply() {
        let config = from_toml("api_key = \"secret\"\ndomain = \"example.org\"").unwrap();

        assert_eq!(config.calendar_name, DEFAULT_CALENDAR_NAME);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn overrides_are_read() {
        let config = from_toml(
            "api_key = \"secret\"\n\
             domain = \"example.org\"\n\
             calendar_name = \"Crew\"\n\
             output_dir = \"/srv/calendars\"\n\
             bind_addr = \"0.0.0.0:9000\"",
        )
        .unwrap();

        let options = config.calendar_options().unwrap();
        assert_eq!(options.file_name(), "Crew.ics");
        assert_eq!(config.output_dir, PathBuf::from("/srv/calendars"));
        assert_eq!(config.socket_addr().unwrap().port(), 9000);
    }

    #[test]
    fn api_key_and_domain_are_required() {
        assert!(from_toml("domain = \"example.org\"").is_err());
        assert!(from_toml("api_key = \"secret\"").is_err());
        assert!(from_toml("api_key = \"\"\ndomain = \"example.org\"").is_err());
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let err = from_toml("api_key = \"k\"\ndomain = \"d\"\nbind_addr = \"nowhere\"");
        assert!(err.is_err());
    }
}
