use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};


/// Prefix of environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "DAVBIND";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub xml: XmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XmlConfig {
    /// Largest request body accepted, in bytes.
    pub max_body_bytes: usize,
    /// Indentation width for serialized XML; `0` writes compact output.
    pub indent: usize,
}

impl XmlConfig {
    /// ## Summary
    /// Returns whether a body of `len` bytes may be parsed.
    #[must_use]
    pub fn accepts_body_len(&self, len: usize) -> bool {
        len <= self.max_body_bytes
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from an optional `davbind.toml` and `DAVBIND_`-prefixed
    /// environment variables. Environment variables take precedence over file values.
    ///
    /// Nested keys use `__` between sections, so `DAVBIND_XML__MAX_BODY_BYTES`
    /// sets `xml.max_body_bytes`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("xml.max_body_bytes", 65_536)?
            .set_default("xml.indent", 2)?
            // TOML file
            .add_source(config::File::with_name("davbind.toml").required(false))
            // Env, overrides the file
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if `xml.max_body_bytes` is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.xml.max_body_bytes == 0 {
            return Err(CoreError::ConfigError(
                "xml.max_body_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
