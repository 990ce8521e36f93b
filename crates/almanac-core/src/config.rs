use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DATE_FORMAT, ENV_PREFIX, GLOBAL_REPEAT_CAP};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub recurrence: RecurrenceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RecurrenceConfig {
    /// Absolute upper bound for every generated occurrence.
    pub global_repeat_cap: NaiveDate,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            global_repeat_cap: GLOBAL_REPEAT_CAP,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, the optional `almanac.toml` file and
    /// `ALMANAC__*` environment variables. Environment variables take
    /// precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// ## Summary
    /// Same layering as [`Settings::load`] with an explicit TOML file path.
    /// A missing file is skipped.
    ///
    /// ## Errors
    /// Returns an error if the file is unreadable or malformed, or if building
    /// or deserializing the configuration fails.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(
                config::File::from(path.as_ref())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an inline TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or holds values of
    /// the wrong shape.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default(
                "recurrence.global_repeat_cap",
                GLOBAL_REPEAT_CAP.format(DATE_FORMAT).to_string(),
            )?
            .set_default("logging.level", LoggingConfig::default().level)?)
    }

    /// ## Summary
    /// Rejects settings that deserialize but cannot be used.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an empty log level.
    pub fn validate(&self) -> CoreResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
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

    let settings = Settings::load()?;
    tracing::debug!(
        global_repeat_cap = %settings.recurrence.global_repeat_cap,
        level = %settings.logging.level,
        "Configuration loaded"
    );
    Ok(settings)
}
