//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/stowage/stowage.toml`
//! 3. Environment variables: `STOWAGE_*` prefix

use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Parameters of the demo ship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShipConfig {
    /// Maximum speed in knots
    pub max_speed_knots: f64,
    /// Maximum number of containers on board
    pub max_container_count: usize,
    /// Maximum total weight in tons
    pub max_total_weight_tons: f64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            max_speed_knots: 20.0,
            max_container_count: 10,
            max_total_weight_tons: 300.0,
        }
    }
}

/// Unified configuration for stowage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Prefix for issued container serial numbers (default: "KON-C")
    pub serial_prefix: String,
    /// Demo ship parameters
    pub ship: ShipConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            serial_prefix: "KON-C".to_string(),
            ship: ShipConfig::default(),
        }
    }
}

/// Get the XDG config directory for stowage.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "stowage").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("stowage.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/stowage/stowage.toml`
    /// 3. Environment variables: `STOWAGE_*` prefix (e.g.
    ///    `STOWAGE_SHIP__MAX_CONTAINER_COUNT=5`)
    pub fn load() -> Result<Self, ApplicationError> {
        let mut builder = Self::builder_with_defaults()?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(env_source());

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Load settings from an explicit TOML file, bypassing the global lookup.
    ///
    /// Environment variables still apply on top.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        let builder = Self::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(env_source());

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    fn builder_with_defaults(
    ) -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ApplicationError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("serial_prefix", defaults.serial_prefix.clone())
            .map_err(config_err)?
            .set_default("ship.max_speed_knots", defaults.ship.max_speed_knots)
            .map_err(config_err)?
            .set_default(
                "ship.max_container_count",
                defaults.ship.max_container_count as i64,
            )
            .map_err(config_err)?
            .set_default(
                "ship.max_total_weight_tons",
                defaults.ship.max_total_weight_tons,
            )
            .map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# stowage configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/stowage/stowage.toml
#   Env:    STOWAGE_* environment variables (separator "__", e.g.
#           STOWAGE_SHIP__MAX_CONTAINER_COUNT=5)

# Prefix for issued container serial numbers
# serial_prefix = "KON-C"

[ship]
# Maximum speed in knots
# max_speed_knots = 20.0

# Maximum number of containers on board
# max_container_count = 10

# Maximum total weight in tons
# max_total_weight_tons = 300.0
"#
        .to_string()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("STOWAGE")
        .separator("__")
        .try_parsing(true)
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_defaulting_then_demo_ship_parameters_hold() {
        let settings = Settings::default();
        assert_eq!(settings.serial_prefix, "KON-C");
        assert_eq!(settings.ship.max_speed_knots, 20.0);
        assert_eq!(settings.ship.max_container_count, 10);
        assert_eq!(settings.ship.max_total_weight_tons, 300.0);
    }

    #[test]
    fn given_template_when_parsing_then_yields_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template()).expect("template parses");
        assert_eq!(parsed, Settings::default());
    }
}
