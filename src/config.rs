//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `PATTERNS_*` prefix
//! 3. Command line flags (applied by the CLI layer)

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, Map};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::Theme;

const ENV_PREFIX: &str = "PATTERNS";

/// Largest accepted root depth for the indent rendering.
pub const MAX_START_DEPTH: usize = 256;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// How the composite demo draws its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Depth-prefixed lines (`-Root`, `---child`)
    Indent,
    /// Box-drawing tree with sizes
    Tree,
}

/// Which factions the factory demo spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSelection {
    Fire,
    Ice,
    All,
}

impl ThemeSelection {
    pub fn themes(&self) -> Vec<Theme> {
        match self {
            ThemeSelection::Fire => vec![Theme::Fire],
            ThemeSelection::Ice => vec![Theme::Ice],
            ThemeSelection::All => Theme::ALL.to_vec(),
        }
    }
}

/// Effective settings for the demos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Depth of the root line in the indent rendering
    pub start_depth: usize,
    pub style: RenderStyle,
    pub theme: ThemeSelection,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_depth: 1,
            style: RenderStyle::Indent,
            theme: ThemeSelection::All,
            color: true,
        }
    }
}

impl Settings {
    /// Load defaults and apply `PATTERNS_*` environment variables.
    #[instrument(level = "debug")]
    pub fn load() -> Result<Self, SettingsError> {
        Self::apply_env_overrides(Self::default(), None)
    }

    /// Apply `PATTERNS_*` variables as explicit overrides.
    ///
    /// `source` replaces the process environment when given.
    pub fn apply_env_overrides(
        mut settings: Self,
        source: Option<Map<String, String>>,
    ) -> Result<Self, SettingsError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(source),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("start_depth") {
            settings.start_depth = parse_start_depth(&val)?;
        }
        if let Ok(val) = config.get_string("style") {
            settings.style = parse_value_enum("style", &val)?;
        }
        if let Ok(val) = config.get_string("theme") {
            settings.theme = parse_value_enum("theme", &val)?;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = parse_bool("color", &val)?;
        }

        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

/// Parse a root depth, rejecting values above [`MAX_START_DEPTH`].
pub fn parse_start_depth(val: &str) -> Result<usize, SettingsError> {
    let depth: usize = val.trim().parse().map_err(|e| SettingsError::Config {
        message: format!("start_depth '{val}': {e}"),
    })?;
    if depth > MAX_START_DEPTH {
        return Err(SettingsError::Config {
            message: format!("start_depth {depth} exceeds maximum {MAX_START_DEPTH}"),
        });
    }
    Ok(depth)
}

fn parse_value_enum<T: ValueEnum>(key: &str, val: &str) -> Result<T, SettingsError> {
    T::from_str(val, true).map_err(|e| SettingsError::Config {
        message: format!("{key} '{val}': {e}"),
    })
}

fn parse_bool(key: &str, val: &str) -> Result<bool, SettingsError> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::Config {
            message: format!("{key} '{val}': expected a boolean"),
        }),
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Config {
        message: e.to_string(),
    }
}
