//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: `~/.config/lanectl/config.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `LANECTL_*`
//! 5. CLI flags (applied by the binary)
//!
//! # Example Config
//!
//! ```toml
//! database_path = "/var/lib/lanectl/lanes.db"
//! max_lanes_per_request = 50
//! log_level = "debug"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{engine::DEFAULT_MAX_LANES_PER_REQUEST, Error, Result};

pub const ENV_DATABASE_PATH: &str = "LANECTL_DB";
pub const ENV_MAX_LANES: &str = "LANECTL_MAX_LANES";
pub const ENV_LOG_LEVEL: &str = "LANECTL_LOG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

/// Effective configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// `SQLite` database file holding lane records
    pub database_path: PathBuf,
    /// Upper bound on lanes created by one request (1..=100)
    pub max_lanes_per_request: u32,
    /// Default tracing level when `RUST_LOG` is unset
    pub log_level: String,
}

/// One configuration layer; unset fields leave the lower layer untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub database_path: Option<PathBuf>,
    pub max_lanes_per_request: Option<u32>,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            max_lanes_per_request: DEFAULT_MAX_LANES_PER_REQUEST,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Overlay a partial layer, returning the new config
    #[must_use]
    pub fn merge(self, layer: PartialConfig) -> Self {
        Self {
            database_path: layer.database_path.unwrap_or(self.database_path),
            max_lanes_per_request: layer
                .max_lanes_per_request
                .unwrap_or(self.max_lanes_per_request),
            log_level: layer.log_level.unwrap_or(self.log_level),
        }
    }

    /// Apply `LANECTL_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if a numeric variable does not parse.
    pub fn apply_env_vars(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `LANECTL_*` overrides using `lookup` to read variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if a numeric variable does not parse.
    pub fn apply_env_with(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_lanes_per_request = lookup(ENV_MAX_LANES)
            .map(|raw| {
                raw.trim().parse::<u32>().map_err(|e| {
                    Error::invalid_config(format!("{ENV_MAX_LANES}={raw} is not a number: {e}"))
                })
            })
            .transpose()?;

        Ok(self.merge(PartialConfig {
            database_path: lookup(ENV_DATABASE_PATH).map(PathBuf::from),
            max_lanes_per_request,
            log_level: lookup(ENV_LOG_LEVEL),
        }))
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(Error::invalid_config("database_path must not be empty"));
        }
        if self.max_lanes_per_request == 0
            || self.max_lanes_per_request > DEFAULT_MAX_LANES_PER_REQUEST
        {
            return Err(Error::invalid_config(format!(
                "max_lanes_per_request must be between 1 and {DEFAULT_MAX_LANES_PER_REQUEST}, got {}",
                self.max_lanes_per_request
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::invalid_config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources with hierarchy.
///
/// # Errors
///
/// Returns error if:
/// - A config file is malformed TOML or has unknown keys
/// - The explicit config file does not exist
/// - Config values fail validation
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let global = global_config_path().filter(|path| path.exists());
    load_layers(global.as_deref(), explicit, |key| std::env::var(key).ok())
}

/// Load configuration from the given layers (testable core of [`load_config`]).
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_layers(
    global: Option<&Path>,
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Config> {
    let config = Config::default();

    let config = match global {
        Some(path) => config.merge(load_toml_file(path)?),
        None => config,
    };

    let config = match explicit {
        Some(path) => config.merge(load_toml_file(path)?),
        None => config,
    };

    let config = config.apply_env_with(env)?;
    config.validate()?;
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "lanectl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Default database location: the platform data dir, else `./lanes.db`
pub fn default_database_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "lanectl").map_or_else(
        || PathBuf::from("lanes.db"),
        |dirs| dirs.data_dir().join("lanes.db"),
    )
}

/// Load a TOML file into a partial config layer.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` if the file cannot be read or parsed.
pub fn load_toml_file(path: &Path) -> Result<PartialConfig> {
    if path.is_dir() {
        return Err(Error::invalid_config(format!(
            "config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::invalid_config(format!("failed to read config file {}: {e}", path.display()))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::invalid_config(format!("failed to parse config file {}: {e}", path.display()))
    })
}
