#![forbid(unsafe_code)]

//! Environment-variable overrides read from the real process environment.

use std::path::PathBuf;

use lane_core::{
    config::{ENV_DATABASE_PATH, ENV_LOG_LEVEL, ENV_MAX_LANES},
    Config, Error,
};
use serial_test::serial;

fn clear_env() {
    for key in [ENV_DATABASE_PATH, ENV_MAX_LANES, ENV_LOG_LEVEL] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn env_vars_override_defaults() -> lane_core::Result<()> {
    clear_env();
    std::env::set_var(ENV_DATABASE_PATH, "/srv/lanes.db");
    std::env::set_var(ENV_MAX_LANES, "25");

    let config = Config::default().apply_env_vars();
    clear_env();
    let config = config?;

    assert_eq!(config.database_path, PathBuf::from("/srv/lanes.db"));
    assert_eq!(config.max_lanes_per_request, 25);
    assert_eq!(config.log_level, "info");
    Ok(())
}

#[test]
#[serial]
fn unset_env_keeps_config() -> lane_core::Result<()> {
    clear_env();
    let before = Config::default();
    let after = before.clone().apply_env_vars()?;
    assert_eq!(before, after);
    Ok(())
}

#[test]
#[serial]
fn malformed_number_is_invalid_config() {
    clear_env();
    std::env::set_var(ENV_MAX_LANES, "-4");

    let result = Config::default().apply_env_vars();
    clear_env();

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}
