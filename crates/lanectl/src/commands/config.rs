//! Config command implementation

use std::io::Write;

use anyhow::Result;
use lane_core::Config;

use super::{write_json, OutputFormat};

/// Print the effective configuration as TOML or JSON
pub fn run(config: &Config, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, config),
        OutputFormat::Human => {
            write!(out, "{}", toml::to_string(config)?)?;
            Ok(())
        }
    }
}
