//! The `config` command.
//!
//! Prints the provider settings lookups would use, after flags, config
//! file and environment have been applied.

use std::io::Write;

use crate::config::ProviderConfig;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    config: ProviderConfig,
    json: bool,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config: ProviderConfig, json: bool) -> Self {
        Self { config, json }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let rendered = if self.json {
            serde_json::to_string_pretty(&self.config).map_err(anyhow::Error::from)?
        } else {
            serde_yaml::to_string(&self.config).map_err(anyhow::Error::from)?
        };
        writeln!(out, "{}", rendered.trim_end())?;
        Ok(CommandResult::success())
    }
}
