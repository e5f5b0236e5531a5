//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::collections::HashMap;
use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config_file, ProviderConfig, ProviderOverrides};
use crate::error::Result;
use crate::source::LayerSource;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing user-facing output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Lookup failures are returned as errors, so commands that finish always
/// exit with 0.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    env: HashMap<String, String>,
}

impl CommandDispatcher {
    /// Create a dispatcher that reads provider defaults from `env`.
    pub fn new(env: HashMap<String, String>) -> Self {
        Self { env }
    }

    /// Resolve provider settings: flags, then config file, then environment.
    pub fn provider_config(&self, cli: &Cli) -> Result<ProviderConfig> {
        let file = match &cli.config {
            Some(path) => load_config_file(path)?,
            None => ProviderOverrides::default(),
        };

        ProviderConfig::resolve(&self.env, file.merge(cli.overrides()))
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Layer(args) => {
                let config = self.provider_config(cli)?;
                let cmd = super::layer::LayerCommand::new(
                    LayerSource::Bref,
                    args.clone(),
                    config,
                    cli.json,
                );
                cmd.execute(out)
            }
            Commands::ExtraLayer(args) => {
                let config = self.provider_config(cli)?;
                let cmd = super::layer::LayerCommand::new(
                    LayerSource::BrefExtra,
                    args.clone(),
                    config,
                    cli.json,
                );
                cmd.execute(out)
            }
            Commands::Config => {
                let config = self.provider_config(cli)?;
                let cmd = super::config::ConfigCommand::new(config, cli.json);
                cmd.execute(out)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}
