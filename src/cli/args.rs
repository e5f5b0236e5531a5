//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ProviderOverrides;

/// Resolve published Bref PHP Lambda layer versions and ARNs.
#[derive(Debug, Parser)]
#[command(name = "bref-layers")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a provider config file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// AWS region to resolve layers for [env: AWS_REGION, AWS_DEFAULT_REGION]
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Bref runtime release to read [env: BREF_VERSION]
    #[arg(long, global = true)]
    pub bref_version: Option<String>,

    /// Bref extra extensions release to read [env: BREF_EXTRA_VERSION]
    #[arg(long, global = true)]
    pub bref_extra_version: Option<String>,

    /// Account owning the Bref runtime layers [env: BREF_AWS_ACCOUNT]
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// Host serving layers.json manifests [env: BREF_MANIFEST_HOST]
    #[arg(long, global = true)]
    pub manifest_host: Option<String>,

    /// Manifest request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Provider settings given on the command line.
    pub fn overrides(&self) -> ProviderOverrides {
        ProviderOverrides {
            region: self.region.clone(),
            bref_version: self.bref_version.clone(),
            bref_extra_version: self.bref_extra_version.clone(),
            bref_aws_account: self.account.clone(),
            manifest_host: self.manifest_host.clone(),
            timeout_secs: self.timeout,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a Bref PHP runtime layer
    Layer(LayerArgs),

    /// Resolve a Bref extra PHP extension layer
    ExtraLayer(LayerArgs),

    /// Show resolved provider configuration
    Config,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `layer` and `extra-layer` commands.
#[derive(Debug, Clone, clap::Args)]
pub struct LayerArgs {
    /// Layer name as published in the manifest (e.g. `console`, `php-82`)
    pub name: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
