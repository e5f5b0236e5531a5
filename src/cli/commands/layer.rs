//! The `layer` and `extra-layer` commands.

use std::io::Write;

use crate::cli::args::LayerArgs;
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::fetch::ManifestFetcher;
use crate::resolver::{LayerResolver, LayerVersion};
use crate::source::LayerSource;

use super::dispatcher::{Command, CommandResult};

/// Resolves one layer from one feed and prints it.
pub struct LayerCommand {
    source: LayerSource,
    args: LayerArgs,
    config: ProviderConfig,
    json: bool,
}

impl LayerCommand {
    /// Create a new layer command.
    pub fn new(source: LayerSource, args: LayerArgs, config: ProviderConfig, json: bool) -> Self {
        Self {
            source,
            args,
            config,
            json,
        }
    }

    fn run<F: ManifestFetcher>(
        &self,
        resolver: &LayerResolver<F>,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        let layer = resolver.lookup(self.source, &self.args.name)?;
        write_layer(out, &layer, self.json)?;
        Ok(CommandResult::success())
    }
}

impl Command for LayerCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let resolver = LayerResolver::from_config(&self.config)?;
        self.run(&resolver, out)
    }
}

fn write_layer(out: &mut dyn Write, layer: &LayerVersion, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(layer).map_err(anyhow::Error::from)?;
        writeln!(out, "{}", rendered)?;
    } else {
        writeln!(out, "version: {}", layer.version)?;
        writeln!(out, "arn:     {}", layer.arn)?;
    }
    Ok(())
}
