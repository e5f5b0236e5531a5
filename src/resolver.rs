//! Layer version resolution.
//!
//! A lookup runs strictly in sequence: pick the feed's [`SourceDescriptor`],
//! fetch its manifest once, find the layer's entry for the configured
//! region, normalize the version and format the ARN. Any failure ends the
//! lookup; there is no partial result and nothing is retried.
//!
//! # Example
//!
//! ```
//! use bref_layers::resolver::resolve;
//! use bref_layers::source::{LayerSource, SourceDescriptor};
//!
//! let descriptor = SourceDescriptor::new(
//!     LayerSource::Bref,
//!     "https://raw.githubusercontent.com",
//!     "2.0.5",
//!     "534081306603",
//! );
//! let manifest = br#"{"console": {"us-east-1": "47"}}"#;
//!
//! let layer = resolve("console", "us-east-1", manifest, &descriptor).unwrap();
//! assert_eq!(layer.version, 47);
//! assert_eq!(layer.arn, "arn:aws:lambda:us-east-1:534081306603:layer:console:47");
//! ```

use reqwest::Url;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::{LayerError, Result};
use crate::fetch::{HttpFetcher, ManifestFetcher};
use crate::manifest::{LayerManifest, Lookup};
use crate::source::{LayerSource, SourceDescriptor, SourceTable};

/// A resolved layer version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerVersion {
    /// Published layer version.
    pub version: u64,
    /// Fully-qualified layer version ARN.
    pub arn: String,
    /// Same value as `arn`; kept for consumers of the `layer_arn` attribute.
    pub layer_arn: String,
}

impl LayerVersion {
    fn new(version: u64, arn: String) -> Self {
        Self {
            version,
            layer_arn: arn.clone(),
            arn,
        }
    }
}

/// Format a Lambda layer version ARN.
///
/// Inputs are not validated; malformed names yield a well-formed but
/// meaningless ARN.
pub fn layer_arn(region: &str, account_id: &str, layer_name: &str, version: u64) -> String {
    format!(
        "arn:aws:lambda:{}:{}:layer:{}:{}",
        region, account_id, layer_name, version
    )
}

/// Resolve `layer_name` in `region` from raw manifest bytes.
pub fn resolve(
    layer_name: &str,
    region: &str,
    manifest_bytes: &[u8],
    descriptor: &SourceDescriptor,
) -> Result<LayerVersion> {
    let manifest = LayerManifest::from_slice(manifest_bytes)?;
    debug!(
        "Manifest for {} lists {} layers",
        descriptor.source(),
        manifest.layer_names().count()
    );

    let value = match manifest.lookup(layer_name, region) {
        Lookup::Found(value) => value,
        Lookup::MissingLayer => {
            return Err(LayerError::LayerNotFound {
                version: descriptor.version().to_string(),
                layer: layer_name.to_string(),
                region: region.to_string(),
            })
        }
        Lookup::MissingRegion => {
            return Err(LayerError::RegionNotFound {
                version: descriptor.version().to_string(),
                layer: layer_name.to_string(),
                region: region.to_string(),
            })
        }
    };

    let version = value
        .normalize()
        .ok_or_else(|| LayerError::VersionUnparseable {
            version: descriptor.version().to_string(),
            layer: layer_name.to_string(),
            region: region.to_string(),
            value: value.raw(),
        })?;

    let arn = layer_arn(region, descriptor.account_id(), layer_name, version);
    Ok(LayerVersion::new(version, arn))
}

/// Resolves layers for one provider configuration.
///
/// Holds only immutable state, so one resolver can serve concurrent
/// lookups when its fetcher allows it.
pub struct LayerResolver<F> {
    fetcher: F,
    sources: SourceTable,
    region: String,
}

impl LayerResolver<HttpFetcher> {
    /// Create a resolver that fetches manifests over HTTP.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(config.timeout_secs))?;
        Self::new(fetcher, config)
    }
}

impl<F: ManifestFetcher> LayerResolver<F> {
    /// Create a resolver using `fetcher` for manifest retrieval.
    pub fn new(fetcher: F, config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            fetcher,
            sources: SourceTable::from_config(config),
            region: config.region.clone(),
        })
    }

    /// Fetch `source`'s manifest and resolve `layer_name` from it.
    pub fn lookup(&self, source: LayerSource, layer_name: &str) -> Result<LayerVersion> {
        if layer_name.trim().is_empty() {
            return Err(LayerError::ConfigValidation {
                message: "layer name must not be empty".to_string(),
            });
        }

        let descriptor = self.sources.get(source);
        let url = Url::parse(descriptor.manifest_url()).map_err(|e| {
            debug!("Invalid manifest URL {}: {}", descriptor.manifest_url(), e);
            LayerError::RequestBuild {
                version: descriptor.version().to_string(),
            }
        })?;

        let bytes = self.fetcher.fetch(&url)?;
        let layer = resolve(layer_name, &self.region, &bytes, descriptor)?;

        info!("Resolved {} to {}", layer_name, layer.arn);
        Ok(layer)
    }
}
