//! Layer manifest sources.
//!
//! Bref publishes two independent layer feeds: the PHP runtime layers and
//! the extra PHP extension layers. Each feed has its own `layers.json`
//! manifest and its own owning AWS account. A [`SourceTable`] fixes the
//! manifest URL and account for both feeds once per provider
//! configuration; lookups borrow from it.

use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;

/// Account publishing the Bref extra extension layers.
pub const BREF_EXTRA_ACCOUNT_ID: &str = "403367587399";

/// A published layer feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSource {
    /// PHP runtime layers (`brefphp/bref`).
    Bref,
    /// Extra PHP extension layers (`brefphp/extra-php-extensions`).
    BrefExtra,
}

impl LayerSource {
    /// Data source name this feed is exposed under.
    pub fn data_source_name(self) -> &'static str {
        match self {
            Self::Bref => "bref_lambda_layer",
            Self::BrefExtra => "bref_extra_lambda_layer",
        }
    }

    /// Repository that publishes the feed's manifest.
    pub fn project(self) -> &'static str {
        match self {
            Self::Bref => "brefphp/bref",
            Self::BrefExtra => "brefphp/extra-php-extensions",
        }
    }
}

impl std::fmt::Display for LayerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.data_source_name())
    }
}

/// Where one feed's manifest lives and which account owns its layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    source: LayerSource,
    version: String,
    account_id: String,
    manifest_url: String,
}

impl SourceDescriptor {
    /// Describe `source` at release `version`, served from `host`.
    pub fn new(
        source: LayerSource,
        host: &str,
        version: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        let version = version.into();
        let manifest_url = format!(
            "{}/{}/{}/layers.json",
            host.trim_end_matches('/'),
            source.project(),
            version
        );

        Self {
            source,
            version,
            account_id: account_id.into(),
            manifest_url,
        }
    }

    pub fn source(&self) -> LayerSource {
        self.source
    }

    /// Release of the feed the manifest is read from.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }
}

/// Descriptors for every feed, built from one provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    bref: SourceDescriptor,
    bref_extra: SourceDescriptor,
}

impl SourceTable {
    /// Build the table for `config`.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            bref: SourceDescriptor::new(
                LayerSource::Bref,
                &config.manifest_host,
                &config.bref_version,
                &config.bref_aws_account,
            ),
            bref_extra: SourceDescriptor::new(
                LayerSource::BrefExtra,
                &config.manifest_host,
                &config.bref_extra_version,
                BREF_EXTRA_ACCOUNT_ID,
            ),
        }
    }

    /// Descriptor for `source`.
    pub fn get(&self, source: LayerSource) -> &SourceDescriptor {
        match source {
            LayerSource::Bref => &self.bref,
            LayerSource::BrefExtra => &self.bref_extra,
        }
    }
}
