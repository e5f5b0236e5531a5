//! Provider configuration.
//!
//! A [`ProviderConfig`] is the fully-resolved set of settings every lookup
//! needs: the target region, the Bref releases whose manifests are read,
//! and the account that owns the runtime layers. Values come from, in
//! decreasing priority:
//!
//! 1. Command-line flags
//! 2. A provider config file
//! 3. Environment variables
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::environment::{
    first_env, BREF_AWS_ACCOUNT_VAR, BREF_EXTRA_VERSION_VAR, BREF_VERSION_VAR, MANIFEST_HOST_VAR,
    REGION_VARS,
};
use crate::error::{LayerError, Result};

/// Region used when neither a flag, file nor environment names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Bref runtime release read by default.
pub const DEFAULT_BREF_VERSION: &str = "2.0.5";

/// Bref extra extensions release read by default.
pub const DEFAULT_BREF_EXTRA_VERSION: &str = "1.1.1";

/// Account publishing the Bref runtime layers.
pub const DEFAULT_BREF_AWS_ACCOUNT: &str = "534081306603";

/// Host serving the published `layers.json` manifests.
pub const DEFAULT_MANIFEST_HOST: &str = "https://raw.githubusercontent.com";

/// Default manifest request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved settings for layer lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// AWS region the layers are resolved for.
    pub region: String,

    /// Bref runtime release (a git ref of `brefphp/bref`).
    pub bref_version: String,

    /// Bref extra extensions release (a git ref of `brefphp/extra-php-extensions`).
    pub bref_extra_version: String,

    /// Account that owns the Bref runtime layers.
    pub bref_aws_account: String,

    /// Base URL the manifests are fetched from.
    pub manifest_host: String,

    /// Manifest request timeout in seconds.
    pub timeout_secs: u64,
}

/// Partial settings from a config file or the command line.
///
/// Every field is optional; unset fields defer to the next source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderOverrides {
    pub region: Option<String>,
    pub bref_version: Option<String>,
    pub bref_extra_version: Option<String>,
    pub bref_aws_account: Option<String>,
    pub manifest_host: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ProviderOverrides {
    /// Layer `higher` on top of `self`; fields set in `higher` win.
    pub fn merge(self, higher: ProviderOverrides) -> ProviderOverrides {
        ProviderOverrides {
            region: higher.region.or(self.region),
            bref_version: higher.bref_version.or(self.bref_version),
            bref_extra_version: higher.bref_extra_version.or(self.bref_extra_version),
            bref_aws_account: higher.bref_aws_account.or(self.bref_aws_account),
            manifest_host: higher.manifest_host.or(self.manifest_host),
            timeout_secs: higher.timeout_secs.or(self.timeout_secs),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            bref_version: DEFAULT_BREF_VERSION.to_string(),
            bref_extra_version: DEFAULT_BREF_EXTRA_VERSION.to_string(),
            bref_aws_account: DEFAULT_BREF_AWS_ACCOUNT.to_string(),
            manifest_host: DEFAULT_MANIFEST_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env(env: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            region: first_env(env, REGION_VARS).unwrap_or(defaults.region),
            bref_version: first_env(env, &[BREF_VERSION_VAR]).unwrap_or(defaults.bref_version),
            bref_extra_version: first_env(env, &[BREF_EXTRA_VERSION_VAR])
                .unwrap_or(defaults.bref_extra_version),
            bref_aws_account: first_env(env, &[BREF_AWS_ACCOUNT_VAR])
                .unwrap_or(defaults.bref_aws_account),
            manifest_host: first_env(env, &[MANIFEST_HOST_VAR]).unwrap_or(defaults.manifest_host),
            timeout_secs: defaults.timeout_secs,
        }
    }

    /// Resolve a config from the environment and overrides, then validate it.
    ///
    /// `overrides` should already combine the config file and the command
    /// line (see [`ProviderOverrides::merge`]).
    pub fn resolve(
        env: &HashMap<String, String>,
        overrides: ProviderOverrides,
    ) -> Result<ProviderConfig> {
        let base = Self::from_env(env);
        let config = Self {
            region: overrides.region.unwrap_or(base.region),
            bref_version: overrides.bref_version.unwrap_or(base.bref_version),
            bref_extra_version: overrides
                .bref_extra_version
                .unwrap_or(base.bref_extra_version),
            bref_aws_account: overrides.bref_aws_account.unwrap_or(base.bref_aws_account),
            manifest_host: overrides.manifest_host.unwrap_or(base.manifest_host),
            timeout_secs: overrides.timeout_secs.unwrap_or(base.timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting a lookup depends on is present.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("region", &self.region),
            ("bref_version", &self.bref_version),
            ("bref_extra_version", &self.bref_extra_version),
            ("bref_aws_account", &self.bref_aws_account),
            ("manifest_host", &self.manifest_host),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(LayerError::ConfigValidation {
                    message: format!("'{}' must not be empty", field),
                });
            }
        }

        if self.timeout_secs == 0 {
            return Err(LayerError::ConfigValidation {
                message: "'timeout_secs' must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
