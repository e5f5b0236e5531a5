//! Provider config file loading.
//!
//! A config file is a flat YAML mapping whose keys mirror
//! [`ProviderOverrides`]:
//!
//! ```yaml
//! region: eu-west-1
//! bref_version: 2.0.5
//! bref_extra_version: 1.1.1
//! ```

use crate::config::provider::ProviderOverrides;
use crate::error::{LayerError, Result};
use std::fs;
use std::path::Path;

/// Load a provider config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParse` if the YAML is invalid or has unknown keys.
pub fn load_config_file(path: &Path) -> Result<ProviderOverrides> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LayerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LayerError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into provider overrides.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProviderOverrides> {
    if content.trim().is_empty() {
        return Ok(ProviderOverrides::default());
    }

    serde_yaml::from_str(content).map_err(|e| LayerError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
