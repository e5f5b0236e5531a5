//! Environment variable handling.
//!
//! Provider settings fall back to environment variables before their
//! built-in defaults. Lookups take an explicit variable map so callers
//! (and tests) decide where the values come from.

use std::collections::HashMap;

/// Variables checked, in order, for the AWS region.
pub const REGION_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];

/// Variable for the Bref runtime release.
pub const BREF_VERSION_VAR: &str = "BREF_VERSION";

/// Variable for the Bref extra extensions release.
pub const BREF_EXTRA_VERSION_VAR: &str = "BREF_EXTRA_VERSION";

/// Variable for the account that publishes the Bref runtime layers.
pub const BREF_AWS_ACCOUNT_VAR: &str = "BREF_AWS_ACCOUNT";

/// Variable for the host serving `layers.json` manifests.
pub const MANIFEST_HOST_VAR: &str = "BREF_MANIFEST_HOST";

/// Load environment variables from system.
pub fn load_system_env() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Return the first non-empty value among `names`.
pub fn first_env(env: &HashMap<String, String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env.get(*name))
        .find(|value| !value.is_empty())
        .cloned()
}
