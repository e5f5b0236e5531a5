//! Provider configuration loading and validation.
//!
//! - Resolved settings and defaults in [`provider`]
//! - YAML config files in [`loader`]
//! - Environment variable fallbacks in [`environment`]
//!
//! # Example
//!
//! ```
//! use bref_layers::config::{ProviderConfig, ProviderOverrides};
//! use std::collections::HashMap;
//!
//! let mut env = HashMap::new();
//! env.insert("AWS_REGION".to_string(), "eu-west-1".to_string());
//!
//! let config = ProviderConfig::resolve(&env, ProviderOverrides::default()).unwrap();
//! assert_eq!(config.region, "eu-west-1");
//! assert_eq!(config.bref_version, "2.0.5");
//! ```

pub mod environment;
pub mod loader;
pub mod provider;

pub use environment::load_system_env;
pub use loader::{load_config_file, parse_config};
pub use provider::{ProviderConfig, ProviderOverrides};
