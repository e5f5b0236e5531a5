//! Error types for layer lookups.
//!
//! This module defines [`LayerError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Every lookup error is terminal: nothing is retried or swallowed
//! - Lookup errors name the version, layer and region that failed so a
//!   missing manifest entry can be diagnosed without opening the manifest
//! - Use `anyhow::Error` (via `LayerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for layer lookups.
#[derive(Debug, Error)]
pub enum LayerError {
    /// The manifest URL could not be turned into a request.
    #[error("Unable to build request for {version} version of Bref runtime layers")]
    RequestBuild { version: String },

    /// The manifest could not be retrieved.
    #[error("Error retrieving Bref runtime layers: {message}")]
    Fetch { message: String },

    /// The response body is not a JSON object of layers.
    #[error("Error parsing Bref runtime layers: {message}")]
    ManifestMalformed { message: String },

    /// The layer is absent from the manifest, or is not a region mapping.
    #[error("Unable to locate Bref v{version} lambda layer {layer} (looked up for {region} region)")]
    LayerNotFound {
        version: String,
        layer: String,
        region: String,
    },

    /// The region is absent under the layer, or its value has an unusable type.
    #[error("Unable to locate a Bref v{version} lambda layer version for {layer} in {region} region")]
    RegionNotFound {
        version: String,
        layer: String,
        region: String,
    },

    /// The region's version string is not an integer.
    #[error("Unable to parse Bref v{version} lambda layer version for {layer} in {region} region: {value:?}")]
    VersionUnparseable {
        version: String,
        layer: String,
        region: String,
        value: String,
    },

    /// Provider config file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a provider config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid provider configuration or lookup input.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for layer lookups.
pub type Result<T> = std::result::Result<T, LayerError>;
