//! bref-layers - Resolve published Bref PHP Lambda layers.
//!
//! Given a layer name and an AWS region, bref-layers reads the `layers.json`
//! manifest Bref publishes for a release and returns the layer's version
//! number and its Lambda layer version ARN.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Provider settings, defaults and config files
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Manifest retrieval over HTTP
//! - [`manifest`] - Manifest decoding and version normalization
//! - [`resolver`] - Layer lookups and ARN formatting
//! - [`source`] - Manifest feeds and their owning accounts
//!
//! # Example
//!
//! ```
//! use bref_layers::resolver::layer_arn;
//!
//! let arn = layer_arn("us-east-1", "534081306603", "console", 47);
//! assert_eq!(arn, "arn:aws:lambda:us-east-1:534081306603:layer:console:47");
//! ```
//!
//! For lookups against a live manifest, see [`resolver::LayerResolver`].

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod resolver;
pub mod source;

pub use error::{LayerError, Result};
pub use resolver::{LayerResolver, LayerVersion};
pub use source::LayerSource;
