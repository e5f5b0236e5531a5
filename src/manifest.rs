//! Layer manifest decoding.
//!
//! A `layers.json` manifest maps layer names to region mappings:
//!
//! ```json
//! {
//!   "console": { "us-east-1": "47", "eu-west-1": "47" },
//!   "php-82": { "us-east-1": 52 }
//! }
//! ```
//!
//! The manifest's schema is not ours and has changed across releases:
//! older manifests encode versions as strings, newer ones as numbers. The
//! manifest is therefore kept as dynamic JSON and each lookup branches on
//! the value's shape exactly once, in [`VersionValue`].

use serde_json::{Map, Number, Value};

use crate::error::{LayerError, Result};

/// 2^64; the smallest float that no longer fits in a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A decoded `layers.json` manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerManifest {
    layers: Map<String, Value>,
}

/// A region's raw version entry, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VersionValue<'a> {
    /// Version encoded as a decimal string, e.g. `"47"`.
    Text(&'a str),
    /// Version encoded as a JSON number, e.g. `47` or `47.0`.
    Number(&'a Number),
}

/// Outcome of looking a (layer, region) pair up in a manifest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(VersionValue<'a>),
    /// The layer is absent or is not a region mapping.
    MissingLayer,
    /// The region is absent under the layer or has an unusable type.
    MissingRegion,
}

impl LayerManifest {
    /// Decode manifest bytes.
    ///
    /// Anything other than a JSON object at the top level is malformed.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let layers: Map<String, Value> =
            serde_json::from_slice(bytes).map_err(|e| LayerError::ManifestMalformed {
                message: e.to_string(),
            })?;

        Ok(Self { layers })
    }

    /// Region mapping for `layer`, if present and shaped as a mapping.
    pub fn regions(&self, layer: &str) -> Option<&Map<String, Value>> {
        self.layers.get(layer).and_then(Value::as_object)
    }

    /// Find the version entry for `layer` in `region`.
    pub fn lookup(&self, layer: &str, region: &str) -> Lookup<'_> {
        let Some(regions) = self.regions(layer) else {
            return Lookup::MissingLayer;
        };

        match regions.get(region).and_then(VersionValue::from_value) {
            Some(value) => Lookup::Found(value),
            None => Lookup::MissingRegion,
        }
    }

    /// Layer names in manifest order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }
}

impl<'a> VersionValue<'a> {
    /// Classify a JSON value; `None` for shapes that cannot hold a version.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.as_str())),
            Value::Number(n) => Some(Self::Number(n)),
            _ => None,
        }
    }

    /// Normalize to an integer layer version.
    ///
    /// Strings must be plain decimal integers. Numbers are taken as-is when
    /// integral and truncated when fractional; negative, non-finite or
    /// out-of-range numbers are rejected rather than saturated.
    pub fn normalize(&self) -> Option<u64> {
        match self {
            Self::Text(s) => s.parse().ok(),
            Self::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && *f < U64_LIMIT)
                    .map(|f| f.trunc() as u64)
            }),
        }
    }

    /// Raw text of the entry, for error messages.
    pub fn raw(&self) -> String {
        match self {
            Self::Text(s) => (*s).to_string(),
            Self::Number(n) => n.to_string(),
        }
    }
}
