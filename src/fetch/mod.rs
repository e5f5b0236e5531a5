//! Manifest fetching.
//!
//! [`ManifestFetcher`] is the seam between lookups and the network:
//! one call, one request, raw bytes back. [`HttpFetcher`] is the
//! production implementation.

pub mod http;

pub use http::HttpFetcher;

use crate::error::Result;
use reqwest::Url;

/// Retrieves the raw bytes of a manifest.
pub trait ManifestFetcher {
    /// Fetch `url` once. Implementations must not retry.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

impl<T: ManifestFetcher + ?Sized> ManifestFetcher for &T {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}
