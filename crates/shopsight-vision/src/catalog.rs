//! HTTP client for the barcode product catalog.
//!
//! Resolves a UPC digit string to brand/title metadata. Only the barcode
//! identification flow uses this; the description flow searches on the
//! vision completion directly.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::CatalogError;
use crate::types::{CatalogProduct, CatalogResponse};

const DEFAULT_BASE_URL: &str = "https://api.upcitemdb.com/";

/// Client for the barcode catalog API.
pub struct CatalogClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a new client pointed at the production catalog API.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, CatalogError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("shopsight/0.1 (product-resolution)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Looks up brand/title metadata for a UPC.
    ///
    /// Returns the first catalogued product for the code.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] when the database has no product for
    ///   this code (empty `products` array).
    /// - [`CatalogError::Http`] on network failure or non-2xx status.
    /// - [`CatalogError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn lookup(&self, upc: &str) -> Result<CatalogProduct, CatalogError> {
        let url = self.lookup_url(upc);
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: CatalogResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Deserialize {
                context: format!("lookup(upc={upc})"),
                source: e,
            })?;

        parsed
            .products
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::NotFound {
                upc: upc.to_owned(),
            })
    }

    fn lookup_url(&self, upc: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("prod/lookup");
        url.query_pairs_mut()
            .append_pair("barcode", upc)
            .append_pair("key", &self.api_key);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_url_constructs_correct_query_string() {
        let client = CatalogClient::with_base_url("test-key", 30, "https://api.upcitemdb.com")
            .expect("client construction should not fail");
        let url = client.lookup_url("012345678905");
        assert_eq!(
            url.as_str(),
            "https://api.upcitemdb.com/prod/lookup?barcode=012345678905&key=test-key"
        );
    }
}
