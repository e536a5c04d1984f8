//! HTTP client for the shopping-search vendor.

use std::time::Duration;

use reqwest::{Client, Url};

use shopsight_core::app_config::SearchLocale;
use shopsight_core::RetailerCatalog;

use crate::error::SearchError;
use crate::types::{RawOffer, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://www.searchapi.io/";

/// Client for the shopping-listings search API.
///
/// Carries the fixed regional constants (`location`, `google_domain`,
/// `gl`, `hl`) so every query is biased toward the service's target market.
pub struct SearchClient {
    client: Client,
    api_key: String,
    locale: SearchLocale,
    max_results: usize,
    base_url: Url,
}

impl SearchClient {
    /// Creates a new client pointed at the production search API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        locale: SearchLocale,
        max_results: usize,
        timeout_secs: u64,
    ) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, locale, max_results, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        locale: SearchLocale,
        max_results: usize,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("shopsight/0.1 (product-resolution)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            locale,
            max_results,
            base_url,
        })
    }

    /// Runs a shopping search and returns the raw listings, capped at the
    /// configured result count. An empty result set is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or non-2xx status.
    /// - [`SearchError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search(&self, query: &str) -> Result<Vec<RawOffer>, SearchError> {
        let url = self.search_url(query);
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(query={query})"),
                source: e,
            })?;

        let mut offers = parsed.shopping_results;
        if offers.len() > self.max_results {
            offers.truncate(self.max_results);
        }

        tracing::debug!(query, count = offers.len(), "shopping search results");
        Ok(offers)
    }

    /// Runs a shopping search and keeps only offers from target retailers.
    ///
    /// Offers without a seller, and offers whose seller matches none of the
    /// catalog's allow-list entries, are dropped. This is the pipeline's
    /// only drop point; canonicalization later never discards.
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::search`].
    pub async fn search_targets(
        &self,
        query: &str,
        catalog: &RetailerCatalog,
    ) -> Result<Vec<RawOffer>, SearchError> {
        let offers = self.search(query).await?;
        Ok(filter_target_offers(offers, catalog))
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("api/v1/search");
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", "google_shopping");
            pairs.append_pair("q", query);
            pairs.append_pair("api_key", &self.api_key);
            pairs.append_pair("location", &self.locale.location);
            pairs.append_pair("google_domain", &self.locale.google_domain);
            pairs.append_pair("gl", &self.locale.gl);
            pairs.append_pair("hl", &self.locale.hl);
            pairs.append_pair("num", &self.max_results.to_string());
        }
        url
    }
}

/// Drops offers that are not from a target retailer (hard allow-list).
#[must_use]
pub fn filter_target_offers(
    offers: Vec<RawOffer>,
    catalog: &RetailerCatalog,
) -> Vec<RawOffer> {
    offers
        .into_iter()
        .filter(|offer| {
            offer
                .seller
                .as_deref()
                .is_some_and(|seller| catalog.is_target(seller))
        })
        .collect()
}
