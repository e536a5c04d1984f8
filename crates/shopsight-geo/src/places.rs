//! General-purpose place search (Nominatim wire format), used by the
//! geodesic fallback strategy.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use shopsight_core::GeoPoint;

use crate::error::GeoError;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// One place-search hit. Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct PlaceHit {
    lat: String,
    lon: String,
}

/// Client for the place-search API.
pub struct PlacesClient {
    client: Client,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production place-search API.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, GeoError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeoError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("shopsight/0.1 (product-resolution)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeoError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Searches for up to ten places matching a free-text query and returns
    /// their coordinates. Hits with unparseable coordinates are skipped.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx status.
    /// - [`GeoError::Deserialize`] if the body is not a hit array.
    pub async fn search(&self, query: &str) -> Result<Vec<GeoPoint>, GeoError> {
        let mut url = self.base_url.clone();
        url.set_path("search");
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("format", "json");
            pairs.append_pair("addressdetails", "1");
            pairs.append_pair("limit", "10");
        }

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let hits: Vec<PlaceHit> =
            serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
                context: format!("places(query={query})"),
                source: e,
            })?;

        let points = hits
            .into_iter()
            .filter_map(|hit| {
                Some(GeoPoint {
                    latitude: hit.lat.parse().ok()?,
                    longitude: hit.lon.parse().ok()?,
                })
            })
            .collect();

        Ok(points)
    }
}
