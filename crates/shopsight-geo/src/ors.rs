//! Geocoding and walking-route client (OpenRouteService wire format).
//!
//! Two endpoints back the routing distance strategy: `geocode/search` with a
//! country boundary and the venue layer to pin a store to coordinates, and
//! `v2/directions/foot-walking` for the walkable distance between two
//! points.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::json;

use shopsight_core::GeoPoint;

use crate::error::GeoError;

const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org/";

/// A geocoded store candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub name: Option<String>,
    pub point: GeoPoint,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    #[serde(default)]
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[longitude, latitude]` per GeoJSON.
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    summary: RouteSummary,
}

#[derive(Debug, Deserialize)]
struct RouteSummary {
    /// Route length in meters.
    distance: f64,
}

/// Client for the geocoding + routing API.
pub struct OrsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl OrsClient {
    /// Creates a new client pointed at the production routing API.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeoError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeoError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeoError> {
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

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Geocodes free text to venue candidates inside a country boundary.
    ///
    /// Candidates come back in the vendor's relevance order; the routing
    /// strategy treats the first as nearest. Features with malformed
    /// coordinates are skipped.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx status.
    /// - [`GeoError::Deserialize`] if the body is not a feature collection.
    pub async fn geocode_venue(
        &self,
        text: &str,
        country: &str,
    ) -> Result<Vec<GeocodedPlace>, GeoError> {
        let mut url = self.base_url.clone();
        url.set_path("geocode/search");
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            pairs.append_pair("text", text);
            pairs.append_pair("boundary.country", country);
            pairs.append_pair("layers", "venue");
        }

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
                context: format!("geocode(text={text})"),
                source: e,
            })?;

        let places = parsed
            .features
            .into_iter()
            .filter_map(|f| {
                let longitude = *f.geometry.coordinates.first()?;
                let latitude = *f.geometry.coordinates.get(1)?;
                Some(GeocodedPlace {
                    name: f.properties.name,
                    point: GeoPoint {
                        latitude,
                        longitude,
                    },
                })
            })
            .collect();

        Ok(places)
    }

    /// Requests the walking-route distance between two points, in meters.
    ///
    /// Returns `Ok(None)` when the API finds no route.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx status.
    /// - [`GeoError::Deserialize`] if the body does not match the directions
    ///   shape.
    pub async fn walking_distance_m(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Option<f64>, GeoError> {
        let mut url = self.base_url.clone();
        url.set_path("v2/directions/foot-walking");

        // Coordinates are [longitude, latitude] pairs, origin first.
        let payload = json!({
            "coordinates": [
                [origin.longitude, origin.latitude],
                [destination.longitude, destination.latitude]
            ]
        });

        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .json(&payload)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
                context: "directions(foot-walking)".to_owned(),
                source: e,
            })?;

        Ok(parsed.routes.first().map(|r| r.summary.distance))
    }
}
