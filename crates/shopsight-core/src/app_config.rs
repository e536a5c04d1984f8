use std::path::PathBuf;

use crate::types::GeoPoint;

/// Regional constants for the shopping-search vendor. These bias every query
/// toward the service's target market; they are deployment configuration,
/// not per-request options.
#[derive(Debug, Clone)]
pub struct SearchLocale {
    /// Free-text location bias, e.g. "Winnipeg, Manitoba, Canada".
    pub location: String,
    /// Vendor domain, e.g. "google.ca".
    pub google_domain: String,
    /// Country code, e.g. "ca".
    pub gl: String,
    /// Language code, e.g. "en".
    pub hl: String,
}

#[derive(Clone)]
pub struct AppConfig {
    /// Shopping-search vendor key (required).
    pub search_api_key: String,
    /// Vision-language API key (required).
    pub vision_api_key: String,
    /// Routing/geocoding API key; the routing distance strategy degrades to
    /// unavailable distances without one.
    pub routing_api_key: Option<String>,
    /// Barcode catalog API key; the barcode flow requires one.
    pub catalog_api_key: Option<String>,
    /// Vision model identifier.
    pub vision_model: String,
    pub search_locale: SearchLocale,
    /// Cap on offers taken from one search response.
    pub search_max_results: usize,
    /// Per-external-call timeout applied by every HTTP client.
    pub request_timeout_secs: u64,
    /// ISO country filter for store geocoding.
    pub country_boundary: String,
    /// Retailer catalog override file.
    pub retailers_path: PathBuf,
    /// City used when a capture carries no city hint.
    pub default_city: Option<String>,
    /// Fixed device position for hosts without a location service.
    pub static_origin: Option<GeoPoint>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("search_api_key", &"[redacted]")
            .field("vision_api_key", &"[redacted]")
            .field(
                "routing_api_key",
                &self.routing_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "catalog_api_key",
                &self.catalog_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("vision_model", &self.vision_model)
            .field("search_locale", &self.search_locale)
            .field("search_max_results", &self.search_max_results)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("country_boundary", &self.country_boundary)
            .field("retailers_path", &self.retailers_path)
            .field("default_city", &self.default_city)
            .field("static_origin", &self.static_origin)
            .finish()
    }
}
