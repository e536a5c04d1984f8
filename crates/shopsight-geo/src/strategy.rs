//! The two distance strategies behind offer annotation.
//!
//! Strategy choice is deployment configuration resolved at construction
//! time; per-request code always goes through [`DistanceEstimator::estimate`],
//! which never fails — any error on either path degrades to
//! [`Distance::Unavailable`] so one store's bad geocode cannot sink the
//! whole offer list.

use shopsight_core::{Distance, GeoPoint};

use crate::geodesic::haversine_km;
use crate::ors::OrsClient;
use crate::places::PlacesClient;

/// How store distance is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceStrategy {
    /// Venue geocode (first match wins) + walking route.
    Routing,
    /// Place search + minimum great-circle distance over all candidates.
    Geodesic,
}

/// Distance estimation facade over the routing and place-search clients.
pub struct DistanceEstimator {
    strategy: DistanceStrategy,
    /// Absent when no routing API key is configured; the routing strategy
    /// then degrades to unavailable distances.
    ors: Option<OrsClient>,
    places: PlacesClient,
    country: String,
}

impl DistanceEstimator {
    #[must_use]
    pub fn new(
        strategy: DistanceStrategy,
        ors: Option<OrsClient>,
        places: PlacesClient,
        country: String,
    ) -> Self {
        Self {
            strategy,
            ors,
            places,
            country,
        }
    }

    /// Estimates the travel distance from `origin` to the named store.
    ///
    /// Infallible by design: permission problems are the caller's concern
    /// (see [`crate::LocationProvider`]), and every geocode/routing failure
    /// here resolves to [`Distance::Unavailable`].
    pub async fn estimate(&self, origin: GeoPoint, store_name: &str, city: &str) -> Distance {
        match self.strategy {
            DistanceStrategy::Routing => self.estimate_routed(origin, store_name, city).await,
            DistanceStrategy::Geodesic => self.estimate_geodesic(origin, store_name, city).await,
        }
    }

    async fn estimate_routed(&self, origin: GeoPoint, store_name: &str, city: &str) -> Distance {
        let Some(ors) = self.ors.as_ref() else {
            tracing::warn!(store = store_name, "routing API key not configured");
            return Distance::Unavailable;
        };

        let text = format!("{store_name} {city}");
        let places = match ors.geocode_venue(&text, &self.country).await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!(store = store_name, error = %e, "store geocoding failed");
                return Distance::Unavailable;
            }
        };

        // First feature is the vendor's best match; treat it as nearest.
        let Some(place) = places.first() else {
            tracing::debug!(store = store_name, city, "no venue matches for store");
            return Distance::Unavailable;
        };

        match ors.walking_distance_m(origin, place.point).await {
            Ok(Some(meters)) => Distance::Known(meters / 1000.0),
            Ok(None) => {
                tracing::debug!(store = store_name, "no walking route to store");
                Distance::Unavailable
            }
            Err(e) => {
                tracing::warn!(store = store_name, error = %e, "walking route lookup failed");
                Distance::Unavailable
            }
        }
    }

    async fn estimate_geodesic(&self, origin: GeoPoint, store_name: &str, city: &str) -> Distance {
        let query = format!("{store_name},{city}");
        let candidates = match self.places.search(&query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(store = store_name, error = %e, "place search failed");
                return Distance::Unavailable;
            }
        };

        candidates
            .into_iter()
            .map(|point| haversine_km(origin, point))
            .min_by(f64::total_cmp)
            .map_or(Distance::Unavailable, Distance::Known)
    }
}
