//! Store geolocation and distance estimation.
//!
//! Two pluggable strategies turn a retailer name plus city hint into a
//! travel distance from the device position: the routing strategy geocodes
//! the store through a venue-layer geocoder and asks a routing API for the
//! walking distance, and the geodesic fallback place-searches the store and
//! takes the minimum great-circle distance over all candidates. Every
//! failure along either path degrades to [`shopsight_core::Distance::Unavailable`]
//! rather than erroring the offer.

pub mod error;
pub mod geodesic;
pub mod location;
pub mod ors;
pub mod places;
pub mod strategy;

pub use error::{GeoError, LocationError};
pub use geodesic::haversine_km;
pub use location::{LocationProvider, StaticLocation};
pub use ors::OrsClient;
pub use places::PlacesClient;
pub use strategy::{DistanceEstimator, DistanceStrategy};
