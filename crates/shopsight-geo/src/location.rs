//! Device-location seam.
//!
//! On the mobile client the device position comes from a permission-gated
//! OS service; this core only needs "give me a [`GeoPoint`] or a typed
//! refusal". Position is re-requested on every resolve and never cached, so
//! providers must tolerate being asked repeatedly.

use shopsight_core::GeoPoint;

use crate::error::LocationError;

/// Source of the device's current position.
pub trait LocationProvider: Send + Sync {
    /// Returns the current device position.
    ///
    /// # Errors
    ///
    /// - [`LocationError::PermissionDenied`] when the user refused access.
    /// - [`LocationError::PositionUnavailable`] when no fix is available.
    fn locate(&self) -> Result<GeoPoint, LocationError>;
}

/// Fixed-position provider for hosts without a location service (servers,
/// tests, simulators). Configured from `SHOPSIGHT_ORIGIN_LATITUDE`/
/// `SHOPSIGHT_ORIGIN_LONGITUDE`.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocation(pub GeoPoint);

impl LocationProvider for StaticLocation {
    fn locate(&self) -> Result<GeoPoint, LocationError> {
        Ok(self.0)
    }
}
