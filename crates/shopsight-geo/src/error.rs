use thiserror::Error;

/// Errors from the geocoding, routing, and place-search clients.
///
/// Callers that annotate offers never surface these; the distance estimator
/// logs them and degrades to an unavailable distance.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid geo API base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Errors from the device-location seam.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission was denied")]
    PermissionDenied,

    #[error("device position is unavailable")]
    PositionUnavailable,
}
