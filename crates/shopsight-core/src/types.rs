//! Request-scoped data model for one capture/resolve cycle.
//!
//! Every type here is created at the start of a resolve call, flows through
//! the pipeline stages, and is dropped once the result set is handed back to
//! the caller. Nothing is cached or persisted across requests.

use serde::{Deserialize, Serialize};

/// A device or store position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Which extraction prompt the vision identifier sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentificationMode {
    /// Ask the model for the UPC digits printed under the barcode.
    Barcode,
    /// Ask the model for a one-sentence brand + product description.
    Description,
}

/// What the vision identifier extracted from the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identification {
    /// A digit string read from a barcode. Accepted as-is; no check-digit
    /// validation is applied.
    Upc(String),
    /// A free-text product description, e.g. "Old Spice Pure Sport Deodorant".
    Description(String),
}

/// One capture request: the photographed image plus location context.
#[derive(Debug, Clone)]
pub struct CaptureInput {
    /// Raw image bytes as captured; base64-encoded only at the transport
    /// boundary.
    pub image: Vec<u8>,
    /// City used to bias store geocoding, e.g. "Winnipeg". Captures without
    /// one fall back to the pipeline's configured default city.
    pub city: Option<String>,
    /// Device position, when the caller already has one. When absent the
    /// pipeline asks its location provider.
    pub origin: Option<GeoPoint>,
}

/// Travel distance to a retailer, or the explicit "could not determine"
/// marker. Per-offer distance failures degrade to [`Distance::Unavailable`]
/// rather than erroring the offer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Estimated distance in kilometers.
    Known(f64),
    Unavailable,
}

impl std::fmt::Display for Distance {
    /// Renders `"450m"` below one kilometer, `"2.3km"` otherwise, and the
    /// `"Distance unavailable"` sentinel for the unknown case.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Known(km) if *km < 1.0 => {
                write!(f, "{}m", (km * 1000.0).round() as i64)
            }
            Distance::Known(km) => write!(f, "{km:.1}km"),
            Distance::Unavailable => write!(f, "Distance unavailable"),
        }
    }
}

/// One retailer's listing for the resolved product.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub title: String,
    /// Vendor-formatted display price, e.g. "$12.99".
    pub price: String,
    /// Numeric value derived from `price`; `f64::INFINITY` when the display
    /// string has no parseable number, so unpriced offers sort last.
    pub price_value: f64,
    /// Seller text exactly as the search vendor returned it.
    pub seller: String,
    /// Canonical retailer display name mapped from `seller`.
    pub canonical_seller: String,
    pub rating: Option<String>,
    pub review_count: Option<String>,
    pub thumbnail_url: Option<String>,
    pub product_link: Option<String>,
    pub distance: Distance,
}

/// The pipeline's terminal payload: offers in ascending price order.
///
/// Ties keep the original search-result order (stable sort). Replaced
/// wholesale on the next capture, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct ResolvedResultSet {
    pub offers: Vec<Offer>,
}

impl ResolvedResultSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
