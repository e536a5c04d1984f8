//! Wire types for the shopping-search vendor.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub shopping_results: Vec<RawOffer>,
}

/// One listing exactly as the vendor returned it.
///
/// `rating` and `reviews` arrive as strings from some vendors and bare
/// numbers from others; they are kept as raw JSON here and stringified by
/// [`RawOffer::rating_text`]/[`RawOffer::reviews_text`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawOffer {
    pub title: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub reviews: Option<Value>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub product_link: Option<String>,
}

impl RawOffer {
    #[must_use]
    pub fn rating_text(&self) -> Option<String> {
        self.rating.as_ref().and_then(display_string)
    }

    #[must_use]
    pub fn reviews_text(&self) -> Option<String> {
        self.reviews.as_ref().and_then(display_string)
    }
}

/// Stringifies a scalar JSON value; non-scalar shapes are dropped.
fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
