use thiserror::Error;

/// Errors from the vision identification call. Any of these aborts the
/// pipeline with the "could not detect a product" user message.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The model responded but produced no usable text (or, in barcode mode,
    /// no digits).
    #[error("vision model returned no usable {expected}")]
    EmptyExtraction { expected: &'static str },

    #[error("invalid vision API base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Errors from the barcode catalog lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The database has no product for this code.
    #[error("no product found for UPC {upc}")]
    NotFound { upc: String },

    /// Lookup was attempted without a configured catalog API key.
    #[error("barcode catalog is not configured")]
    NotConfigured,

    #[error("invalid catalog API base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
