//! Shared types and configuration for the shopsight product-resolution
//! pipeline.
//!
//! Holds the request-scoped data model (`Offer`, `Distance`, `GeoPoint`),
//! price parsing and sorting, seller-name normalization against the retailer
//! catalog, and environment-driven application configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod normalize;
pub mod price;
pub mod retailers;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use normalize::clean_seller;
pub use price::{parse_price, sort_by_price};
pub use retailers::{load_retailers, RetailerCatalog};
pub use types::{
    CaptureInput, Distance, GeoPoint, Identification, IdentificationMode, Offer,
    ResolvedResultSet,
};
