//! Product identification clients.
//!
//! Two HTTP clients live here: [`VisionClient`] sends a captured image to a
//! vision-language model and extracts either a UPC digit string or a
//! one-sentence product description, and [`CatalogClient`] resolves a UPC to
//! brand/title metadata via a barcode database. Both wrap `reqwest` with
//! typed errors and accept a custom base URL so tests run against wiremock.

pub mod catalog;
pub mod client;
pub mod error;
pub mod types;

pub use catalog::CatalogClient;
pub use client::VisionClient;
pub use error::{CatalogError, VisionError};
pub use types::CatalogProduct;
