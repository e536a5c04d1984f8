//! Shopping-listings search client.
//!
//! Queries a Google-Shopping-style search vendor with fixed regional
//! constants, caps the result count, and drops every offer whose seller is
//! not on the target-retailer allow-list. "No results" is success, not an
//! error; the pipeline additionally degrades transport failures to an empty
//! set.

pub mod client;
pub mod error;
pub mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use types::RawOffer;
