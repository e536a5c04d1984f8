//! The product-resolution orchestrator.
//!
//! Chains the vision, catalog, search, and geo clients into one linear flow:
//! image → identification → (catalog lookup) → shopping search → retailer
//! filtering and canonicalization → concurrent distance annotation → price
//! sort. Stage failures abort with a stage-tagged error; search failures
//! degrade to an empty result set and per-offer distance failures degrade
//! only that offer.

pub mod builder;
pub mod error;
pub mod pipeline;
pub mod stage;

pub use builder::{build_pipeline, BuildError};
pub use error::PipelineError;
pub use pipeline::ResolutionPipeline;
pub use stage::PipelineStage;
